use serde::{Deserialize, Serialize};
use std::fmt;

/// Attributes scored by the classifier, in request order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    Toxicity,
    Insult,
    Threat,
    SexuallyExplicit,
    Profanity,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Toxicity,
        Attribute::Insult,
        Attribute::Threat,
        Attribute::SexuallyExplicit,
        Attribute::Profanity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Toxicity => "TOXICITY",
            Attribute::Insult => "INSULT",
            Attribute::Threat => "THREAT",
            Attribute::SexuallyExplicit => "SEXUALLY_EXPLICIT",
            Attribute::Profanity => "PROFANITY",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary score per attribute; attributes the service left out score 0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeScores {
    pub toxicity: f64,
    pub insult: f64,
    pub threat: f64,
    pub sexually_explicit: f64,
    pub profanity: f64,
}

impl AttributeScores {
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Toxicity => self.toxicity,
            Attribute::Insult => self.insult,
            Attribute::Threat => self.threat,
            Attribute::SexuallyExplicit => self.sexually_explicit,
            Attribute::Profanity => self.profanity,
        }
    }

    pub fn set(&mut self, attribute: Attribute, score: f64) {
        match attribute {
            Attribute::Toxicity => self.toxicity = score,
            Attribute::Insult => self.insult = score,
            Attribute::Threat => self.threat = score,
            Attribute::SexuallyExplicit => self.sexually_explicit = score,
            Attribute::Profanity => self.profanity = score,
        }
    }

    pub fn uniform(score: f64) -> Self {
        Self {
            toxicity: score,
            insult: score,
            threat: score,
            sexually_explicit: score,
            profanity: score,
        }
    }
}

/// Raw answer of the classification service
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Scores(AttributeScores),
    /// The service answered with a non-success status
    Unavailable { status: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SafetyVerdict {
    Safe,
    Unsafe { attribute: Attribute, score: f64 },
    /// Classification could not be obtained; content is not admitted
    Unavailable { status: u16 },
}

impl SafetyVerdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyVerdict::Safe)
    }
}
