use std::fmt;

/// A post written during the run
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedSummary {
    pub category: String,
    pub title: String,
}

/// Terminal state of one category.
///
/// Article extraction failures are absorbed by the snippet fallback and never
/// show up here.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    Published(PublishedSummary),
    SkippedNoFeed,
    SkippedSummarizeFailed,
    SkippedEmptySummary,
    SkippedUnsafe,
}

impl CategoryOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, CategoryOutcome::Published(_))
    }
}

impl fmt::Display for CategoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOutcome::Published(_) => write!(f, "published"),
            CategoryOutcome::SkippedNoFeed => write!(f, "skipped: no feed item"),
            CategoryOutcome::SkippedSummarizeFailed => write!(f, "skipped: summarization failed"),
            CategoryOutcome::SkippedEmptySummary => write!(f, "skipped: empty summary"),
            CategoryOutcome::SkippedUnsafe => write!(f, "skipped: failed safety check"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: String,
    pub outcome: CategoryOutcome,
}

/// Everything a run did, in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub results: Vec<CategoryResult>,
    pub published: Vec<PublishedSummary>,
}

impl RunReport {
    pub fn record(&mut self, category: &str, outcome: CategoryOutcome) {
        if let CategoryOutcome::Published(summary) = &outcome {
            self.published.push(summary.clone());
        }
        self.results.push(CategoryResult {
            category: category.to_string(),
            outcome,
        });
    }

    pub fn outcome_for(&self, category: &str) -> Option<&CategoryOutcome> {
        self.results
            .iter()
            .find(|r| r.category == category)
            .map(|r| &r.outcome)
    }
}
