use chrono::NaiveDateTime;
use ficha_model::CleaningOptions;

/// Per-run inputs shared by every step.
#[derive(Debug, Clone)]
pub struct CleaningContext {
    /// Reference time for future-date detection.
    pub now: NaiveDateTime,
    pub options: CleaningOptions,
}

impl CleaningContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            options: CleaningOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }
}
