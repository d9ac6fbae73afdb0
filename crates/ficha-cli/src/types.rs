use std::path::PathBuf;

use ficha_model::CleaningReport;

/// Outcome of one `clean` invocation, as shown to the user.
#[derive(Debug)]
pub struct CleanRunResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub report: CleaningReport,
}
