//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use todo_report_core::client::DEFAULT_BASE_URL;

/// Printed on any malformed invocation.
pub const USAGE: &str = "Usage: python3 gather_data_from_an_API.py <employee_id>";

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-report")]
#[command(about = "Report an employee's to-do completion progress", long_about = None)]
#[command(version)]
pub struct Config {
    /// Id of the employee to report on
    pub employee_id: u64,

    /// Also write the to-do list to <employee_id>.json
    #[arg(long, env = "TODO_REPORT_EXPORT")]
    pub export: bool,

    /// Base URL of the users/todos service
    #[arg(long, env = "TODO_REPORT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (0 waits forever)
    #[arg(long, env = "TODO_REPORT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Directory the export file is written to
    #[arg(long, env = "TODO_REPORT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Config {
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
