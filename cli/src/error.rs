//! Errors surfaced by the command-line host.
//!
//! The `Display` output of each variant is exactly the line printed before
//! the process exits.

use thiserror::Error;
use todo_report_core::{ApiError, ExportError};

use crate::config::USAGE;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrong number of arguments or an employee id that is not an integer.
    #[error("{}", USAGE)]
    Usage { reason: String },

    #[error("Error occurred: {0}")]
    Fetch(#[from] ApiError),

    #[error("Error occurred: {0}")]
    Export(#[from] ExportError),

    #[error("Error occurred: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    pub fn usage(err: &clap::Error) -> Self {
        Self::Usage {
            reason: err.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}
