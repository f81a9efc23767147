//! Command-line host for `todo-report-core`.
//!
//! # Overview
//! Parses the invocation into a `Config`, performs the HTTP round-trips with
//! a blocking ureq agent, and prints the completion summary. With `--export`
//! the to-do list is also written to `<employee_id>.json`.
//!
//! # Design
//! `run` takes the transport and the output sink as parameters and returns a
//! `ReportError`; only `main` turns errors into printed messages and exit
//! codes.

pub mod config;
pub mod error;
pub mod logging;
pub mod transport;

use std::io::Write;

use todo_report_core::{export_file_name, fetch, write_export, write_report, TodoClient, Transport};
use tracing::info;

pub use config::{Config, USAGE};
pub use error::ReportError;
pub use transport::UreqTransport;

/// Fetch, summarise and optionally export one employee's to-do list.
pub fn run<T, W>(config: &Config, transport: &T, out: &mut W) -> Result<(), ReportError>
where
    T: Transport + ?Sized,
    W: Write,
{
    let client = TodoClient::new(&config.base_url);
    let (employee, todos) = fetch(transport, &client, config.employee_id)?;
    write_report(out, &employee.name, &todos)?;

    if config.export {
        let path = write_export(&config.output_dir, config.employee_id, &todos)?;
        info!(path = %path.display(), "exported todo list");
        writeln!(out, "TODO list data exported to {}.", export_file_name(config.employee_id))?;
    }
    out.flush()?;
    Ok(())
}
