//! Synchronous core of the employee to-do reporter.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! `Transport` that performs the actual round-trip, so everything in this
//! crate is deterministic and testable with canned responses.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - `fetch` drives the two GETs through a `Transport` and fails on the
//!   first error. No partial results.
//! - `Progress` and `write_report` produce the completion summary.
//! - `export` projects to-dos into `ExportRecord`s and writes `<id>.json`.

pub mod client;
pub mod error;
pub mod export;
pub mod http;
pub mod report;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, ExportError};
pub use export::{export_file_name, render_export, write_export};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use report::{fetch, write_report, Progress};
pub use types::{Employee, ExportRecord, TodoItem};
