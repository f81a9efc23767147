//! Fetching an employee's to-do list and summarising completion.

use std::io::{self, Write};

use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Employee, TodoItem};

/// Fetch the employee record and their to-do list.
///
/// The employee lookup runs first and must succeed before the to-do list is
/// requested. The first failure is returned as-is; there are no retries and
/// no partial results.
pub fn fetch<T: Transport + ?Sized>(
    transport: &T,
    client: &TodoClient,
    employee_id: u64,
) -> Result<(Employee, Vec<TodoItem>), ApiError> {
    let request = client.build_get_employee(employee_id);
    debug!(url = %request.url, "fetching employee");
    let employee = transport
        .execute(&request)
        .and_then(|response| client.parse_employee(&request, response))
        .inspect_err(|e| debug!(employee_id, error = %e, "employee lookup failed"))?;

    let request = client.build_list_todos(employee_id);
    debug!(url = %request.url, "fetching todos");
    let todos = transport
        .execute(&request)
        .and_then(|response| client.parse_todos(&request, response))
        .inspect_err(|e| debug!(employee_id, error = %e, "todo lookup failed"))?;

    debug!(employee_id, count = todos.len(), "fetched todos");
    Ok((employee, todos))
}

/// Completion counts for one employee.
///
/// `done` holds the titles of completed items in response order, so
/// `done.len() <= total` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress<'a> {
    pub total: usize,
    pub done: Vec<&'a str>,
}

impl<'a> Progress<'a> {
    pub fn from_items(items: &'a [TodoItem]) -> Self {
        Self {
            total: items.len(),
            done: items
                .iter()
                .filter(|item| item.completed)
                .map(|item| item.title.as_str())
                .collect(),
        }
    }

    pub fn done_count(&self) -> usize {
        self.done.len()
    }
}

/// Write the completion summary: one header line, then a tab-indented line
/// per completed title.
pub fn write_report<W: Write>(out: &mut W, employee_name: &str, items: &[TodoItem]) -> io::Result<()> {
    let progress = Progress::from_items(items);
    writeln!(
        out,
        "Employee {employee_name} is done with tasks({}/{}):",
        progress.done_count(),
        progress.total
    )?;
    for title in &progress.done {
        writeln!(out, "\t{title}")?;
    }
    Ok(())
}
