//! JSON export of an employee's to-do list.
//!
//! # Design
//! The file layout is `{"<id>": [ExportRecord, ...]}` indented by four
//! spaces with every non-ASCII character written as a `\uXXXX` escape, the
//! same bytes the original reporting scripts produced. `AsciiFormatter`
//! wraps serde_json's `PrettyFormatter` and only changes how string
//! fragments are emitted.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::debug;

use crate::error::ExportError;
use crate::types::{ExportRecord, TodoItem};

const INDENT: &[u8] = b"    ";

/// Name of the export file for `employee_id`, relative to the output directory.
pub fn export_file_name(employee_id: u64) -> String {
    format!("{employee_id}.json")
}

/// Project `items` into export records and serialize them under the
/// employee's id.
pub fn render_export(employee_id: u64, items: &[TodoItem]) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<ExportRecord> = items.iter().map(ExportRecord::from).collect();
    let document = BTreeMap::from([(employee_id.to_string(), records)]);

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
    document.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `<employee_id>.json` into `dir`, replacing any existing file.
///
/// Returns the path that was written.
pub fn write_export(dir: &Path, employee_id: u64, items: &[TodoItem]) -> Result<PathBuf, ExportError> {
    let bytes = render_export(employee_id, items)?;
    let path = dir.join(export_file_name(employee_id));
    fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), records = items.len(), "export written");
    Ok(path)
}

/// Pretty formatter that escapes everything outside printable ASCII.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
