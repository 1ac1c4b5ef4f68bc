// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Header-driven CSV reading for the catalogue export
//!
//! The institutional export is a plain single-line-per-record CSV with a
//! header row. Fields may be double-quoted (course names contain commas);
//! `""` inside a quoted field is an escaped quote. All header names and
//! values are surrounded-whitespace trimmed, matching what the transport
//! layer guarantees the core.

use std::collections::HashMap;

use crate::catalogue::CatalogueError;

/// Columns the row mapping needs
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Course Code",
    "Course Name",
    "Section",
    "Faculty",
    "Room",
    "Schedule",
];

/// One data row, keyed by header name
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Value under `column`, or `""` when the row has none
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Parses CSV content into rows keyed by the header line
///
/// Blank lines are skipped. Rows shorter than the header leave their
/// missing columns empty; surplus fields are ignored. Fails when the
/// header lacks a required column or no data rows remain.
pub fn parse_rows(content: &str) -> Result<Vec<Row>, CatalogueError> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(CatalogueError::Empty)?;
    let headers: Vec<String> = split_record(header_line)
        .into_iter()
        .map(|field| field.trim().to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(CatalogueError::MissingColumn(required.to_string()));
        }
    }

    let rows: Vec<Row> = lines
        .map(|line| {
            let fields = split_record(line);
            let values = headers
                .iter()
                .zip(fields)
                .map(|(header, field)| (header.clone(), field.trim().to_string()))
                .collect();
            Row { values }
        })
        .collect();

    if rows.is_empty() {
        return Err(CatalogueError::Empty);
    }

    Ok(rows)
}

/// Splits one CSV record into its fields
///
/// Minimal quote handling: a field wrapped in double quotes may contain
/// commas, and `""` inside it is a literal quote.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
