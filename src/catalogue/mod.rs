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

//! Course catalogue loading and indexing
//!
//! Reads the institutional schedule CSV into typed sections and groups
//! them by course code for lookup and search. The catalogue is built once
//! at startup and read-only afterwards; a load failure is terminal for
//! the session (no routine operations are offered without a catalogue).
//!
//! Expected columns: `Course Code`, `Course Name`, `Section`, `Faculty`,
//! `Room`, `Schedule`. Rows missing a course code or name are dropped
//! before indexing; everything else is kept, including sections whose
//! schedule is TBA (searchable, but never placeable).

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::parser::{clean_room_label, parse_schedule};
use crate::core::types::Section;

pub mod index;
pub mod reader;

pub use index::{Catalogue, CourseGroup};

/// Errors that can occur while loading the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Catalogue file does not exist.
    #[error("Catalogue file not found: {0}")]
    NotFound(PathBuf),

    /// The CSV header lacks a column the row mapping needs.
    #[error("Catalogue is missing required column: {0}")]
    MissingColumn(String),

    /// The file has a header but no data rows (or is entirely empty).
    #[error("Catalogue has no data rows")]
    Empty,

    /// Generic I/O error.
    #[error("IO error reading catalogue: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads and indexes the catalogue CSV at `path`
///
/// # Example
/// ```no_run
/// use routine_planner::catalogue::load_catalogue;
/// use std::path::Path;
///
/// let catalogue = load_catalogue(Path::new("CSE_Courses.csv"))?;
/// println!("{} courses", catalogue.len());
/// # Ok::<(), routine_planner::catalogue::CatalogueError>(())
/// ```
pub fn load_catalogue(path: &Path) -> Result<Catalogue, CatalogueError> {
    if !path.exists() {
        return Err(CatalogueError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let rows = reader::parse_rows(&content)?;
    Ok(Catalogue::from_sections(sections_from_rows(&rows)))
}

/// Maps raw CSV rows to typed sections
///
/// Rows without a course code or course name are excluded. The room is
/// normalized (`clean_room_label`) and the schedule field parsed into
/// intervals; an unparseable schedule simply yields a TBA section.
pub fn sections_from_rows(rows: &[reader::Row]) -> Vec<Section> {
    rows.iter()
        .filter(|row| !row.get("Course Code").is_empty() && !row.get("Course Name").is_empty())
        .map(|row| Section {
            course_code: row.get("Course Code").to_string(),
            course_name: row.get("Course Name").to_string(),
            section_label: row.get("Section").to_string(),
            faculty: row.get("Faculty").to_string(),
            room: clean_room_label(row.get("Room")),
            intervals: parse_schedule(row.get("Schedule")),
        })
        .collect()
}

#[cfg(test)]
mod tests;
