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

//! src/core/parser.rs
//!
//! Schedule string parser
//!
//! Catalogue rows carry their meeting times in a single free-text field:
//!
//! ```text
//! "Saturday 08:30-09:50 | Tuesday 08:30-09:50 | 304"
//! "Sunday 14:00-16:30 | 627 - Computer Lab"
//! "Schedule TBA"
//! ```
//!
//! Segments are pipe-separated; each is either a `Weekday HH:MM-HH:MM`
//! token or an unrelated room descriptor. This module extracts the time
//! tokens and drops everything else.
//!
//! # Architecture
//! Segment parsing uses nom combinators for composable, type-safe parsing.
//! The parser is deliberately permissive: catalogue data quality varies,
//! and a stray room token must never fail the whole row. Anything that
//! does not match the day+time shape is silently discarded; the room is
//! transmitted in a separate column of the same row.

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{alpha1, char, space0, space1},
    combinator::map_opt,
};
use nom::{error::ErrorKind, IResult, Parser};
use regex::Regex;

use crate::core::types::{TimeInterval, Weekday};

/// Parses a raw schedule field into its time intervals
///
/// A trimmed input equal (case-insensitively) to `"SCHEDULE TBA"` or
/// `"TBA"`, or an empty one, yields an empty vector. That is the valid
/// "unscheduled" state, not an error. Output order follows segment order.
///
/// # Example
/// ```
/// use routine_planner::core::parser::parse_schedule;
///
/// let slots = parse_schedule("Saturday 08:30-09:50 | Tuesday 08:30-09:50 | 304");
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].start_min, 510);
/// ```
pub fn parse_schedule(raw: &str) -> Vec<TimeInterval> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("SCHEDULE TBA")
        || trimmed.eq_ignore_ascii_case("TBA")
    {
        return Vec::new();
    }

    trimmed
        .split('|')
        .filter_map(|segment| match parse_segment(segment.trim()) {
            // The whole segment must be a day+time token; partial matches
            // (e.g. "627 - Computer Lab") are room descriptors, not times.
            Ok(("", interval)) => Some(interval),
            _ => None,
        })
        .collect()
}

/// Parses a single `Weekday HH:MM-HH:MM` segment
///
/// Whitespace is tolerated around the dash. The weekday is matched
/// case-insensitively against the seven-day enumeration and normalized to
/// its canonical capitalized form. Segments whose times are out of range
/// or inverted (start not before end) fail the parse and are dropped by
/// the caller.
pub fn parse_segment(input: &str) -> IResult<&str, TimeInterval> {
    let (input, day) = parse_weekday(input)?;
    let (input, _) = space1(input)?;
    let (input, (start_min, start_label)) = parse_clock(input)?;
    let (input, _) = (space0, char('-'), space0).parse(input)?;
    let (input, (end_min, end_label)) = parse_clock(input)?;

    // A meeting window must have positive duration
    if start_min >= end_min {
        return Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify)));
    }

    Ok((
        input,
        TimeInterval {
            day,
            start_min,
            end_min,
            start_label,
            end_label,
        },
    ))
}

/// Parses a weekday name via membership in the seven-day enumeration
fn parse_weekday(input: &str) -> IResult<&str, Weekday> {
    map_opt(alpha1, Weekday::from_name).parse(input)
}

/// Parses an `HH:MM` clock token into (minutes-since-midnight, verbatim text)
///
/// Accepts one- or two-digit hours and exactly two-digit minutes. The
/// verbatim token is kept alongside the numeric value so display code can
/// echo the catalogue's own formatting.
fn parse_clock(input: &str) -> IResult<&str, (u16, String)> {
    let digits = |c: char| c.is_ascii_digit();
    let (rest, (hours, _, minutes)) =
        (take_while_m_n(1, 2, digits), char(':'), take_while_m_n(2, 2, digits)).parse(input)?;

    let label = format!("{}:{}", hours, minutes);
    match clock_to_minutes(&label) {
        Some(total) => Ok((rest, (total, label))),
        None => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify))),
    }
}

/// Converts an `HH:MM` string into total minutes from midnight
///
/// Returns `None` for out-of-range components (hours ≥ 24, minutes ≥ 60)
/// or malformed input.
pub fn clock_to_minutes(text: &str) -> Option<u16> {
    let (h, m) = text.trim().split_once(':')?;
    let hours: u16 = h.parse().ok()?;
    let minutes: u16 = m.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Builds the case-insensitive `"- Computer Lab"` suffix pattern
///
/// Interior whitespace is flexible: the catalogue writes "627 - Computer
/// Lab", "627- Computer Lab" and "627 -Computer Lab" interchangeably.
fn lab_suffix_pattern() -> Regex {
    Regex::new(r"(?i)\s*-\s*computer\s*lab")
        .expect("computer lab suffix should be valid regex")
}

/// Normalizes a raw room string from the catalogue
///
/// Strips a case-insensitive `"- Computer Lab"` suffix and appends a
/// `"(Lab)"` marker when the suffix was present; anything else passes
/// through unchanged (trimmed). Pure string normalization; no conflict
/// semantics attach to the room.
///
/// ```text
/// "727 - Computer Lab" → "727 (Lab)"
/// "304"                → "304"
/// ```
pub fn clean_room_label(raw: &str) -> String {
    let pattern = lab_suffix_pattern();
    if pattern.is_match(raw) {
        let cleaned = pattern.replace(raw, "");
        format!("{} (Lab)", cleaned.trim())
    } else {
        raw.trim().to_string()
    }
}
