//! src/core/types.rs
//!
//! Core type definitions for routine planning
//!
//! This module defines the fundamental types used throughout the application:
//! - `Weekday`: The seven day names used in schedule strings
//! - `TimeInterval`: One weekly meeting window (day + minute range)
//! - `Section`: One offering of a course (instructor, room, meeting times)
//! - `RoutineEntry`: A section admitted into the student's routine
//!
//! All types implement serialization for export and are designed around
//! minutes-since-midnight arithmetic (no timezone or DST handling; the
//! institution runs a single fixed weekly calendar).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day names used in schedule strings
///
/// The institutional week starts on Saturday. All seven days are valid
/// parse targets, but only the first five carry classes and appear on the
/// visible grid (see [`Weekday::SCHEDULABLE`]).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All seven days, in institutional week order (Saturday first).
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The five days classes actually run on (the visible grid columns).
    pub const SCHEDULABLE: [Weekday; 5] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
    ];

    /// Canonical capitalized day name
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Case-insensitive lookup against the seven-day enumeration
    ///
    /// Schedule strings from the catalogue are not guaranteed to use
    /// canonical casing ("saturday", "SATURDAY" and "Saturday" all occur),
    /// so membership is checked after lowercasing both sides.
    pub fn from_name(name: &str) -> Option<Weekday> {
        let lowered = name.trim().to_lowercase();
        Weekday::ALL.into_iter().find(|d| d.name().to_lowercase() == lowered)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One weekly meeting window
///
/// Half-open minute range `[start_min, end_min)` on a single day, with
/// `start_min < end_min` and both inside `[0, 1440)`. The verbatim `HH:MM`
/// text from the source string is retained in `start_label`/`end_label` so
/// display code never has to re-derive a label and risk formatting drift.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TimeInterval {
    /// Day this window falls on
    pub day: Weekday,

    /// Start, in minutes since midnight
    pub start_min: u16,

    /// End, in minutes since midnight (exclusive)
    pub end_min: u16,

    /// Verbatim start text from the schedule string (e.g. "08:30")
    pub start_label: String,

    /// Verbatim end text from the schedule string (e.g. "09:50")
    pub end_label: String,
}

impl TimeInterval {
    /// Half-open overlap test
    ///
    /// Two windows overlap iff they share a day and
    /// `a.start < b.end && b.start < a.end`. Touching endpoints (one
    /// section ending at the exact minute another begins) do NOT overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_label, self.end_label)
    }
}

/// Formats minutes-since-midnight as a 12-hour clock label
///
/// e.g. 510 → "8:30 AM", 990 → "4:30 PM", 0 → "12:00 AM"
pub fn format_minutes(minutes: u16) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    let suffix = if h >= 12 { "PM" } else { "AM" };
    let display_h = match h {
        0 => 12,
        1..=12 => h,
        _ => h - 12,
    };
    format!("{}:{:02} {}", display_h, m, suffix)
}

/// One offering of a course
///
/// Identified by `course_code` + `section_label`. An empty `intervals`
/// list means the schedule is still to be announced (TBA); such sections
/// are valid catalogue data but can never be placed on the time grid.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Section {
    /// Course code (e.g. "CSE101")
    pub course_code: String,

    /// Full course name
    pub course_name: String,

    /// Section label within the course (e.g. "1", "A")
    pub section_label: String,

    /// Instructor name as listed in the catalogue
    pub faculty: String,

    /// Room, already normalized (see `clean_room_label`)
    pub room: String,

    /// Weekly meeting windows, in schedule-string order
    pub intervals: Vec<TimeInterval>,
}

impl Section {
    /// True when the section has no parseable meeting times (schedule TBA)
    pub fn is_unscheduled(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Section {}", self.course_code, self.section_label)
    }
}

/// Role of an entry within the routine
///
/// The first admitted section of a course is its Primary; every further
/// admitted section of the same course is a Backup alternative the student
/// is tracking alongside it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum EntryRole {
    Primary,
    Backup,
}

impl fmt::Display for EntryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRole::Primary => write!(f, "Primary"),
            EntryRole::Backup => write!(f, "Backup"),
        }
    }
}

/// One hue family from the display palette
///
/// Static CSS-style color data; all sections of one course share a single
/// `PaletteColor` so the course reads as one hue on the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PaletteColor {
    /// Human-readable hue name (e.g. "indigo")
    pub name: &'static str,

    /// Block fill color
    pub bg: &'static str,

    /// Block border color
    pub border: &'static str,

    /// Text color on the block
    pub text: &'static str,
}

/// A section admitted into the routine
///
/// Created only by the routine manager on successful admission; carries
/// the section's fields plus the assigned id, color and role.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoutineEntry {
    /// Unique id within the routine: `"{course_code}-{section_label}"`
    pub id: String,

    pub course_code: String,
    pub course_name: String,
    pub section_label: String,
    pub faculty: String,
    pub room: String,

    /// Weekly meeting windows copied from the admitted section
    pub intervals: Vec<TimeInterval>,

    /// Hue family shared by every entry of this course
    pub color: PaletteColor,

    /// Primary for the first entry of a course, Backup afterwards
    pub role: EntryRole,
}

impl RoutineEntry {
    /// Routine id for a course code + section label pair
    pub fn id_for(course_code: &str, section_label: &str) -> String {
        format!("{}-{}", course_code, section_label)
    }

    /// Builds an entry from an admitted section
    pub fn from_section(section: &Section, color: PaletteColor, role: EntryRole) -> Self {
        Self {
            id: Self::id_for(&section.course_code, &section.section_label),
            course_code: section.course_code.clone(),
            course_name: section.course_name.clone(),
            section_label: section.section_label.clone(),
            faculty: section.faculty.clone(),
            room: section.room.clone(),
            intervals: section.intervals.clone(),
            color,
            role,
        }
    }
}

impl fmt::Display for RoutineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Section {} [{}]", self.course_code, self.section_label, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(day: Weekday, start: u16, end: u16) -> TimeInterval {
        TimeInterval {
            day,
            start_min: start,
            end_min: end,
            start_label: format!("{}:{:02}", start / 60, start % 60),
            end_label: format!("{}:{:02}", end / 60, end % 60),
        }
    }

    #[test]
    fn test_weekday_from_name_case_insensitive() {
        assert_eq!(Weekday::from_name("saturday"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_name("SATURDAY"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_name("Wednesday"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_name("  friday "), Some(Weekday::Friday));
    }

    #[test]
    fn test_weekday_from_name_rejects_unknown() {
        assert_eq!(Weekday::from_name("Someday"), None);
        assert_eq!(Weekday::from_name("Sat"), None); // abbreviations are not day names
        assert_eq!(Weekday::from_name(""), None);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(format!("{}", Weekday::Saturday), "Saturday");
        assert_eq!(format!("{}", Weekday::Friday), "Friday");
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = interval(Weekday::Monday, 510, 590);
        let b = interval(Weekday::Monday, 550, 630);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = interval(Weekday::Monday, 600, 660);
        let b = interval(Weekday::Monday, 660, 720);

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_different_days_never_overlap() {
        let a = interval(Weekday::Monday, 510, 590);
        let b = interval(Weekday::Tuesday, 510, 590);

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = interval(Weekday::Sunday, 480, 720);
        let inner = interval(Weekday::Sunday, 540, 600);

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(510), "8:30 AM");
        assert_eq!(format_minutes(990), "4:30 PM");
        assert_eq!(format_minutes(720), "12:00 PM");
        assert_eq!(format_minutes(0), "12:00 AM");
        assert_eq!(format_minutes(59), "12:59 AM");
    }

    #[test]
    fn test_section_unscheduled() {
        let section = Section {
            course_code: "CSE101".to_string(),
            course_name: "Introduction to Programming".to_string(),
            section_label: "1".to_string(),
            faculty: "Dr. Rahman".to_string(),
            room: "304".to_string(),
            intervals: Vec::new(),
        };

        assert!(section.is_unscheduled());
        assert_eq!(format!("{}", section), "CSE101 Section 1");
    }

    #[test]
    fn test_routine_entry_id() {
        assert_eq!(RoutineEntry::id_for("CSE101", "1"), "CSE101-1");
        assert_eq!(RoutineEntry::id_for("EEE2101", "B"), "EEE2101-B");
    }
}
