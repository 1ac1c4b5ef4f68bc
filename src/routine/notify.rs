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

//! Admission outcomes and user-facing notifications
//!
//! Every membership change produces a structured outcome first and a
//! human-readable message second. Callers and tests branch on the outcome
//! variants; the message prose is derived from them in exactly one place
//! (this module) so the wording stays consistent everywhere it surfaces.

use serde::Serialize;
use std::fmt;

use crate::core::types::{EntryRole, RoutineEntry, Section};

/// Severity of a notification, used for presentation (coloring, icons)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Why a candidate section was not admitted
///
/// A closed set; every rejection is recoverable by the user (pick another
/// section, or remove the entry in the way first). Rejections never
/// mutate the routine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum RejectReason {
    /// The same (course, section) pair is already in the routine
    DuplicateSection,

    /// The section's schedule is TBA; nothing to place on the grid
    UnscheduledSection,

    /// A meeting window overlaps an admitted entry of a different course
    TimeConflict {
        /// The first admitted entry found to overlap the candidate
        with: RoutineEntry,
    },
}

/// Result of trying to add a section to the routine
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AddOutcome {
    /// The section was admitted; carries the entry as appended
    Admitted(RoutineEntry),

    /// The section was rejected; the routine is unchanged
    Rejected(RejectReason),
}

impl AddOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AddOutcome::Admitted(_))
    }
}

/// A human-readable outcome message with its severity
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// Message for an admission attempt, derived from its outcome
    pub fn for_add_outcome(candidate: &Section, outcome: &AddOutcome) -> Notification {
        let code = &candidate.course_code;
        let section = &candidate.section_label;

        match outcome {
            AddOutcome::Admitted(entry) => match entry.role {
                EntryRole::Primary => Notification {
                    message: format!("Added {} Section {}!", code, section),
                    severity: Severity::Success,
                },
                EntryRole::Backup => Notification {
                    message: format!("Added {} Sec {} as Backup", code, section),
                    severity: Severity::Success,
                },
            },
            AddOutcome::Rejected(RejectReason::DuplicateSection) => Notification {
                message: format!("{} Section {} is already in your routine.", code, section),
                severity: Severity::Warning,
            },
            AddOutcome::Rejected(RejectReason::UnscheduledSection) => Notification {
                message: format!(
                    "{} Section {} has a TBA schedule and cannot be added.",
                    code, section
                ),
                severity: Severity::Warning,
            },
            AddOutcome::Rejected(RejectReason::TimeConflict { with }) => Notification {
                message: format!(
                    "Time Conflict! {}-{} overlaps with \"{}\" ({}-{}).",
                    code, section, with.course_name, with.course_code, with.section_label
                ),
                severity: Severity::Error,
            },
        }
    }

    /// Message for a removed entry
    pub fn for_removal(entry: &RoutineEntry) -> Notification {
        Notification {
            message: format!(
                "Removed {} Section {}.",
                entry.course_code, entry.section_label
            ),
            severity: Severity::Success,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EntryRole, Section};
    use crate::routine::palette::color_at;

    fn candidate(code: &str, label: &str) -> Section {
        Section {
            course_code: code.to_string(),
            course_name: format!("{} course", code),
            section_label: label.to_string(),
            faculty: "TBA".to_string(),
            room: "304".to_string(),
            intervals: Vec::new(),
        }
    }

    #[test]
    fn test_primary_admission_message() {
        let section = candidate("CSE101", "1");
        let entry = RoutineEntry::from_section(&section, color_at(0), EntryRole::Primary);
        let note = Notification::for_add_outcome(&section, &AddOutcome::Admitted(entry));

        assert_eq!(note.message, "Added CSE101 Section 1!");
        assert_eq!(note.severity, Severity::Success);
    }

    #[test]
    fn test_backup_admission_message() {
        let section = candidate("CSE101", "2");
        let entry = RoutineEntry::from_section(&section, color_at(0), EntryRole::Backup);
        let note = Notification::for_add_outcome(&section, &AddOutcome::Admitted(entry));

        assert_eq!(note.message, "Added CSE101 Sec 2 as Backup");
        assert_eq!(note.severity, Severity::Success);
    }

    #[test]
    fn test_duplicate_message() {
        let section = candidate("CSE101", "1");
        let note = Notification::for_add_outcome(
            &section,
            &AddOutcome::Rejected(RejectReason::DuplicateSection),
        );

        assert_eq!(note.message, "CSE101 Section 1 is already in your routine.");
        assert_eq!(note.severity, Severity::Warning);
    }

    #[test]
    fn test_unscheduled_message() {
        let section = candidate("CSE101", "3");
        let note = Notification::for_add_outcome(
            &section,
            &AddOutcome::Rejected(RejectReason::UnscheduledSection),
        );

        assert_eq!(
            note.message,
            "CSE101 Section 3 has a TBA schedule and cannot be added."
        );
        assert_eq!(note.severity, Severity::Warning);
    }

    #[test]
    fn test_conflict_message_names_both_sides() {
        let section = candidate("CSE101", "2");
        let other = candidate("CSE220", "1");
        let with = RoutineEntry::from_section(&other, color_at(1), EntryRole::Primary);
        let note = Notification::for_add_outcome(
            &section,
            &AddOutcome::Rejected(RejectReason::TimeConflict { with }),
        );

        assert_eq!(
            note.message,
            "Time Conflict! CSE101-2 overlaps with \"CSE220 course\" (CSE220-1)."
        );
        assert_eq!(note.severity, Severity::Error);
    }

    #[test]
    fn test_removal_message() {
        let section = candidate("CSE101", "1");
        let entry = RoutineEntry::from_section(&section, color_at(0), EntryRole::Primary);
        let note = Notification::for_removal(&entry);

        assert_eq!(note.message, "Removed CSE101 Section 1.");
        assert_eq!(note.severity, Severity::Success);
    }
}
