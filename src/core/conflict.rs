//! Routine time-conflict detection
//!
//! A candidate section conflicts with the routine when any of its meeting
//! windows overlaps (half-open, same day) any window of an already-admitted
//! entry. Sections of the *same* course are deliberately exempt: backup
//! sections of one course are expected to overlap or coexist with each
//! other, so admission policy skips them here.
//!
//! # Performance
//! The scan is O(entries × candidate windows × entry windows). Routines
//! hold tens of entries with a handful of windows each, so a full pairwise
//! scan completes in well under a microsecond; no index is warranted.

use crate::core::types::{RoutineEntry, Section};

/// Finds the first admitted entry that conflicts with a candidate section.
///
/// Iterates `existing` in order and, for each entry, all pairs of
/// (candidate window × entry window); the first overlapping pair decides.
/// With `exclude_same_course` set, entries sharing the candidate's
/// `course_code` are skipped entirely.
///
/// Pure function: no state, no side effects. Absence of conflict is
/// `None`; callers only need existence plus one example for messaging,
/// and the first-match tie-break keeps that example deterministic.
pub fn find_conflict<'a>(
    candidate: &Section,
    existing: &'a [RoutineEntry],
    exclude_same_course: bool,
) -> Option<&'a RoutineEntry> {
    for entry in existing {
        if exclude_same_course && entry.course_code == candidate.course_code {
            continue;
        }

        for candidate_window in &candidate.intervals {
            for entry_window in &entry.intervals {
                if candidate_window.overlaps(entry_window) {
                    return Some(entry);
                }
            }
        }
    }

    None
}
