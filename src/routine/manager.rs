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

//! Routine state and admission policy
//!
//! The `RoutineManager` owns the student's working set of chosen sections
//! for one session. All mutation goes through `add_section`,
//! `remove_section` and `clear`; readers get an immutable view. State is
//! mutated only in response to discrete sequential user actions: single
//! writer, no locking, operations linearizable by construction.
//!
//! # Admission pipeline
//!
//! `add_section` applies these checks in order, short-circuiting on the
//! first failure:
//! 1. duplicate id (`"{code}-{section}"` already admitted)
//! 2. unscheduled candidate (TBA, nothing to place on the grid)
//! 3. time conflict against entries of *other* courses only; sections of
//!    the same course never block each other (backups are expected to
//!    overlap their own course's alternatives)
//!
//! On admission the entry's role is Primary for the first section of a
//! course and Backup afterwards, and its color is the course's existing
//! hue or the next palette slot for a new course.

use crate::core::conflict::find_conflict;
use crate::core::types::{EntryRole, RoutineEntry, Section};
use crate::routine::notify::{AddOutcome, Notification, RejectReason};
use crate::routine::palette::color_at;

/// Observer callback invoked with every membership-change notification
pub type Observer = Box<dyn FnMut(&Notification)>;

/// Owns the routine for the lifetime of a session
///
/// Create one per session, mutate it through user actions, `clear` it to
/// start over. Clearing also resets the color counter, so a fresh session
/// reproduces the same color sequence deterministically.
pub struct RoutineManager {
    /// Admitted entries, in insertion order
    entries: Vec<RoutineEntry>,

    /// Monotonic counter driving palette assignment for distinct courses
    color_index: usize,

    /// Registered membership-change observers
    observers: Vec<Observer>,
}

impl RoutineManager {
    /// Creates an empty routine
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            color_index: 0,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for membership-change notifications
    ///
    /// Observers are invoked synchronously, in registration order, once
    /// per admission attempt and once per successful removal.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// Attempts to add a section to the routine
    ///
    /// Returns the structured outcome; exactly one notification is
    /// emitted per call. Rejections leave the routine untouched.
    pub fn add_section(&mut self, candidate: &Section) -> AddOutcome {
        let id = RoutineEntry::id_for(&candidate.course_code, &candidate.section_label);

        let outcome = if self.entries.iter().any(|e| e.id == id) {
            AddOutcome::Rejected(RejectReason::DuplicateSection)
        } else if candidate.is_unscheduled() {
            AddOutcome::Rejected(RejectReason::UnscheduledSection)
        } else if let Some(with) = find_conflict(candidate, &self.entries, true).cloned() {
            AddOutcome::Rejected(RejectReason::TimeConflict { with })
        } else {
            let entry = self.admit(candidate);
            AddOutcome::Admitted(entry)
        };

        let note = Notification::for_add_outcome(candidate, &outcome);
        self.emit(&note);
        outcome
    }

    /// Appends the candidate with its role and color assigned
    fn admit(&mut self, candidate: &Section) -> RoutineEntry {
        let same_course = self
            .entries
            .iter()
            .find(|e| e.course_code == candidate.course_code);

        let (role, color) = match same_course {
            Some(sibling) => (EntryRole::Backup, sibling.color),
            None => {
                let color = color_at(self.color_index);
                self.color_index += 1;
                (EntryRole::Primary, color)
            }
        };

        let entry = RoutineEntry::from_section(candidate, color, role);
        self.entries.push(entry.clone());
        entry
    }

    /// Removes the entry with the given id
    ///
    /// Removing an unknown id is a no-op, not an error, and emits no
    /// notification (membership did not change).
    pub fn remove_section(&mut self, id: &str) {
        let Some(position) = self.entries.iter().position(|e| e.id == id) else {
            return;
        };

        let removed = self.entries.remove(position);
        let note = Notification::for_removal(&removed);
        self.emit(&note);
    }

    /// Empties the routine and resets the color counter
    pub fn clear(&mut self) {
        self.entries.clear();
        self.color_index = 0;
    }

    /// Read-only view of the admitted entries, in insertion order
    pub fn entries(&self) -> &[RoutineEntry] {
        &self.entries
    }

    /// Number of admitted entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn emit(&mut self, note: &Notification) {
        for observer in self.observers.iter_mut() {
            observer(note);
        }
    }
}

impl Default for RoutineManager {
    fn default() -> Self {
        Self::new()
    }
}
