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

//! Calendar layout engine
//!
//! Turns the current routine into per-day placement geometry for a grid
//! renderer. Two passes per schedulable weekday:
//!
//! 1. **Grouping**: same-course, same-day, time-overlapping entries are
//!    interchangeable alternatives the student is tracking, so each
//!    Primary claims the overlapping Backups of its course into one
//!    expandable stack instead of letting them collide visually. Backups
//!    at other times (or whose primary sits elsewhere) stand alone.
//! 2. **Lane assignment**: greedy interval partitioning over the
//!    remaining items: sort by start time, reuse the lowest-indexed lane
//!    that has already ended, else open a new one. This uses the minimum
//!    number of lanes, equal to the maximum number of simultaneously
//!    active items at any instant.
//!
//! The engine is pure and recomputes from scratch on every call; routines
//! are small (tens of entries), so there is no incremental cache to
//! invalidate. It performs no validation and cannot fail; an empty
//! routine simply produces empty per-day lists.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::types::{EntryRole, RoutineEntry, TimeInterval, Weekday};

/// First minute shown on the grid (08:30)
pub const GRID_START_MIN: u16 = 510;

/// Last minute shown on the grid (16:30)
pub const GRID_END_MIN: u16 = 990;

/// A backup grouped under a primary display item
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackupSlot {
    pub entry: RoutineEntry,
    pub interval: TimeInterval,
}

/// One placed block on the grid
///
/// `lane` / `total_lanes` give the horizontal slot: the renderer divides
/// the day column evenly (`width = 100% / total_lanes`,
/// `left = lane * width`). Vertical placement comes from the interval via
/// [`top_percent`] / [`height_percent`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayItem {
    /// The entry this block represents
    pub anchor: RoutineEntry,

    /// The anchor's meeting window on this day
    pub interval: TimeInterval,

    /// Same-course backups folded under this block, in routine order
    pub backups: Vec<BackupSlot>,

    /// Zero-based horizontal slot
    pub lane: usize,

    /// Lane count for the day after assignment
    pub total_lanes: usize,
}

/// Lays out the whole week
///
/// One independent computation per schedulable weekday; days without
/// entries map to empty lists. Thursday and Friday windows (valid parse
/// targets, never class days) are not placed.
pub fn layout_week(entries: &[RoutineEntry]) -> HashMap<Weekday, Vec<DisplayItem>> {
    Weekday::SCHEDULABLE
        .into_iter()
        .map(|day| (day, layout_day(entries, day)))
        .collect()
}

/// Lays out a single day
pub fn layout_day(entries: &[RoutineEntry], day: Weekday) -> Vec<DisplayItem> {
    let pairs: Vec<(&RoutineEntry, &TimeInterval)> = entries
        .iter()
        .flat_map(|entry| {
            entry
                .intervals
                .iter()
                .filter(|window| window.day == day)
                .map(move |window| (entry, window))
        })
        .collect();

    let mut claimed = vec![false; pairs.len()];
    let mut items = Vec::new();

    // Grouping pass: each unclaimed primary claims the unclaimed backups
    // of its own course that overlap it on this day
    for i in 0..pairs.len() {
        let (entry, window) = pairs[i];
        if claimed[i] || entry.role != EntryRole::Primary {
            continue;
        }
        claimed[i] = true;

        let mut backups = Vec::new();
        for j in 0..pairs.len() {
            if claimed[j] {
                continue;
            }
            let (other, other_window) = pairs[j];
            if other.role == EntryRole::Backup
                && other.course_code == entry.course_code
                && other_window.overlaps(window)
            {
                claimed[j] = true;
                backups.push(BackupSlot {
                    entry: other.clone(),
                    interval: other_window.clone(),
                });
            }
        }

        items.push(DisplayItem {
            anchor: entry.clone(),
            interval: window.clone(),
            backups,
            lane: 0,
            total_lanes: 1,
        });
    }

    // Whatever the grouping pass left unclaimed stands alone: standalone
    // backups, and backups at a different time than their primary
    for i in 0..pairs.len() {
        if claimed[i] {
            continue;
        }
        let (entry, window) = pairs[i];
        items.push(DisplayItem {
            anchor: entry.clone(),
            interval: window.clone(),
            backups: Vec::new(),
            lane: 0,
            total_lanes: 1,
        });
    }

    assign_lanes(&mut items);
    items
}

/// Greedy interval partitioning over the day's items
///
/// Items are scanned in start order; `lane_ends[l]` holds the end minute
/// of the latest item placed in lane `l`. An item reuses the first lane
/// whose end is ≤ its start (touching endpoints may share a lane), else
/// opens a new lane. Afterwards every item learns the final lane count.
fn assign_lanes(items: &mut [DisplayItem]) {
    items.sort_by_key(|item| item.interval.start_min);

    let mut lane_ends: Vec<u16> = Vec::new();
    for item in items.iter_mut() {
        match lane_ends.iter().position(|&end| end <= item.interval.start_min) {
            Some(lane) => {
                lane_ends[lane] = item.interval.end_min;
                item.lane = lane;
            }
            None => {
                item.lane = lane_ends.len();
                lane_ends.push(item.interval.end_min);
            }
        }
    }

    for item in items.iter_mut() {
        item.total_lanes = lane_ends.len();
    }
}

/// Vertical offset of a minute on the grid, as a percentage of its height
pub fn top_percent(minutes: u16) -> f32 {
    let span = (GRID_END_MIN - GRID_START_MIN) as f32;
    (minutes as f32 - GRID_START_MIN as f32) / span * 100.0
}

/// Height of a minute range on the grid, as a percentage of its height
pub fn height_percent(start_min: u16, end_min: u16) -> f32 {
    let span = (GRID_END_MIN - GRID_START_MIN) as f32;
    (end_min as f32 - start_min as f32) / span * 100.0
}
