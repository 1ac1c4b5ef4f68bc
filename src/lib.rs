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

//! Routine Planner
//!
//! Assembles a weekly class schedule from a catalogue of course sections,
//! rejecting placements that collide in time and laying accepted
//! placements out on a Saturday–Wednesday grid.
//!
//! # Features
//!
//! - **Schedule parsing:** Free-text day/time fields → typed time intervals
//! - **Conflict detection:** Half-open interval overlap against the routine
//! - **Primary/Backup roles:** Extra sections of a course ride along as
//!   tracked alternatives instead of blocking each other
//! - **Deterministic colors:** One palette hue per course, cycling in
//!   admission order
//! - **Grid layout:** Same-course stacking plus minimal-lane placement of
//!   whatever still overlaps
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, schedule parser, conflict detection)
//! - **`catalogue`:** CSV loading and course grouping (read-only after load)
//! - **`routine`:** Owned routine state, admission policy, notifications
//! - **`layout`:** Pure per-day placement geometry for a grid renderer
//!
//! The routine is ephemeral, scoped to one running session; nothing is
//! persisted. State is single-writer: mutation happens only through the
//! `RoutineManager` in response to discrete user actions.
//!
//! # Examples
//!
//! ## Loading a catalogue and building a routine
//!
//! ```no_run
//! use routine_planner::catalogue::load_catalogue;
//! use routine_planner::routine::RoutineManager;
//! use std::path::Path;
//!
//! let catalogue = load_catalogue(Path::new("CSE_Courses.csv"))?;
//! let mut manager = RoutineManager::new();
//!
//! if let Some(section) = catalogue.find_section("CSE101", "1") {
//!     let outcome = manager.add_section(section);
//!     println!("admitted: {}", outcome.is_admitted());
//! }
//! # Ok::<(), routine_planner::catalogue::CatalogueError>(())
//! ```
//!
//! ## Laying out the week
//!
//! ```no_run
//! use routine_planner::core::types::Weekday;
//! use routine_planner::layout::layout_week;
//! # let manager = routine_planner::routine::RoutineManager::new();
//!
//! let week = layout_week(manager.entries());
//! for item in &week[&Weekday::Saturday] {
//!     println!("{} lane {}/{}", item.anchor.id, item.lane + 1, item.total_lanes);
//! }
//! ```

pub mod catalogue;
pub mod core;
pub mod layout;
pub mod routine;

// Re-export commonly used types for convenience
pub use core::{EntryRole, RoutineEntry, Section, TimeInterval, Weekday};
