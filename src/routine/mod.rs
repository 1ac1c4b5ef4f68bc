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

//! Routine management module
//!
//! Owns the mutable routine state and the policies around it:
//! - Admission (duplicate / TBA / time-conflict rejection)
//! - Primary/Backup role assignment per course
//! - Deterministic palette cycling for course colors
//! - Structured outcomes and user-facing notification messages

pub mod manager;
pub mod notify;
pub mod palette;

pub use manager::RoutineManager;
pub use notify::{AddOutcome, Notification, RejectReason, Severity};
pub use palette::PALETTE;

#[cfg(test)]
mod tests;
