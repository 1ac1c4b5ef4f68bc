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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for routine planning, including:
//! - Type definitions for weekdays, meeting windows, sections and entries
//! - Schedule string parsing (free text → typed time intervals)
//! - Time-conflict detection between a candidate and the admitted routine
//!
//! All business logic is isolated from CLI and I/O concerns to enable
//! comprehensive unit testing on plain data.

pub mod conflict;
pub mod parser;
pub mod types;

pub use conflict::find_conflict;
pub use types::*;

#[cfg(test)]
mod tests;
