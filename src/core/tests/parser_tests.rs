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

//! Schedule string parser tests

use crate::core::parser::{clean_room_label, clock_to_minutes, parse_schedule};
use crate::core::types::Weekday;

#[test]
fn test_two_day_schedule_with_room_token() {
    let slots = parse_schedule("Saturday 08:30-09:50 | Tuesday 08:30-09:50 | 304");

    assert_eq!(slots.len(), 2);

    assert_eq!(slots[0].day, Weekday::Saturday);
    assert_eq!(slots[0].start_min, 510);
    assert_eq!(slots[0].end_min, 590);

    assert_eq!(slots[1].day, Weekday::Tuesday);
    assert_eq!(slots[1].start_min, 510);
    assert_eq!(slots[1].end_min, 590);
}

#[test]
fn test_lab_room_token_is_discarded() {
    let slots = parse_schedule("Sunday 14:00-16:30 | 627 - Computer Lab");

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].day, Weekday::Sunday);
    assert_eq!(slots[0].start_min, 840);
    assert_eq!(slots[0].end_min, 990);
}

#[test]
fn test_tba_yields_empty() {
    assert!(parse_schedule("Schedule TBA").is_empty());
    assert!(parse_schedule("TBA").is_empty());
    assert!(parse_schedule("").is_empty());
    assert!(parse_schedule("   ").is_empty());
}

#[test]
fn test_tba_is_case_insensitive() {
    assert!(parse_schedule("schedule tba").is_empty());
    assert!(parse_schedule("SCHEDULE TBA").is_empty());
    assert!(parse_schedule("tba").is_empty());
}

#[test]
fn test_labels_are_verbatim() {
    let slots = parse_schedule("Wednesday 08:30-11:00 | 729");

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_label, "08:30");
    assert_eq!(slots[0].end_label, "11:00");
}

#[test]
fn test_single_digit_hour() {
    let slots = parse_schedule("Monday 8:30-9:50");

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_min, 510);
    assert_eq!(slots[0].end_min, 590);
    assert_eq!(slots[0].start_label, "8:30");
}

#[test]
fn test_whitespace_around_dash() {
    let slots = parse_schedule("Monday 08:30 - 09:50");

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_min, 510);
    assert_eq!(slots[0].end_min, 590);
}

#[test]
fn test_day_name_is_normalized() {
    let slots = parse_schedule("monday 08:30-09:50 | TUESDAY 10:00-11:20");

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day, Weekday::Monday);
    assert_eq!(slots[1].day, Weekday::Tuesday);
}

#[test]
fn test_all_seven_days_parse() {
    for day in Weekday::ALL {
        let raw = format!("{} 08:30-09:50", day);
        let slots = parse_schedule(&raw);
        assert_eq!(slots.len(), 1, "failed for {}", day);
        assert_eq!(slots[0].day, day);
    }
}

#[test]
fn test_unknown_day_is_discarded() {
    assert!(parse_schedule("Holiday 08:30-09:50").is_empty());
    assert!(parse_schedule("Mon 08:30-09:50").is_empty());
}

#[test]
fn test_out_of_range_times_are_discarded() {
    assert!(parse_schedule("Monday 25:00-26:00").is_empty());
    assert!(parse_schedule("Monday 08:75-09:50").is_empty());
}

#[test]
fn test_inverted_window_is_discarded() {
    assert!(parse_schedule("Monday 10:00-09:00").is_empty());
    assert!(parse_schedule("Monday 09:00-09:00").is_empty());
}

#[test]
fn test_bad_segment_does_not_poison_good_ones() {
    let slots = parse_schedule("Monday 25:00-26:00 | Tuesday 08:30-09:50 | lab");

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].day, Weekday::Tuesday);
}

#[test]
fn test_trailing_garbage_in_segment_is_discarded() {
    // The whole segment must be a day+time token
    assert!(parse_schedule("Monday 08:30-09:50 extra").is_empty());
}

#[test]
fn test_clock_to_minutes() {
    assert_eq!(clock_to_minutes("08:30"), Some(510));
    assert_eq!(clock_to_minutes("16:30"), Some(990));
    assert_eq!(clock_to_minutes("0:00"), Some(0));
    assert_eq!(clock_to_minutes("23:59"), Some(1439));
    assert_eq!(clock_to_minutes("24:00"), None);
    assert_eq!(clock_to_minutes("12:60"), None);
    assert_eq!(clock_to_minutes("noon"), None);
}

#[test]
fn test_clean_room_label_strips_lab_suffix() {
    assert_eq!(clean_room_label("727 - Computer Lab"), "727 (Lab)");
    assert_eq!(clean_room_label("627 - COMPUTER LAB"), "627 (Lab)");
    assert_eq!(clean_room_label("627-Computer Lab"), "627 (Lab)");
}

#[test]
fn test_clean_room_label_passthrough() {
    assert_eq!(clean_room_label("304"), "304");
    assert_eq!(clean_room_label(" 304 "), "304");
    assert_eq!(clean_room_label(""), "");
}
