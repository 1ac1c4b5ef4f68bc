//! Course grouping and search tests

use crate::catalogue::index::Catalogue;
use crate::core::types::Section;

fn section(code: &str, name: &str, label: &str) -> Section {
    Section {
        course_code: code.to_string(),
        course_name: name.to_string(),
        section_label: label.to_string(),
        faculty: "Dr. Rahman".to_string(),
        room: "304".to_string(),
        intervals: Vec::new(),
    }
}

#[test]
fn test_groups_by_course_code() {
    let catalogue = Catalogue::from_sections(vec![
        section("CSE101", "Introduction to Programming", "1"),
        section("CSE101", "Introduction to Programming", "2"),
        section("CSE220", "Data Structures", "1"),
    ]);

    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.group("CSE101").map(|g| g.sections.len()), Some(2));
    assert_eq!(catalogue.group("CSE220").map(|g| g.sections.len()), Some(1));
}

#[test]
fn test_sections_keep_first_encounter_order() {
    let catalogue = Catalogue::from_sections(vec![
        section("CSE101", "Intro", "3"),
        section("CSE101", "Intro", "1"),
        section("CSE101", "Intro", "2"),
    ]);

    let labels: Vec<&str> = catalogue
        .group("CSE101")
        .map(|g| g.sections.iter().map(|s| s.section_label.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(labels, vec!["3", "1", "2"]);
}

#[test]
fn test_find_section() {
    let catalogue = Catalogue::from_sections(vec![
        section("CSE101", "Intro", "1"),
        section("CSE101", "Intro", "2"),
    ]);

    assert!(catalogue.find_section("CSE101", "2").is_some());
    assert!(catalogue.find_section("CSE101", "9").is_none());
    assert!(catalogue.find_section("CSE999", "1").is_none());
}

#[test]
fn test_search_matches_code_and_name() {
    let catalogue = Catalogue::from_sections(vec![
        section("CSE101", "Introduction to Programming", "1"),
        section("CSE220", "Data Structures", "1"),
        section("EEE210", "Circuits", "1"),
    ]);

    let by_code: Vec<&str> = catalogue.search("cse").iter().map(|g| g.course_code.as_str()).collect();
    assert_eq!(by_code, vec!["CSE101", "CSE220"]);

    let by_name: Vec<&str> = catalogue
        .search("structures")
        .iter()
        .map(|g| g.course_code.as_str())
        .collect();
    assert_eq!(by_name, vec!["CSE220"]);
}

#[test]
fn test_empty_query_lists_everything_sorted() {
    let catalogue = Catalogue::from_sections(vec![
        section("EEE210", "Circuits", "1"),
        section("CSE101", "Intro", "1"),
    ]);

    let codes: Vec<&str> = catalogue.search("").iter().map(|g| g.course_code.as_str()).collect();
    assert_eq!(codes, vec!["CSE101", "EEE210"]);
}

#[test]
fn test_search_miss_is_empty() {
    let catalogue = Catalogue::from_sections(vec![section("CSE101", "Intro", "1")]);
    assert!(catalogue.search("chemistry").is_empty());
}
