//! Course grouping and lookup
//!
//! Flat section rows become one `CourseGroup` per course code. Grouping
//! preserves the order sections are first encountered within each group
//! (the catalogue lists them in a meaningful order); the map itself has
//! no iteration-order contract; callers that present groups sort them.
//! Pure aggregation: no conflict or validity checking happens here.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::types::Section;

/// All sections of one course, keyed by its code
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseGroup {
    pub course_code: String,
    pub course_name: String,

    /// Sections in first-encounter order
    pub sections: Vec<Section>,
}

/// Read-only course lookup built once from parsed rows
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Catalogue {
    groups: HashMap<String, CourseGroup>,
}

impl Catalogue {
    /// Groups flat sections by course code
    ///
    /// The first row of a course supplies the group's name; later rows
    /// only append their section.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let mut groups: HashMap<String, CourseGroup> = HashMap::new();

        for section in sections {
            groups
                .entry(section.course_code.clone())
                .or_insert_with(|| CourseGroup {
                    course_code: section.course_code.clone(),
                    course_name: section.course_name.clone(),
                    sections: Vec::new(),
                })
                .sections
                .push(section);
        }

        Self { groups }
    }

    /// Group for a course code, if the catalogue has it
    pub fn group(&self, course_code: &str) -> Option<&CourseGroup> {
        self.groups.get(course_code)
    }

    /// Section by course code and section label
    pub fn find_section(&self, course_code: &str, section_label: &str) -> Option<&Section> {
        self.group(course_code)?
            .sections
            .iter()
            .find(|s| s.section_label == section_label)
    }

    /// Case-insensitive substring search over course codes and names
    ///
    /// An empty query matches everything. Results are sorted by course
    /// code so listings are stable.
    pub fn search(&self, query: &str) -> Vec<&CourseGroup> {
        let needle = query.trim().to_lowercase();
        let mut hits: Vec<&CourseGroup> = self
            .groups
            .values()
            .filter(|group| {
                needle.is_empty()
                    || group.course_code.to_lowercase().contains(&needle)
                    || group.course_name.to_lowercase().contains(&needle)
            })
            .collect();

        hits.sort_by(|a, b| a.course_code.cmp(&b.course_code));
        hits
    }

    /// Number of distinct courses
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
