//! The multi-predicate filter engine.
//!
//! All six predicates are ANDed; an empty/absent criterion passes every
//! lecture. Filtering preserves catalog order and never reorders survivors.

use crate::catalog::Catalog;
use crate::schedule::parse_schedule;
use crate::search::option::SearchOption;
use crate::types::Lecture;
use std::collections::HashSet;

/// Whether a single lecture satisfies every active predicate.
pub fn matches(lecture: &Lecture, option: &SearchOption) -> bool {
    matches_lowered(lecture, option, &option.query().to_lowercase())
}

/// Ordered subsequence of the catalog satisfying `option`.
pub fn filter(catalog: &Catalog, option: &SearchOption) -> Vec<Lecture> {
    let lowered_query = option.query().to_lowercase();
    catalog
        .lectures()
        .iter()
        .filter(|lecture| matches_lowered(lecture, option, &lowered_query))
        .cloned()
        .collect()
}

/// Distinct majors present in the unfiltered catalog, first-seen order.
///
/// Depends only on the catalog, never on the current filter state; drives
/// the majors selection control.
pub fn distinct_majors(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut majors = Vec::new();
    for lecture in catalog.lectures() {
        if seen.insert(lecture.major.as_str()) {
            majors.push(lecture.major.clone());
        }
    }
    majors
}

fn matches_lowered(lecture: &Lecture, option: &SearchOption, lowered_query: &str) -> bool {
    if !lowered_query.is_empty()
        && !lecture.title.to_lowercase().contains(lowered_query)
        && !lecture.id.to_lowercase().contains(lowered_query)
    {
        return false;
    }

    if !option.grades().is_empty() && !option.grades().contains(&lecture.grade) {
        return false;
    }

    if !option.majors().is_empty() && !option.majors().iter().any(|m| m == &lecture.major) {
        return false;
    }

    if let Some(credits) = option.credits() {
        if !lecture.credits.starts_with(&credits.to_string()) {
            return false;
        }
    }

    if !option.days().is_empty() || !option.times().is_empty() {
        // Absent schedule with an active day/time constraint fails.
        let slots = lecture
            .schedule
            .as_deref()
            .map(parse_schedule)
            .unwrap_or_default();

        if !option.days().is_empty() && !slots.iter().any(|s| option.days().contains(&s.day)) {
            return false;
        }

        if !option.times().is_empty()
            && !slots
                .iter()
                .any(|s| s.range.iter().any(|t| option.times().contains(t)))
        {
            return false;
        }
    }

    true
}
