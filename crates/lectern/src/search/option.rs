//! Filter criteria with validation at the construction boundary.
//!
//! Malformed values (out-of-range grade or time slot, zero credits) are
//! rejected here; the filter engine downstream assumes a well-formed option
//! and never raises. An empty collection or absent value means "no
//! constraint from that field".

use crate::error::SearchOptionError;
use crate::types::{DayCode, MAX_TIME_SLOT_ID};

/// Lowest and highest grade a lecture can carry.
pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 4;

/// The six independently-combinable filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOption {
    query: String,
    credits: Option<u32>,
    grades: Vec<u8>,
    days: Vec<DayCode>,
    times: Vec<u32>,
    majors: Vec<String>,
}

impl SearchOption {
    /// An option with no constraints; every lecture passes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn credits(&self) -> Option<u32> {
        self.credits
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn days(&self) -> &[DayCode] {
        &self.days
    }

    pub fn times(&self) -> &[u32] {
        &self.times
    }

    pub fn majors(&self) -> &[String] {
        &self.majors
    }

    /// Free-text query, matched case-insensitively against title and id.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Credits prefix filter; `None` clears the constraint.
    pub fn set_credits(&mut self, credits: Option<u32>) -> Result<(), SearchOptionError> {
        if credits == Some(0) {
            return Err(SearchOptionError::ZeroCredits);
        }
        self.credits = credits;
        Ok(())
    }

    pub fn set_grades(&mut self, grades: Vec<u8>) -> Result<(), SearchOptionError> {
        if let Some(&grade) = grades.iter().find(|g| !(MIN_GRADE..=MAX_GRADE).contains(*g)) {
            return Err(SearchOptionError::GradeOutOfRange {
                grade,
                max: MAX_GRADE,
            });
        }
        self.grades = grades;
        Ok(())
    }

    pub fn set_days(&mut self, days: Vec<DayCode>) {
        self.days = days;
    }

    pub fn set_times(&mut self, times: Vec<u32>) -> Result<(), SearchOptionError> {
        if let Some(&time) = times.iter().find(|t| !(1..=MAX_TIME_SLOT_ID).contains(*t)) {
            return Err(SearchOptionError::TimeOutOfRange {
                time,
                max: MAX_TIME_SLOT_ID,
            });
        }
        self.times = times;
        Ok(())
    }

    pub fn clear_times(&mut self) {
        self.times.clear();
    }

    pub fn set_majors(&mut self, majors: Vec<String>) {
        self.majors = majors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_constraints() {
        let option = SearchOption::new();
        assert!(option.query().is_empty());
        assert_eq!(option.credits(), None);
        assert!(option.grades().is_empty());
        assert!(option.days().is_empty());
        assert!(option.times().is_empty());
        assert!(option.majors().is_empty());
    }

    #[test]
    fn test_out_of_range_grade_is_rejected() {
        let mut option = SearchOption::new();
        let err = option.set_grades(vec![1, 5]).unwrap_err();
        assert_eq!(
            err,
            SearchOptionError::GradeOutOfRange { grade: 5, max: 4 }
        );
        // Rejected input leaves the option untouched.
        assert!(option.grades().is_empty());
    }

    #[test]
    fn test_out_of_range_time_is_rejected() {
        let mut option = SearchOption::new();
        assert!(option.set_times(vec![1, 24]).is_ok());
        assert!(option.set_times(vec![0]).is_err());
        assert!(option.set_times(vec![25]).is_err());
        assert_eq!(option.times(), &[1, 24]);
    }

    #[test]
    fn test_zero_credits_is_rejected() {
        let mut option = SearchOption::new();
        assert_eq!(
            option.set_credits(Some(0)).unwrap_err(),
            SearchOptionError::ZeroCredits
        );
        assert!(option.set_credits(Some(3)).is_ok());
        assert!(option.set_credits(None).is_ok());
    }
}
