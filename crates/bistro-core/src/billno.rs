//! # Bill Number Generation
//!
//! Human-readable bill identifiers: the local date as `YYYYMMDD` followed
//! by a 4-digit suffix drawn uniformly from `[1000, 9999]`.
//!
//! Uniqueness is best-effort. Two bills cut in the same day can collide on
//! the suffix; receipts are also timestamped and stored under
//! `bill_<number>.txt`, so a collision overwrites a file rather than
//! corrupting anything. Front ends that need stronger guarantees must add
//! their own sequence on top.

use chrono::{Local, NaiveDate};
use rand::Rng;

/// Lowest suffix value (inclusive).
const SUFFIX_MIN: u32 = 1000;
/// Highest suffix value (inclusive).
const SUFFIX_MAX: u32 = 9999;

/// Generates a bill number for the current local date.
///
/// ## Example
/// ```rust
/// let bill_no = bistro_core::generate_bill_number();
/// assert_eq!(bill_no.len(), 12);
/// ```
pub fn generate_bill_number() -> String {
    let suffix = rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX);
    bill_number_for(Local::now().date_naive(), suffix)
}

/// Builds the bill number for an explicit date and suffix.
///
/// Split out so tests (and replays) can pin both parts; `suffix` is
/// rendered as given.
pub fn bill_number_for(date: NaiveDate, suffix: u32) -> String {
    format!("{}{}", date.format("%Y%m%d"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_number_for_known_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(bill_number_for(date, 1234), "202401011234");
    }

    #[test]
    fn test_generated_number_shape() {
        let bill_no = generate_bill_number();

        assert_eq!(bill_no.len(), 12);
        assert!(bill_no.chars().all(|c| c.is_ascii_digit()));

        let today = Local::now().date_naive().format("%Y%m%d").to_string();
        assert!(bill_no.starts_with(&today));

        let suffix: u32 = bill_no[8..].parse().unwrap();
        assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
    }

    #[test]
    fn test_suffix_bounds_pad_to_four_digits() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(bill_number_for(date, SUFFIX_MIN), "202412311000");
        assert_eq!(bill_number_for(date, SUFFIX_MAX), "202412319999");
    }
}
