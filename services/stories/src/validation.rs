//! Input validation utilities

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Largest value a NUMERIC(5,2) column can hold.
fn max_hours() -> Decimal {
    Decimal::new(99999, 2)
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 255 {
        return Err("Email must be at most 255 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate display name
pub fn validate_display_name(display_name: &str) -> Result<(), String> {
    if display_name.trim().is_empty() {
        return Err("Display name is required".to_string());
    }

    if display_name.len() > 100 {
        return Err("Display name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate story title
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }

    if title.len() > 500 {
        return Err("Title must be at most 500 characters long".to_string());
    }

    Ok(())
}

/// Validate story priority (0=low, 1=medium, 2=high)
pub fn validate_priority(priority: i32) -> Result<(), String> {
    if !(0..=2).contains(&priority) {
        return Err("Priority must be between 0 and 2".to_string());
    }

    Ok(())
}

/// Validate an hours value against the NUMERIC(5,2) column range
pub fn validate_hours(hours: Decimal) -> Result<(), String> {
    if hours.is_sign_negative() {
        return Err("Hours must not be negative".to_string());
    }

    if hours > max_hours() {
        return Err("Hours must be at most 999.99".to_string());
    }

    Ok(())
}

/// Validate a goal's target year
pub fn validate_year(year: i32) -> Result<(), String> {
    if !(1970..=9999).contains(&year) {
        return Err("Year must be between 1970 and 9999".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn valid_email_passes() {
        assert!(validate_email("ada@example.com").is_ok());
    }

    #[test]
    fn malformed_email_fails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn overlong_email_fails() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn display_name_bounds() {
        assert!(validate_display_name("Ada").is_ok());
        assert!(validate_display_name("  ").is_err());
        assert!(validate_display_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn title_bounds() {
        assert!(validate_title("Run a marathon").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"x".repeat(501)).is_err());
    }

    #[test]
    fn priority_range_is_zero_to_two() {
        assert!(validate_priority(0).is_ok());
        assert!(validate_priority(2).is_ok());
        assert!(validate_priority(-1).is_err());
        assert!(validate_priority(3).is_err());
    }

    #[test]
    fn hours_range_matches_column_precision() {
        assert!(validate_hours(dec!(0)).is_ok());
        assert!(validate_hours(dec!(999.99)).is_ok());
        assert!(validate_hours(dec!(1000)).is_err());
        assert!(validate_hours(dec!(-0.5)).is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(validate_year(2026).is_ok());
        assert!(validate_year(0).is_err());
        assert!(validate_year(10000).is_err());
    }
}
