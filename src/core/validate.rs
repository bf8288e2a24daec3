//! # Input Validation
//!
//! One pure function per prompted field: raw text in, typed value or a
//! `ValidationError` out. The console calls these in a loop until one
//! succeeds; the error's `Display` text is what the user sees.

use std::fmt;

pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 99;
pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 7;
pub const HEIGHT_RANGE: (f64, f64) = (0.5, 2.5);
pub const WEIGHT_RANGE: (f64, f64) = (30.0, 200.0);
pub const CREDITS_RANGE: (f64, f64) = (1.0, 10.0);
pub const DEFAULT_DECIMAL_RANGE: (f64, f64) = (0.0, 300.0);
pub const NAME_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Expected a whole number.
    InvalidInteger,
    /// Expected a decimal number.
    InvalidDecimal,
    AgeOutOfRange(i64),
    LevelOutOfRange(i64),
    DecimalOutOfRange { value: f64, min: f64, max: f64 },
    CreditsOutOfRange(f64),
    NotYesNo,
    NameTooShort,
    EmailMissingAt,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidInteger => write!(f, "Error! Enter a valid number."),
            ValidationError::InvalidDecimal => write!(f, "Error! Enter a valid decimal number."),
            ValidationError::AgeOutOfRange(_) => {
                write!(f, "Invalid age! Must be between {AGE_MIN} and {AGE_MAX}.")
            }
            ValidationError::LevelOutOfRange(_) => {
                write!(f, "Invalid level! Must be between {LEVEL_MIN} and {LEVEL_MAX}.")
            }
            ValidationError::DecimalOutOfRange { min, max, .. } => write!(
                f,
                "Invalid value! Must be between {} and {}.",
                crate::core::render::decimal(*min),
                crate::core::render::decimal(*max)
            ),
            ValidationError::CreditsOutOfRange(_) => write!(
                f,
                "Invalid value! Must be between {} and {}.",
                CREDITS_RANGE.0, CREDITS_RANGE.1
            ),
            ValidationError::NotYesNo => write!(f, "Please answer 'yes' or 'no'."),
            ValidationError::NameTooShort => write!(
                f,
                "Name must contain at least {NAME_MIN_CHARS} characters!"
            ),
            ValidationError::EmailMissingAt => write!(f, "Invalid email! Must contain @"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_integer(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger)
}

pub fn parse_age(raw: &str) -> Result<u8, ValidationError> {
    let age = parse_integer(raw)?;
    if (i64::from(AGE_MIN)..=i64::from(AGE_MAX)).contains(&age) {
        Ok(age as u8)
    } else {
        Err(ValidationError::AgeOutOfRange(age))
    }
}

pub fn parse_level(raw: &str) -> Result<u8, ValidationError> {
    let level = parse_integer(raw)?;
    if (i64::from(LEVEL_MIN)..=i64::from(LEVEL_MAX)).contains(&level) {
        Ok(level as u8)
    } else {
        Err(ValidationError::LevelOutOfRange(level))
    }
}

/// Parses a decimal and checks it against the inclusive `[min, max]` range.
pub fn parse_decimal_in(raw: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidDecimal)?;
    // NaN fails both comparisons and lands here too.
    if min <= value && value <= max {
        Ok(value)
    } else {
        Err(ValidationError::DecimalOutOfRange { value, min, max })
    }
}

pub fn parse_decimal(raw: &str) -> Result<f64, ValidationError> {
    let (min, max) = DEFAULT_DECIMAL_RANGE;
    parse_decimal_in(raw, min, max)
}

pub fn parse_height(raw: &str) -> Result<f64, ValidationError> {
    let (min, max) = HEIGHT_RANGE;
    parse_decimal_in(raw, min, max)
}

pub fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
    let (min, max) = WEIGHT_RANGE;
    parse_decimal_in(raw, min, max)
}

/// Course credits are checked as a decimal and then truncated, so "2.5"
/// is stored as 2.
pub fn parse_credits(raw: &str) -> Result<u32, ValidationError> {
    let (min, max) = CREDITS_RANGE;
    let credits = parse_decimal_in(raw, min, max).map_err(|e| match e {
        ValidationError::DecimalOutOfRange { value, .. } => {
            ValidationError::CreditsOutOfRange(value)
        }
        other => other,
    })?;
    Ok(credits.trunc() as u32)
}

pub fn parse_yes_no(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(ValidationError::NotYesNo),
    }
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    if raw.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(raw.to_string())
}

pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    if !raw.contains('@') {
        return Err(ValidationError::EmailMissingAt);
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds() {
        assert_eq!(parse_age("1"), Ok(1));
        assert_eq!(parse_age(" 99 "), Ok(99));
        assert_eq!(parse_age("0"), Err(ValidationError::AgeOutOfRange(0)));
        assert_eq!(parse_age("100"), Err(ValidationError::AgeOutOfRange(100)));
        assert_eq!(parse_age("-4"), Err(ValidationError::AgeOutOfRange(-4)));
    }

    #[test]
    fn test_age_rejects_non_integers() {
        assert_eq!(parse_age("twenty"), Err(ValidationError::InvalidInteger));
        assert_eq!(parse_age("20.5"), Err(ValidationError::InvalidInteger));
        assert_eq!(parse_age(""), Err(ValidationError::InvalidInteger));
    }

    #[test]
    fn test_level_bounds() {
        assert_eq!(parse_level("1"), Ok(1));
        assert_eq!(parse_level("7"), Ok(7));
        assert_eq!(parse_level("8"), Err(ValidationError::LevelOutOfRange(8)));
        assert_eq!(
            parse_level("8").unwrap_err().to_string(),
            "Invalid level! Must be between 1 and 7."
        );
    }

    #[test]
    fn test_decimal_ranges_are_inclusive() {
        assert_eq!(parse_height("0.5"), Ok(0.5));
        assert_eq!(parse_height("2.5"), Ok(2.5));
        assert!(parse_height("2.51").is_err());
        assert_eq!(parse_weight("30"), Ok(30.0));
        assert_eq!(parse_weight("200.0"), Ok(200.0));
        assert!(parse_weight("29.9").is_err());
    }

    #[test]
    fn test_decimal_default_range() {
        assert_eq!(parse_decimal("0"), Ok(0.0));
        assert_eq!(parse_decimal("300"), Ok(300.0));
        assert!(parse_decimal("300.1").is_err());
    }

    #[test]
    fn test_decimal_errors_render() {
        assert_eq!(
            parse_weight("heavy").unwrap_err().to_string(),
            "Error! Enter a valid decimal number."
        );
        assert_eq!(
            parse_height("3").unwrap_err().to_string(),
            "Invalid value! Must be between 0.5 and 2.5."
        );
        assert_eq!(
            parse_weight("10").unwrap_err().to_string(),
            "Invalid value! Must be between 30.0 and 200.0."
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(matches!(
            parse_decimal("NaN"),
            Err(ValidationError::DecimalOutOfRange { .. })
        ));
    }

    #[test]
    fn test_credits_truncate() {
        assert_eq!(parse_credits("2.5"), Ok(2));
        assert_eq!(parse_credits("10"), Ok(10));
        assert_eq!(parse_credits("1.99"), Ok(1));
        assert_eq!(parse_credits("0.9"), Err(ValidationError::CreditsOutOfRange(0.9)));
        assert_eq!(parse_credits("10.5"), Err(ValidationError::CreditsOutOfRange(10.5)));
    }

    #[test]
    fn test_credits_errors_render_whole_bounds() {
        assert_eq!(
            parse_credits("12").unwrap_err().to_string(),
            "Invalid value! Must be between 1 and 10."
        );
        assert_eq!(
            parse_credits("many").unwrap_err().to_string(),
            "Error! Enter a valid decimal number."
        );
    }

    #[test]
    fn test_yes_no() {
        for yes in ["yes", "Y", "YES", " y "] {
            assert_eq!(parse_yes_no(yes), Ok(true), "{yes:?}");
        }
        for no in ["no", "N", "No"] {
            assert_eq!(parse_yes_no(no), Ok(false), "{no:?}");
        }
        assert_eq!(parse_yes_no("maybe"), Err(ValidationError::NotYesNo));
        assert_eq!(parse_yes_no(""), Err(ValidationError::NotYesNo));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert_eq!(validate_name("Al"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("Ali"), Ok("Ali".to_string()));
        assert_eq!(validate_name("Zoë"), Ok("Zoë".to_string()));
    }

    #[test]
    fn test_email_needs_at_sign() {
        assert_eq!(
            validate_email("ada.example.org"),
            Err(ValidationError::EmailMissingAt)
        );
        assert!(validate_email("ada@example.org").is_ok());
    }
}
