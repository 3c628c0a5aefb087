//! Input validation rules for registration.
//!
//! Name rules are pluggable through [`NameRule`]; age parsing is fixed.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::constants::{MAX_AGE, MIN_AGE, MIN_NAME_LENGTH, NAME_EXTRA_CHARS};
use crate::error::{AgeRejection, NameRejection};

/// A validation rule applied to a candidate name.
///
/// Implemented for any `Fn(&str) -> Result<(), NameRejection>`, so a closure
/// can be injected wherever a rule is expected.
pub trait NameRule {
    /// Accept the name or return the first reason it is rejected.
    fn validate(&self, name: &str) -> Result<(), NameRejection>;
}

impl<F> NameRule for F
where
    F: Fn(&str) -> Result<(), NameRejection>,
{
    fn validate(&self, name: &str) -> Result<(), NameRejection> {
        self(name)
    }
}

/// The default name rule, see [`validate_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNameRule;

impl NameRule for StandardNameRule {
    fn validate(&self, name: &str) -> Result<(), NameRejection> {
        validate_name(name)
    }
}

/// Validate a name. Rules are checked in order and the first failure wins:
///
/// 1. empty or whitespace only
/// 2. fewer than [`MIN_NAME_LENGTH`] characters (untrimmed)
/// 3. any character other than a letter, space or hyphen
pub fn validate_name(name: &str) -> Result<(), NameRejection> {
    if name.trim().is_empty() {
        return Err(NameRejection::Empty);
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(NameRejection::TooShort);
    }

    if !name
        .chars()
        .all(|c| is_letter(c) || NAME_EXTRA_CHARS.contains(&c))
    {
        return Err(NameRejection::InvalidCharacters);
    }

    Ok(())
}

/// Check if a character is in the Unicode general category Letter
/// (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than [`char::is_alphabetic`], which also admits letter numbers
/// such as `Ⅻ` and some combining marks.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Parse an age answer.
///
/// Surrounding whitespace is ignored. Anything that is not a whole 32-bit
/// integer is [`AgeRejection::NotANumber`]; "12a" is never truncated to 12.
pub fn parse_age(input: &str) -> Result<u8, AgeRejection> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| AgeRejection::NotANumber)?;

    if value < MIN_AGE {
        return Err(AgeRejection::NotPositive);
    }

    if value > MAX_AGE {
        return Err(AgeRejection::Unrealistic);
    }

    u8::try_from(value).map_err(|_| AgeRejection::Unrealistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_names() {
        for name in ["", " ", "   ", "\t", " \t \u{3000}"] {
            assert_eq!(validate_name(name), Err(NameRejection::Empty), "{name:?}");
        }
    }

    #[test]
    fn test_single_character_is_too_short() {
        assert_eq!(validate_name("A"), Err(NameRejection::TooShort));
        assert_eq!(validate_name("Ж"), Err(NameRejection::TooShort));
        // Empty check wins over length
        assert_eq!(validate_name(" "), Err(NameRejection::Empty));
    }

    #[test]
    fn test_length_counts_raw_characters() {
        // Two characters before trimming, so not too short
        assert_eq!(validate_name(" A"), Ok(()));
        assert_eq!(validate_name("Bo"), Ok(()));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(validate_name("Carl123"), Err(NameRejection::InvalidCharacters));
        assert_eq!(validate_name("Ann_Marie"), Err(NameRejection::InvalidCharacters));
        assert_eq!(validate_name("O'Brien"), Err(NameRejection::InvalidCharacters));
        // Letter numbers and combining marks are alphabetic but not letters
        assert_eq!(validate_name("ⅫⅫ"), Err(NameRejection::InvalidCharacters));
        assert_eq!(validate_name("A\u{0345}"), Err(NameRejection::InvalidCharacters));
        // Too short wins over invalid characters
        assert_eq!(validate_name("1"), Err(NameRejection::TooShort));
    }

    #[test]
    fn test_valid_names() {
        for name in ["Anna", "Jean-Luc", "Mary Ann", "Анна", "José"] {
            assert_eq!(validate_name(name), Ok(()), "{name:?}");
        }
    }

    #[test]
    fn test_is_letter_categories() {
        for c in ['a', 'Z', 'ǅ', 'ʰ', 'ж', '中'] {
            assert!(is_letter(c), "{c:?}");
        }
        for c in ['\u{216B}', '\u{0345}', '1', '-', ' ', '_'] {
            assert!(!is_letter(c), "{c:?}");
        }
    }

    #[test]
    fn test_closure_rule() {
        let rule = |name: &str| {
            if name == "root" {
                Err(NameRejection::InvalidCharacters)
            } else {
                Ok(())
            }
        };
        assert!(rule.validate("Anna").is_ok());
        assert!(rule.validate("root").is_err());
        assert!(StandardNameRule.validate("root").is_ok());
    }

    #[test]
    fn test_parse_age_accepts_full_range() {
        for age in 1..=120u8 {
            assert_eq!(parse_age(&age.to_string()), Ok(age));
        }
    }

    #[test]
    fn test_parse_age_tolerates_whitespace_and_sign() {
        assert_eq!(parse_age("  42 \t"), Ok(42));
        assert_eq!(parse_age("+7"), Ok(7));
    }

    #[test]
    fn test_parse_age_rejections() {
        assert_eq!(parse_age("12a"), Err(AgeRejection::NotANumber));
        assert_eq!(parse_age(""), Err(AgeRejection::NotANumber));
        assert_eq!(parse_age("4.5"), Err(AgeRejection::NotANumber));
        assert_eq!(parse_age("99999999999"), Err(AgeRejection::NotANumber));
        assert_eq!(parse_age("0"), Err(AgeRejection::NotPositive));
        assert_eq!(parse_age("-3"), Err(AgeRejection::NotPositive));
        assert_eq!(parse_age("121"), Err(AgeRejection::Unrealistic));
        assert_eq!(parse_age("250"), Err(AgeRejection::Unrealistic));
    }
}
