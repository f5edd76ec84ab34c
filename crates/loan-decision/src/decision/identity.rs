use chrono::NaiveDate;

const CODE_LENGTH: usize = 11;
const SEQUENCE_DIGITS: usize = 4;

/// Collaborator deciding whether a personal identification code is well formed.
pub trait IdentityCodeValidator: Send + Sync {
    fn is_valid(&self, code: &str) -> bool;
}

/// Validator checking only the layout of an 11 digit personal code.
///
/// The code reads `CYYMMDDSSSS`: a century/gender marker, the birth date, and a four digit
/// sequence. No checksum is verified; deployments needing it supply their own validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralCodeValidator;

impl IdentityCodeValidator for StructuralCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        code.len() == CODE_LENGTH
            && code.bytes().all(|byte| byte.is_ascii_digit())
            && parse_birth_date(code).is_some()
    }
}

fn century_base(marker: u8) -> Option<i32> {
    match marker {
        b'1' | b'2' => Some(1800),
        b'3' | b'4' => Some(1900),
        b'5' | b'6' => Some(2000),
        _ => None,
    }
}

fn two_digits(code: &str, start: usize) -> Option<u32> {
    let field = code.get(start..start + 2)?;
    if !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Extracts the birth date embedded in a personal code.
///
/// Returns `None` for anything that does not carry a known century marker followed by a real
/// calendar date.
pub fn parse_birth_date(code: &str) -> Option<NaiveDate> {
    let base = century_base(*code.as_bytes().first()?)?;
    let year = base + two_digits(code, 1)? as i32;
    let month = two_digits(code, 3)?;
    let day = two_digits(code, 5)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Trailing sequence digits used for risk segmentation.
pub fn sequence_suffix(code: &str) -> Option<&str> {
    let start = code.len().checked_sub(SEQUENCE_DIGITS)?;
    code.get(start..)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_codes() {
        let validator = StructuralCodeValidator;
        for code in ["37605030299", "50307172740", "38411266610", "35006069515"] {
            assert!(validator.is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        let validator = StructuralCodeValidator;
        assert!(!validator.is_valid("1234567890187987897"));
        assert!(!validator.is_valid("3760503029"));
        assert!(!validator.is_valid("3760503029a"));
        assert!(!validator.is_valid("77605030299"));
        assert!(!validator.is_valid("37613030299"));
        assert!(!validator.is_valid("37602300299"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn maps_century_markers() {
        assert_eq!(
            parse_birth_date("17605030299"),
            NaiveDate::from_ymd_opt(1876, 5, 3)
        );
        assert_eq!(
            parse_birth_date("47605030299"),
            NaiveDate::from_ymd_opt(1976, 5, 3)
        );
        assert_eq!(
            parse_birth_date("60307172740"),
            NaiveDate::from_ymd_opt(2003, 7, 17)
        );
        assert_eq!(parse_birth_date("07605030299"), None);
    }

    #[test]
    fn birth_date_parsing_tolerates_garbage() {
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("3"), None);
        assert_eq!(parse_birth_date("3ab0503"), None);
        assert_eq!(parse_birth_date("3é050302"), None);
    }

    #[test]
    fn suffix_is_last_four_characters() {
        assert_eq!(sequence_suffix("50307172740"), Some("2740"));
        assert_eq!(sequence_suffix("123"), None);
    }
}
