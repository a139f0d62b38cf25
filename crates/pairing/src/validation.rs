//! Caller-side input validation for label generation.
//!
//! Setup IDs and MAC addresses are normalized (trimmed, uppercased) before
//! checking, so the `normalize_*` functions return the value to use.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::category::is_known_category;
use crate::error::ValidationError;
use crate::identifiers::{MAC_LEN, SETUP_ID_LEN};

static RE_PASSWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{3}$").unwrap());

/// The category must be positive and in the category table.
pub fn validate_category(id: i64) -> Result<u32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::NonPositiveCategory);
    }
    u32::try_from(id)
        .ok()
        .filter(|&c| is_known_category(c))
        .ok_or(ValidationError::UnknownCategory(id))
}

/// Password must be exactly `XXX-XX-XXX` after trimming.
pub fn validate_password(pwd: &str) -> Result<(), ValidationError> {
    let pwd = pwd.trim();
    // 3 + 1 + 2 + 1 + 3
    if pwd.len() != 10 {
        return Err(ValidationError::PasswordLength(pwd.len()));
    }
    if !RE_PASSWORD.is_match(pwd) {
        return Err(ValidationError::PasswordFormat);
    }
    Ok(())
}

pub fn normalize_setup_id(id: &str) -> Result<String, ValidationError> {
    let id = id.trim().to_uppercase();
    let len = id.chars().count();
    if len != SETUP_ID_LEN {
        return Err(ValidationError::SetupIdLength(len));
    }
    if let Some((i, ch)) = id
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
    {
        return Err(ValidationError::SetupIdChar {
            ch,
            position: i + 1,
        });
    }
    Ok(id)
}

pub fn normalize_mac(mac: &str) -> Result<String, ValidationError> {
    let mac = mac.trim().to_uppercase();
    let len = mac.chars().count();
    if len != MAC_LEN {
        return Err(ValidationError::MacLength(len));
    }
    if let Some((i, ch)) = mac
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(ValidationError::MacChar {
            ch,
            position: i + 1,
        });
    }
    Ok(mac)
}

/// Output must be a non-empty path ending in `.png` (any case).
pub fn validate_output_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyOutputPath);
    }
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(ValidationError::OutputExtension);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(validate_category(5), Ok(5));
        assert_eq!(validate_category(0), Err(ValidationError::NonPositiveCategory));
        assert_eq!(validate_category(-3), Err(ValidationError::NonPositiveCategory));
        assert_eq!(validate_category(25), Err(ValidationError::UnknownCategory(25)));
        assert_eq!(validate_category(99), Err(ValidationError::UnknownCategory(99)));
    }

    #[test]
    fn test_password() {
        assert!(validate_password("482-91-573").is_ok());
        assert!(validate_password(" 482-91-573 ").is_ok());
        assert_eq!(
            validate_password("48291573"),
            Err(ValidationError::PasswordLength(8))
        );
        assert_eq!(
            validate_password("4829-1-573"),
            Err(ValidationError::PasswordFormat)
        );
        assert_eq!(
            validate_password("48a-91-573"),
            Err(ValidationError::PasswordFormat)
        );
    }

    #[test]
    fn test_setup_id() {
        assert_eq!(normalize_setup_id(" hspn ").as_deref(), Ok("HSPN"));
        assert_eq!(normalize_setup_id("HSP"), Err(ValidationError::SetupIdLength(3)));
        assert_eq!(
            normalize_setup_id("HS-N"),
            Err(ValidationError::SetupIdChar {
                ch: '-',
                position: 3
            })
        );
    }

    #[test]
    fn test_mac() {
        assert_eq!(normalize_mac("30aea40506a0").as_deref(), Ok("30AEA40506A0"));
        assert_eq!(normalize_mac("30:AE:A4"), Err(ValidationError::MacLength(8)));
        assert_eq!(
            normalize_mac("30AEA40506G0"),
            Err(ValidationError::MacChar {
                ch: 'G',
                position: 11
            })
        );
    }

    #[test]
    fn test_output_path() {
        assert!(validate_output_path(Path::new("out/label.png")).is_ok());
        assert!(validate_output_path(Path::new("LABEL.PNG")).is_ok());
        assert_eq!(
            validate_output_path(Path::new("")),
            Err(ValidationError::EmptyOutputPath)
        );
        assert_eq!(
            validate_output_path(Path::new("label.jpg")),
            Err(ValidationError::OutputExtension)
        );
    }
}
