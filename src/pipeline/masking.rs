//! Identity masking.
//!
//! Redacts personally identifying fields before they leave the pipeline.
//! Masking derives new strings; the originals stay untouched and are
//! dropped at assembly.

use thiserror::Error;

use crate::models::{MaskedIdentity, Subject};

/// Symbol substituted for redacted characters.
pub const MASK: char = '*';

/// Number of leading identifier characters preserved verbatim.
pub const ID_PREFIX_LEN: usize = 7;

/// Identifier shorter than the preserved prefix; no safe split exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier too short to mask: {length} characters (minimum 7)")]
pub struct InvalidIdentifier {
    pub length: usize,
}

/// Mask the middle character of an exactly-three-character name.
///
/// Three characters is the common full-name length in the resident locale;
/// names of any other length pass through unchanged. Character count, not
/// byte count.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() != 3 {
        return name.to_string();
    }
    format!("{}{MASK}{}", chars[0], chars[2])
}

/// Mask everything past the identifier's seven-character prefix.
pub fn mask_identifier(identifier: &str) -> Result<String, InvalidIdentifier> {
    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() < ID_PREFIX_LEN {
        return Err(InvalidIdentifier { length: chars.len() });
    }
    let mut masked: String = chars[..ID_PREFIX_LEN].iter().collect();
    masked.extend(std::iter::repeat(MASK).take(chars.len() - ID_PREFIX_LEN));
    Ok(masked)
}

/// Derive the display-safe identity for a subject.
pub fn mask_subject(subject: &Subject) -> Result<MaskedIdentity, InvalidIdentifier> {
    Ok(MaskedIdentity {
        name: mask_name(&subject.name),
        identifier: mask_identifier(&subject.identifier)?,
        facility: subject.facility.clone(),
        admission_date: subject.admission_date.clone(),
        discharge_date: subject.discharge_date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_character_of_three_character_name() {
        assert_eq!(mask_name("김철수"), "김*수");
        assert_eq!(mask_name("abc"), "a*c");
    }

    #[test]
    fn other_name_lengths_pass_through() {
        assert_eq!(mask_name("남궁민수"), "남궁민수");
        assert_eq!(mask_name("이황"), "이황");
        assert_eq!(mask_name(""), "");
    }

    #[test]
    fn mask_name_is_idempotent_on_pass_through_lengths() {
        let once = mask_name("남궁민수");
        assert_eq!(mask_name(&once), once);
    }

    #[test]
    fn identifier_keeps_seven_char_prefix() {
        assert_eq!(mask_identifier("1234567890123").unwrap(), "1234567******");
    }

    #[test]
    fn seven_char_identifier_is_unchanged() {
        assert_eq!(mask_identifier("1234567").unwrap(), "1234567");
    }

    #[test]
    fn short_identifier_is_rejected() {
        let err = mask_identifier("123456").unwrap_err();
        assert_eq!(err.length, 6);
    }

    #[test]
    fn identifier_masking_counts_characters_not_bytes() {
        // Nine multibyte characters: seven kept, two masked.
        assert_eq!(mask_identifier("가나다라마바사아자").unwrap(), "가나다라마바사**");
    }

    #[test]
    fn mask_subject_derives_all_fields() {
        let subject = Subject {
            name: "김철수".to_string(),
            identifier: "1234567890123".to_string(),
            admission_date: "2024-01-10".to_string(),
            discharge_date: Some("2025-07-15".to_string()),
            evaluation_start: "2024-02-01".to_string(),
            facility: "시설요양".to_string(),
        };

        let masked = mask_subject(&subject).unwrap();
        assert_eq!(masked.name, "김*수");
        assert_eq!(masked.identifier, "1234567******");
        assert_eq!(masked.facility, "시설요양");
        assert_eq!(masked.admission_date, "2024-01-10");
        assert_eq!(masked.discharge_date.as_deref(), Some("2025-07-15"));
    }
}
