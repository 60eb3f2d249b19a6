//! Minimal request validation shared by the facades.

use aegis_core::boxing::is_blank;
use aegis_core::error::{AegisError, AegisResult};
use uuid::Uuid;

/// A required identifier: absent, empty or malformed input is rejected.
pub(crate) fn require_id(field: &str, raw: Option<&str>) -> AegisResult<Uuid> {
    match raw.filter(|s| !s.is_empty()) {
        None => Err(AegisError::invalid_argument(format!("{field} is required"))),
        Some(s) => Uuid::parse_str(s).map_err(|_| {
            AegisError::invalid_argument(format!("{field} is not a valid identifier"))
        }),
    }
}

/// An optional identifier: absent or empty is `None`, malformed is rejected.
pub(crate) fn optional_id(field: &str, raw: Option<&str>) -> AegisResult<Option<Uuid>> {
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(_) => require_id(field, raw).map(Some),
    }
}

pub(crate) fn require_ids(field: &str, raw: Option<&[String]>) -> AegisResult<()> {
    for id in raw.unwrap_or_default() {
        require_id(field, Some(id))?;
    }
    Ok(())
}

/// A required, non-blank text field.
pub(crate) fn require_text<'a>(field: &str, raw: Option<&'a str>) -> AegisResult<&'a str> {
    match raw {
        Some(s) if !is_blank(s) => Ok(s),
        _ => Err(AegisError::invalid_argument(format!("{field} is required"))),
    }
}

/// Reject a present-but-blank text field; absence is fine.
pub(crate) fn reject_blank(field: &str, raw: Option<&str>) -> AegisResult<()> {
    match raw {
        Some(s) if is_blank(s) => Err(AegisError::invalid_argument(format!(
            "{field} must not be blank"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_ids() {
        let id = Uuid::new_v4();
        assert_eq!(require_id("id", Some(&id.to_string())).unwrap(), id);
        assert!(require_id("id", None).is_err());
        assert!(require_id("id", Some("")).is_err());
        let err = require_id("role_id", Some("nope")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: role_id is not a valid identifier");
    }

    #[test]
    fn optional_ids() {
        assert_eq!(optional_id("parent_id", None).unwrap(), None);
        assert_eq!(optional_id("parent_id", Some("")).unwrap(), None);
        assert!(optional_id("parent_id", Some("x")).is_err());
    }

    #[test]
    fn text_fields() {
        assert_eq!(require_text("name", Some(" HR ")).unwrap(), " HR ");
        assert!(require_text("name", Some("  ")).is_err());
        assert!(require_text("name", None).is_err());
        assert!(reject_blank("name", None).is_ok());
        assert!(reject_blank("name", Some("")).is_err());
    }
}
