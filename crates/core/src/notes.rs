//! Note field limits and validation.

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validate a note title: non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Note title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Note title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_title() {
        assert!(validate_title("Linear algebra revision").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_title() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn rejects_overlong_title() {
        let title = "x".repeat(MAX_TITLE_LENGTH + 1);
        let err = validate_title(&title).unwrap_err();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn title_limit_is_exact() {
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
    }
}
