/// Checks that an identifier names a plain file directly inside the output directory.
pub fn validate_identifier(identifier: &str) -> Result<(), String> {
    if identifier.is_empty() {
        return Err("empty icon identifier".to_string());
    }
    if identifier == "." || identifier == ".." {
        return Err(format!("icon identifier {:?} is not a file name", identifier));
    }
    if identifier.contains(['/', '\\', '\0']) {
        return Err(format!(
            "icon identifier {:?} must not contain path separators",
            identifier
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_names_are_accepted() {
        assert!(validate_identifier("1001.png").is_ok());
        assert!(validate_identifier("chara_icon").is_ok());
        assert!(validate_identifier("..png").is_ok());
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn test_dot_entries_are_rejected() {
        assert!(validate_identifier(".").is_err());
        assert!(validate_identifier("..").is_err());
    }

    #[test]
    fn test_separators_are_rejected() {
        assert!(validate_identifier("icon/1001.png").is_err());
        assert!(validate_identifier("icon\\1001.png").is_err());
        assert!(validate_identifier("10\u{0}01.png").is_err());
    }
}
