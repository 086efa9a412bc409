//! Subnet name rules.

use crate::error::SidecarError;

/// Check that `name` only uses ASCII letters, digits and spaces.
///
/// The platform chain applies the same rule to chain names, so anything else
/// could never have been deployed.
pub fn validate_subnet_name(name: &str) -> Result<(), SidecarError> {
    if name.trim().is_empty() {
        return Err(SidecarError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == ' '))
    {
        return Err(SidecarError::InvalidName {
            name: name.to_string(),
            reason: format!("illegal character {c:?}; only letters, digits and spaces are allowed"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_spaces() {
        assert!(validate_subnet_name("mySubnet 2").is_ok());
    }

    #[test]
    fn rejects_punctuation_and_non_ascii() {
        assert!(validate_subnet_name("../etc").is_err());
        assert!(validate_subnet_name("sub-net").is_err());
        assert!(validate_subnet_name("subnét").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_subnet_name("").is_err());
        assert!(validate_subnet_name("   ").is_err());
    }
}
