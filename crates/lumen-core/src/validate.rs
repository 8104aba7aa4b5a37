//! Validation engine
//!
//! Pure functions computing field-level and form-level validity. Called on
//! every edit; no side effects.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Result of validating the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    /// Inline error text to render next to the field, if any.
    pub error: Option<&'static str>,
}

/// Validate the device password. The device rejects short credentials, so
/// the form blocks them before they reach the wire.
pub fn check_password(value: &str) -> PasswordCheck {
    if value.chars().count() >= MIN_PASSWORD_LEN {
        PasswordCheck {
            valid: true,
            error: None,
        }
    } else {
        PasswordCheck {
            valid: false,
            error: Some("password must be at least 6 characters"),
        }
    }
}

/// Composite form validity.
///
/// The form is valid when the password is valid and, while power is on, a
/// mode has been selected. Must be recomputed whenever any input changes,
/// including indirectly (powering off clears the mode).
pub fn form_valid(password_valid: bool, power: bool, mode_selected: bool) -> bool {
    password_valid && (!power || mode_selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_boundary() {
        assert!(!check_password("").valid);
        assert!(!check_password("abcde").valid);
        assert!(check_password("abcdef").valid);
        assert!(check_password("abcdefg").valid);
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // six multi-byte characters
        assert!(check_password("ääääää").valid);
    }

    #[test]
    fn test_short_password_has_inline_error() {
        let check = check_password("abc");
        assert!(check.error.is_some());
        assert!(check.error.unwrap().contains("6 characters"));

        assert_eq!(check_password("abcdef").error, None);
    }

    #[test]
    fn test_form_valid_truth_table() {
        // form_valid == password_valid && (!power || mode_selected)
        for password_valid in [false, true] {
            for power in [false, true] {
                for mode_selected in [false, true] {
                    let expected = password_valid && (!power || mode_selected);
                    assert_eq!(
                        form_valid(password_valid, power, mode_selected),
                        expected,
                        "password_valid={password_valid} power={power} mode_selected={mode_selected}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_mode_required_only_while_powered() {
        assert!(form_valid(true, false, false));
        assert!(!form_valid(true, true, false));
        assert!(form_valid(true, true, true));
    }
}
