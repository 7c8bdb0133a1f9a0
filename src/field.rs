//! Pure models of the RUT and name input fields.
//!
//! Each handler takes the live value of an input after a keystroke and
//! returns what the field should now show. Wiring these to an actual UI is
//! left to the caller.

use crate::checksum::{CheckDigit, MIN_BODY_LEN, compute_check_digit, verify};
use crate::format::strip_to_readonly_display;
use crate::name::is_valid_name;
use serde::{Deserialize, Serialize};

/// Default clamp for the body input, in digits.
pub const DEFAULT_MAX_BODY_LEN: usize = 8;

/// Limits applied by the input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    /// Digits beyond this are dropped from the body input. Values below
    /// [`MIN_BODY_LEN`] make every input permanently invalid.
    pub max_body_len: usize,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            max_body_len: DEFAULT_MAX_BODY_LEN,
        }
    }
}

/// Validity indicator shown next to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// Glyph shown by the status icon.
    pub fn symbol(self) -> &'static str {
        match self {
            FieldStatus::Valid => "✔",
            FieldStatus::Invalid => "✖",
        }
    }
}

impl From<bool> for FieldStatus {
    fn from(valid: bool) -> Self {
        if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// What the body/check-digit input pair shows after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutFieldState {
    /// Body input value after stripping non-digits and clamping.
    pub body: String,
    /// Check-digit input value; `None` leaves it blank.
    pub check_digit: Option<CheckDigit>,
    pub status: FieldStatus,
}

/// Body input with an auto-filled check-digit companion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RutField {
    policy: FieldPolicy,
}

impl RutField {
    pub fn new(policy: FieldPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Recompute the field pair from the raw body input.
    pub fn on_input(&self, raw: &str) -> RutFieldState {
        let body: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.policy.max_body_len)
            .collect();

        if body.len() < MIN_BODY_LEN {
            return RutFieldState {
                body,
                check_digit: None,
                status: FieldStatus::Invalid,
            };
        }

        let check_digit = compute_check_digit(&body);
        let status = match check_digit {
            Some(dv) => FieldStatus::from(verify(&body, &dv.to_string())),
            None => FieldStatus::Invalid,
        };
        tracing::debug!(body = %body, dv = ?check_digit, ?status, "rut field updated");
        RutFieldState {
            body,
            check_digit,
            status,
        }
    }

    /// Value a read-only RUT input should display. Inputs with nothing to
    /// format are returned unchanged.
    pub fn readonly(&self, value: &str) -> String {
        let display = strip_to_readonly_display(value);
        if display.is_empty() {
            value.to_string()
        } else {
            display
        }
    }
}

/// Free-text name input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameField;

impl NameField {
    pub fn on_input(&self, name: &str) -> FieldStatus {
        FieldStatus::from(is_valid_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_body_clears_check_digit() {
        let field = RutField::default();
        let state = field.on_input("123456");
        assert_eq!(
            state,
            RutFieldState {
                body: "123456".to_string(),
                check_digit: None,
                status: FieldStatus::Invalid,
            }
        );
    }

    #[test]
    fn computes_check_digit_once_long_enough() {
        let field = RutField::default();
        let state = field.on_input("12.345.678");
        assert_eq!(state.body, "12345678");
        assert_eq!(state.check_digit, Some(CheckDigit::Digit(5)));
        assert_eq!(state.status, FieldStatus::Valid);
    }

    #[test]
    fn clamps_to_policy_length() {
        let field = RutField::default();
        let state = field.on_input("123456789");
        assert_eq!(state.body, "12345678");
        assert_eq!(state.check_digit, Some(CheckDigit::Digit(5)));

        let wide = RutField::new(FieldPolicy { max_body_len: 9 });
        assert_eq!(wide.on_input("123456789").body, "123456789");
    }

    #[test]
    fn policy_below_minimum_never_validates() {
        let field = RutField::new(FieldPolicy { max_body_len: 5 });
        let state = field.on_input("12345678");
        assert_eq!(state.body, "12345");
        assert_eq!(state.status, FieldStatus::Invalid);
    }

    #[test]
    fn readonly_display_keeps_case() {
        let field = RutField::default();
        assert_eq!(field.readonly("24965101k"), "24.965.101-k");
        assert_eq!(field.readonly("n/a"), "n/a");
    }

    #[test]
    fn name_field_status() {
        assert_eq!(NameField.on_input("María José"), FieldStatus::Valid);
        assert_eq!(NameField.on_input("John123"), FieldStatus::Invalid);
        assert_eq!(FieldStatus::Valid.symbol(), "✔");
        assert_eq!(FieldStatus::Invalid.symbol(), "✖");
    }

    #[test]
    fn state_serializes_for_reports() {
        let state = RutField::default().on_input("1000005");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"body": "1000005", "check_digit": "K", "status": "valid"})
        );
    }
}
