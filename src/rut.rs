use crate::checksum::{CheckDigit, MIN_BODY_LEN, compute_check_digit};
use crate::format::{group_thousands, split};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a string is not a valid RUT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    #[error("no digits found")]
    Empty,
    #[error("body has {len} digits; at least {min} are required")]
    TooShort { len: usize, min: usize },
    #[error("body contains non-digit character '{0}'")]
    InvalidBody(char),
    #[error("'{0}' is not a valid check digit")]
    InvalidCheckDigit(char),
    #[error("check digit mismatch: expected {expected}, found {found}")]
    Mismatch { expected: CheckDigit, found: char },
}

/// A RUT whose check digit has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check_digit: CheckDigit,
}

impl Rut {
    /// Build a RUT from its body, computing the check digit.
    pub fn from_body(body: &str) -> Result<Self, RutError> {
        check_body(body)?;
        let check_digit = compute_check_digit(body).ok_or(RutError::TooShort {
            len: body.len(),
            min: MIN_BODY_LEN,
        })?;
        Ok(Self {
            body: body.to_string(),
            check_digit,
        })
    }

    /// Numeric part, without separators.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Verified check digit (`0`-`9` or `K`).
    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// `12345678-5`: no thousands separators, hyphen kept.
    pub fn compact(&self) -> String {
        format!("{}-{}", self.body, self.check_digit)
    }
}

fn check_body(body: &str) -> Result<(), RutError> {
    if let Some(bad) = body.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(RutError::InvalidBody(bad));
    }
    if body.is_empty() {
        return Err(RutError::Empty);
    }
    if body.len() < MIN_BODY_LEN {
        return Err(RutError::TooShort {
            len: body.len(),
            min: MIN_BODY_LEN,
        });
    }
    Ok(())
}

impl FromStr for Rut {
    type Err = RutError;

    /// Accepts `12.345.678-5`, `12345678-5`, `123456785` and similar; any
    /// character other than digits and `k`/`K` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, found) = split(s).ok_or(RutError::Empty)?;
        let claimed = CheckDigit::from_char(found).ok_or(RutError::InvalidCheckDigit(found))?;
        let rut = Rut::from_body(&body)?;
        if rut.check_digit != claimed {
            tracing::debug!(input = s, expected = %rut.check_digit, %found, "check digit mismatch");
            return Err(RutError::Mismatch {
                expected: rut.check_digit,
                found,
            });
        }
        Ok(rut)
    }
}

impl fmt::Display for Rut {
    /// `{}` renders `12.345.678-5`; `{:#}` renders the compact `12345678-5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}-{}", self.body, self.check_digit)
        } else {
            write!(f, "{}-{}", group_thousands(&self.body), self.check_digit)
        }
    }
}

impl Serialize for Rut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
