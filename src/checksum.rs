use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shortest body the modulus-11 engine will compute a check digit for.
pub const MIN_BODY_LEN: usize = 7;

/// Weights cycle 2, 3, 4, 5, 6, 7, 2, ... starting from the rightmost digit.
const FIRST_WEIGHT: u32 = 2;
const LAST_WEIGHT: u32 = 7;
const MODULUS: u32 = 11;

/// Verification character appended to a RUT body (the "DV").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigit {
    /// `'0'` through `'9'`.
    Digit(u8),
    /// Produced when `11 - (sum mod 11)` equals 10.
    K,
}

impl CheckDigit {
    /// Canonical character, upper-case for `K`.
    pub fn as_char(self) -> char {
        match self {
            CheckDigit::Digit(d) => char::from(b'0' + d),
            CheckDigit::K => 'K',
        }
    }

    /// Parse a single check character, accepting `k` as well as `K`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(CheckDigit::Digit(ch as u8 - b'0')),
            'k' | 'K' => Some(CheckDigit::K),
            _ => None,
        }
    }

    /// Case-insensitive comparison against a user-supplied candidate.
    ///
    /// The whole candidate must be the single check character, so `"55"`
    /// never matches `5`.
    pub fn matches(self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch.eq_ignore_ascii_case(&self.as_char()),
            _ => false,
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for CheckDigit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CheckDigit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => CheckDigit::from_char(ch).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid check digit '{}'", ch))
            }),
            _ => Err(serde::de::Error::custom(
                "check digit must be exactly one character",
            )),
        }
    }
}

/// True when `body` is something the engine can compute a check digit for:
/// non-empty, ASCII digits only, at least [`MIN_BODY_LEN`] long.
pub fn is_computable_body(body: &str) -> bool {
    body.len() >= MIN_BODY_LEN && body.bytes().all(|b| b.is_ascii_digit())
}

/// Compute the modulus-11 check digit of a RUT body.
///
/// Returns `None` when the body is not computable yet (empty, too short, or
/// containing anything other than ASCII digits). That is not the same as a
/// mismatch; see [`verify`].
pub fn compute_check_digit(body: &str) -> Option<CheckDigit> {
    if !is_computable_body(body) {
        tracing::trace!(len = body.len(), "body not computable");
        return None;
    }

    let mut sum = 0u32;
    let mut weight = FIRST_WEIGHT;
    for b in body.bytes().rev() {
        let digit = u32::from(b - b'0');
        // Reducing as we go keeps arbitrarily long bodies from overflowing.
        sum = (sum + digit * weight) % MODULUS;
        weight = if weight == LAST_WEIGHT {
            FIRST_WEIGHT
        } else {
            weight + 1
        };
    }

    let dv = match MODULUS - sum {
        11 => CheckDigit::Digit(0),
        10 => CheckDigit::K,
        n => CheckDigit::Digit(n as u8),
    };
    Some(dv)
}

/// Check a body against a candidate check character, case-insensitively.
///
/// Returns `false` without computing when the body is not computable or the
/// candidate is empty.
pub fn verify(body: &str, candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    match compute_check_digit(body) {
        Some(expected) => expected.matches(candidate),
        None => false,
    }
}
