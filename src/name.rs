use regex::Regex;
use std::sync::LazyLock;

/// Letters a-z in both cases, the accented vowels áéíóú, ñ, and whitespace.
const NAME_PATTERN: &str = r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"));

/// True when `name` is non-empty and consists only of the allowed letters and
/// whitespace. No length bound is applied.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}
