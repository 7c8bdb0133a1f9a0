//! Display formatting for RUT strings.
//!
//! These are display transforms, not validators: any input is accepted and
//! nothing here checks the check digit.

/// Characters that survive sanitizing: ASCII digits and `k`/`K`.
fn is_rut_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == 'k' || ch == 'K'
}

fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&ch| is_rut_char(ch)).collect()
}

/// Sanitize `raw` and split it into `(body, check)`, keeping the case of the
/// check character. `None` when nothing survives sanitizing.
pub fn split(raw: &str) -> Option<(String, char)> {
    let mut cleaned = sanitize(raw);
    let check = cleaned.pop()?;
    Some((cleaned, check))
}

/// Compact form with punctuation removed and the check character
/// upper-cased, e.g. `"12.345.678-k"` becomes `"12345678K"`. A `k` inside
/// the body is left as typed, the same as [`format`] does.
pub fn clean(raw: &str) -> String {
    match split(raw) {
        Some((mut body, check)) => {
            body.push(check.to_ascii_uppercase());
            body
        }
        None => String::new(),
    }
}

/// Render `raw` as `12.345.678-5`, upper-casing the check character.
/// Returns an empty string when no digit or `K` is present.
pub fn format(raw: &str) -> String {
    match split(raw) {
        Some((body, check)) => assemble(&body, check.to_ascii_uppercase()),
        None => String::new(),
    }
}

/// Like [`format`], but the check character keeps the case it had in `raw`.
pub fn strip_to_readonly_display(raw: &str) -> String {
    match split(raw) {
        Some((body, check)) => assemble(&body, check),
        None => String::new(),
    }
}

/// Format every entry of a listing, trimming each one first.
pub fn format_table<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| format(entry.as_ref().trim()))
        .collect()
}

fn assemble(body: &str, check: char) -> String {
    let mut out = group_thousands(body);
    out.push('-');
    out.push(check);
    out
}

/// Insert `.` at every interior position whose digit run to the right has a
/// length that is a positive multiple of three. A `K` inside the body ends a
/// run, so `"1234k567"` groups as `"1.234k.567"`.
pub fn group_thousands(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();

    // run[i]: length of the digit run starting at i
    let mut run = vec![0usize; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        if chars[i].is_ascii_digit() {
            run[i] = run[i + 1] + 1;
        }
    }

    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && run[i] > 0 && run[i] % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
