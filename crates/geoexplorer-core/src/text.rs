// crates/geoexplorer-core/src/text.rs

//! Text folding and French number formatting.

/// Narrow no-break space, the `fr-FR` digit group separator.
pub const FR_GROUP_SEPARATOR: char = '\u{202F}';

/// Convert a string into a folded key suitable for caching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte` -> `Cote`, `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// Punctuation is kept as-is, so `"Côte d'Ivoire"` folds to `"cote d'ivoire"`.
/// Folding an already folded key returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use geoexplorer_core::text::fold_key;
///
/// assert_eq!(fold_key("  Côte d'Ivoire "), "cote d'ivoire");
/// assert_eq!(fold_key("Guinée Équatoriale"), "guinee equatoriale");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase().trim().to_string()
}

/// Compares two strings for equality after folding with [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Formats a number the way `Intl.NumberFormat('fr-FR')` does.
///
/// Groups of three digits are separated by [`FR_GROUP_SEPARATOR`], the
/// decimal separator is a comma and at most three fraction digits are shown
/// (trailing zeros dropped). Rounding is half away from zero on the shortest
/// decimal form of `value`, so `1.0005` gives `1,001` even though the nearest
/// `f64` sits just below it.
///
/// ```rust
/// use geoexplorer_core::text::format_number;
///
/// assert_eq!(format_number(67391582.0), "67\u{202F}391\u{202F}582");
/// assert_eq!(format_number(0.5), "0,5");
/// assert_eq!(format_number(1.0005), "1,001");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }

    // `Display` for f64 is the shortest round-trip form and never uses an exponent.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = round_fraction(&shortest, MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 8);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Rounds a plain decimal string to `scale` fraction digits, half away from zero.
fn round_fraction(decimal: &str, scale: usize) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= scale {
        return (int_part.to_string(), frac_part.to_string());
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..scale].bytes())
        .collect();
    if frac_part.as_bytes()[scale] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - scale;
    let int_part = digits[..split].iter().map(|&d| char::from(d)).collect();
    let frac_part = digits[split..].iter().map(|&d| char::from(d)).collect();
    (int_part, frac_part)
}

/// Integer convenience wrapper around [`format_number`].
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(FR_GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
