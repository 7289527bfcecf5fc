use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization as _};

/// Folds text for accent- and case-insensitive comparison: NFD decomposition,
/// combining marks stripped, then lowercased ("Électricité" -> "electricite").
pub(crate) fn normalize_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Parses a numeric field or search input. Accepts plain numbers, French
/// formatting ("1 234,50") and accounting negatives ("(1,234.00)"). Returns
/// `None` for anything else, including empty input.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
    let raw: String = trimmed
        .trim_matches(|c| c == '(' || c == ')')
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .collect();
    if raw.is_empty() {
        return None;
    }

    // With a '.' present, commas can only be thousands separators; otherwise a
    // comma is the French decimal mark.
    let numeric_part = if raw.contains('.') {
        raw.replace(',', "")
    } else {
        raw.replace(',', ".")
    };
    let amount = numeric_part.parse::<f64>().ok().filter(|n| n.is_finite())?;
    Some(if is_negative { -amount } else { amount })
}

/// Midnight at the start of `date`, in the given offset.
pub(crate) fn local_midnight(date: NaiveDate, offset: &FixedOffset) -> DateTime<FixedOffset> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(*offset)
        .single()
        .expect("fixed offsets always map local times unambiguously")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_strips_accents_and_case() {
        assert_eq!(normalize_text("Électricité"), "electricite");
        assert_eq!(normalize_text("ÇA GÈRE"), "ca gere");
        assert_eq!(normalize_text("Noël à Saint-Étienne"), "noel a saint-etienne");
    }

    #[test]
    fn parse_number_accepts_common_formats() {
        assert_eq!(parse_number("150"), Some(150.0));
        assert_eq!(parse_number(" -12.5 "), Some(-12.5));
        assert_eq!(parse_number("1 234,50"), Some(1234.5));
        assert_eq!(parse_number("1\u{202f}234"), Some(1234.0));
        assert_eq!(parse_number("1,234.00"), Some(1234.0));
        assert_eq!(parse_number("(1,234.00)"), Some(-1234.0));
    }

    #[test]
    fn parse_number_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("INV-2024"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
