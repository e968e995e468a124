//! Display formatting for the single supported locale (en-US, USD).
//!
//! None of these panic or print Rust's `inf`/`NaN` spellings: infinite
//! figures show as `∞`, undefined ones as `NaN`.

const INFINITY_SIGN: &str = "∞";

/// `$474,036`, `-$35,964`. No fractional digits; halves round away from
/// zero. Amounts that round to zero print without a sign.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}${INFINITY_SIGN}");
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Rate inputs: one fractional digit, `5.0%`.
pub fn format_percent(value: f64) -> String {
    match non_finite(value) {
        Some(s) => format!("{s}%"),
        None => format!("{value:.1}%"),
    }
}

/// Whole percentages such as the ROI figure: `791%`.
pub fn format_whole_percent(value: f64) -> String {
    match non_finite(value) {
        Some(s) => format!("{s}%"),
        None => format!("{:.0}%", value.round() + 0.0),
    }
}

pub fn format_months(value: f64) -> String {
    format!("{} months", format_plain(value))
}

/// A raw input echoed back as typed: `1000`, `12.5`.
pub fn format_plain(value: f64) -> String {
    // + 0.0 folds negative zero into zero
    non_finite(value).unwrap_or_else(|| format!("{}", value + 0.0))
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        Some(format!("{sign}{INFINITY_SIGN}"))
    } else {
        None
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
