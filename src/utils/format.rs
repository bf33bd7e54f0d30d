/// Fraction digits kept when formatting, matching es-CL number formatting defaults
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number the way Chilean Spanish does: `1.234.567,891`
///
/// Rounds to at most three decimals and drops trailing zeros. Non-finite
/// values are passed through as `NaN` and `∞` rather than clamped.
pub fn format_es_cl(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = round_half_away(value.abs(), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut output = String::new();
    // Values that round to zero print without a sign
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        output.push('-');
    }
    output.push_str(&group_thousands(int_part, '.'));
    if !frac_part.is_empty() {
        output.push(',');
        output.push_str(frac_part);
    }

    output
}

/// Enough decimals to print any f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point text of a non-negative `value`, ties rounded away from zero
///
/// `{:.N}` rounds exact binary ties to even (0.0625 -> "0.062"), so exact
/// ties are detected on the full decimal expansion and bumped up by hand.
fn round_half_away(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some(dot) = exact.find('.') else {
        return format!("{:.*}", digits, value);
    };

    let cut = dot + 1 + digits;
    let rest = &exact[cut..];
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let truncated = exact[..cut].trim_end_matches('.');
    increment_last_digit(truncated)
}

/// Add one unit in the last place of a decimal string, carrying leftwards
fn increment_last_digit(number: &str) -> String {
    let mut chars: Vec<char> = number.chars().collect();
    let mut carry = true;

    for c in chars.iter_mut().rev() {
        if !carry {
            break;
        }
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                carry = false;
            }
        }
    }

    let mut output = String::with_capacity(chars.len() + 1);
    if carry {
        output.push('1');
    }
    output.extend(chars);
    output
}

/// Insert `separator` every three digits from the right
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
