//! Display formatting in the es-AR locale.
//!
//! Thousands are grouped with `.`, decimals use `,`, and the peso sign is
//! followed by a no-break space.

const THOUSANDS_SEP: char = '.';
const DECIMAL_SEP: char = ',';
const CURRENCY_PREFIX: &str = "$\u{00a0}";
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a currency amount with no decimals, e.g. `"$ 121.500"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_PREFIX}0");
    }
    let rounded = amount.abs().round() as u64;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX}{}", group_thousands(rounded))
}

/// Formats a number with up to three decimals, trailing zeros dropped.
pub fn format_number(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let (int_part, frac_part) = (scaled / scale, scaled % scale);

    let mut out = String::new();
    if amount < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if frac_part > 0 {
        let frac = format!("{:0width$}", frac_part, width = MAX_FRACTION_DIGITS as usize);
        out.push(DECIMAL_SEP);
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEP);
        }
        out.push(ch);
    }
    out
}
