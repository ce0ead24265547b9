//! Number formatting for generated text

/// Round half away from negative infinity, matching the game server's
/// `Math.round` (`-2.5` rounds to `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a number of decimal places, half-up
pub fn round_with_precision(value: f64, precision: i32) -> f64 {
    let multiplier = 10f64.powi(precision);
    round_half_up(value * multiplier) / multiplier
}

/// Render a number the way the server prints it: integers without a
/// fractional part, infinities as `Infinity`.
pub fn number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // Avoid "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Render a price, with en-US digit grouping when `group_digits` is set.
///
/// Grouped output keeps at most three fraction digits.
pub fn format_price(value: f64, group_digits: bool) -> String {
    if !group_digits || !value.is_finite() {
        return number(value);
    }

    let thousandths = round_half_up(value.abs() * 1000.0) as u64;
    let digits = (thousandths / 1000).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && thousandths != 0 { "-" } else { "" };
    let fraction = match thousandths % 1000 {
        0 => String::new(),
        rest => format!(".{rest:03}").trim_end_matches('0').to_string(),
    };

    format!("{sign}{grouped}{fraction}")
}
