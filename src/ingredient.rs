//! Best-effort scaling of free-text ingredient lines.
//!
//! Only a single leading numeric quantity is recognized ("2 cups flour",
//! "0.5 tsp salt"). Fractions ("1/2 cup"), ranges ("2-3 cloves"), and
//! embedded quantities are deliberately out of scope; lines without a
//! leading number pass through unchanged.

use std::sync::OnceLock;

use regex::Regex;

fn leading_quantity_regex() -> &'static Regex {
    static LEADING_QUANTITY_RE: OnceLock<Regex> = OnceLock::new();
    LEADING_QUANTITY_RE.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)?)\s*(.+)$").expect("leading quantity regex should compile")
    })
}

/// Scale the leading quantity of an ingredient line by `ratio`.
///
/// Integral results render without a decimal point, everything else to one
/// decimal place. A line with no leading number is returned unchanged.
pub fn scale_ingredient(ingredient: &str, ratio: f64) -> String {
    let Some(caps) = leading_quantity_regex().captures(ingredient) else {
        return ingredient.to_string();
    };
    let amount: f64 = match caps[1].parse() {
        Ok(value) => value,
        Err(_) => return ingredient.to_string(),
    };
    format!("{} {}", format_quantity(amount * ratio), &caps[2])
}

/// Scale every line of an ingredient list.
pub fn scale_all(ingredients: &[String], ratio: f64) -> Vec<String> {
    ingredients
        .iter()
        .map(|line| scale_ingredient(line, ratio))
        .collect()
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
