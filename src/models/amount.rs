use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::BudgetError;

/// Parse user-entered amount text like `"15"`, `"$1,234.50"` or `" 4.5 "`.
///
/// Anything that is not a decimal number (empty input, `NaN`, `inf`, words, stray parentheses,
/// misplaced thousand separators) is rejected, and so is any value that is zero or negative,
/// including `(5.00)` accounting notation.
pub fn parse_amount(input: &str) -> Result<Decimal, BudgetError> {
    let raw = input.trim();
    let invalid = || BudgetError::InvalidAmount(raw.to_string());

    let (negative, body) = match raw.strip_prefix('(') {
        Some(inner) => (true, inner.strip_suffix(')').ok_or_else(invalid)?),
        None => (false, raw),
    };
    if body.contains(['(', ')']) {
        return Err(invalid());
    }

    let body = body.trim();
    let body = body.strip_prefix('$').unwrap_or(body);
    let digits = strip_thousands(body).ok_or_else(invalid)?;
    if digits.is_empty() {
        return Err(invalid());
    }

    let amount = Decimal::from_str(&digits).map_err(|_| invalid())?;
    validate_amount(if negative { -amount } else { amount })
}

/// Remove `,` separators, which are only allowed between three-digit groups of the whole part.
fn strip_thousands(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let unsigned = whole.strip_prefix('-').unwrap_or(whole);
    let mut groups = unsigned.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 {
        return None;
    }
    if !groups.all(|g| g.len() == 3) {
        return None;
    }
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }
    Some(text.replace(',', ""))
}

/// A transaction amount must be strictly positive.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, BudgetError> {
    if amount <= Decimal::ZERO {
        Err(BudgetError::InvalidAmount(amount.to_string()))
    } else {
        Ok(amount)
    }
}
