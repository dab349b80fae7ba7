use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, MAX_BUDGET};

/// Parse a currency amount such as `1250`, `$1,250.00` or `19.99`.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ','], "").trim().to_string();
    if cleaned.is_empty() {
        anyhow::bail!("Expected an amount");
    }
    Decimal::from_str(&cleaned).with_context(|| format!("'{}' is not a valid amount", s.trim()))
}

/// Parse a total budget, which must be positive.
pub(crate) fn parse_budget(s: &str) -> Result<Decimal> {
    let amount = parse_amount(s)?;
    if amount <= Decimal::ZERO {
        anyhow::bail!("Total budget must be greater than zero");
    }
    if amount > MAX_BUDGET {
        anyhow::bail!("Total budget must not exceed {MAX_BUDGET}");
    }
    Ok(amount)
}

/// Parse a trip length in whole days.
pub(crate) fn parse_days(s: &str) -> Result<u32> {
    let days: u32 = s
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a whole number of days", s.trim()))?;
    if days == 0 {
        anyhow::bail!("Trip must last at least one day");
    }
    Ok(days)
}

/// Parse a `<category>=<value>` pair, e.g. `food=300`.
pub(crate) fn parse_assignment(s: &str) -> Result<(Category, Decimal)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected <category>=<value>, got '{s}'"))?;
    let category = Category::parse(name).ok_or_else(|| {
        let names: Vec<String> = Category::all()
            .iter()
            .map(|c| c.as_str().to_lowercase())
            .collect();
        anyhow::anyhow!(
            "Unknown category '{}' (expected one of: {})",
            name.trim(),
            names.join(", ")
        )
    })?;
    let value = parse_amount(value).with_context(|| format!("Invalid value for {category}"))?;
    Ok((category, value))
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
