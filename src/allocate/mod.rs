//! Weighted budget split with minimum-floor redistribution.
//!
//! The budget is first split in proportion to the category weights. Every
//! category that lands below its minimum is raised to exactly that minimum,
//! and the combined shortfall is taken from the remaining ("flexible")
//! categories in proportion to their weights. This happens once: a flexible
//! category pushed under its own minimum by the reduction is not revisited.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::{Category, CategoryMap};

/// Largest allowed gap between the allocated sum and the total budget.
pub(crate) const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Fraction of the budget below which a negative result is division
/// rounding, not a real shortfall.
const RESIDUE_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 24);

/// Compute final allocations for `total_budget`.
pub(crate) fn allocate(
    total_budget: Decimal,
    minimums: &CategoryMap<Decimal>,
    weights: &CategoryMap<Decimal>,
) -> Result<CategoryMap<Decimal>> {
    let total_weights = checked_sum(weights.values().copied()).ok_or_else(|| {
        PlanError::InvalidArgument("category weights are too large to sum".into())
    })?;
    if total_weights.is_zero() {
        return Err(PlanError::DegenerateWeights);
    }

    let mut allocations = CategoryMap::filled(Decimal::ZERO);
    for (category, weight) in weights.iter() {
        allocations[category] = share(total_budget, *weight, total_weights)?;
        debug!(%category, provisional = %allocations[category], "provisional allocation");
    }

    let underfunded: Vec<Category> = Category::all()
        .iter()
        .copied()
        .filter(|&c| allocations[c] < minimums[c])
        .collect();

    if !underfunded.is_empty() {
        let residue = total_budget * RESIDUE_RATIO;
        redistribute(&mut allocations, minimums, weights, &underfunded, residue)?;
    }

    verify_total(&allocations, total_budget)?;
    Ok(allocations)
}

fn redistribute(
    allocations: &mut CategoryMap<Decimal>,
    minimums: &CategoryMap<Decimal>,
    weights: &CategoryMap<Decimal>,
    underfunded: &[Category],
    residue: Decimal,
) -> Result<()> {
    let total_deficit = checked_sum(underfunded.iter().map(|&c| minimums[c] - allocations[c]))
        .ok_or_else(|| PlanError::InfeasiblePlan("minimums are too large to fund".into()))?;

    let flexible: Vec<Category> = Category::all()
        .iter()
        .copied()
        .filter(|c| !underfunded.contains(c))
        .collect();
    if flexible.is_empty() {
        return Err(PlanError::InfeasiblePlan(format!(
            "every category is below its minimum; nothing can absorb a deficit of {}",
            total_deficit.round_dp(2)
        )));
    }

    let total_flexible_weights: Decimal = flexible.iter().map(|&c| weights[c]).sum();
    if total_flexible_weights.is_zero() {
        return Err(PlanError::InfeasiblePlan(format!(
            "flexible categories all have zero weight; nothing can absorb a deficit of {}",
            total_deficit.round_dp(2)
        )));
    }

    debug!(
        deficit = %total_deficit,
        underfunded = underfunded.len(),
        flexible = flexible.len(),
        "redistributing to meet minimums"
    );

    for &category in underfunded {
        allocations[category] = minimums[category];
    }

    for &category in &flexible {
        let reduction = share(total_deficit, weights[category], total_flexible_weights)?;
        let mut reduced = allocations[category] - reduction;
        if reduced < Decimal::ZERO && reduced >= -residue {
            reduced = Decimal::ZERO;
        }
        if reduced < Decimal::ZERO {
            return Err(PlanError::InfeasiblePlan(format!(
                "covering a deficit of {} would leave {category} at {}",
                total_deficit.round_dp(2),
                reduced.round_dp(2)
            )));
        }
        allocations[category] = reduced;
        if reduced < minimums[category] {
            warn!(
                %category,
                allocation = %reduced.round_dp(2),
                minimum = %minimums[category],
                "redistribution left category below its minimum"
            );
        }
    }

    Ok(())
}

fn verify_total(allocations: &CategoryMap<Decimal>, expected: Decimal) -> Result<()> {
    let total = checked_sum(allocations.values().copied()).unwrap_or(Decimal::MAX);
    if (total - expected).abs() > TOLERANCE {
        return Err(PlanError::AllocationInconsistency { total, expected });
    }
    Ok(())
}

/// `amount * weight / total`, multiplying first when that fits so that
/// even splits stay exact.
fn share(amount: Decimal, weight: Decimal, total: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(weight)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| {
            weight
                .checked_div(total)
                .and_then(|ratio| amount.checked_mul(ratio))
        })
        .ok_or_else(|| {
            PlanError::InvalidArgument(format!(
                "cannot split {amount} by weight {weight} of {total}"
            ))
        })
}

fn checked_sum(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.fold(Some(Decimal::ZERO), |acc, v| acc?.checked_add(v))
}
