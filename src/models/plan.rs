use rust_decimal::Decimal;

use super::{Category, CategoryMap};
use crate::error::{PlanError, Result};

/// Largest accepted budget (one quadrillion). Above this, 28-digit division
/// no longer keeps the allocated sum within a cent of the budget.
pub const MAX_BUDGET: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

#[derive(Debug, Clone)]
pub struct BudgetPlan {
    total_budget: Decimal,
    trip_days: u32,
    minimums: CategoryMap<Decimal>,
    weights: CategoryMap<Decimal>,
    allocations: CategoryMap<Decimal>,
}

impl BudgetPlan {
    pub fn new(total_budget: Decimal, trip_days: u32) -> Result<Self> {
        if total_budget <= Decimal::ZERO {
            return Err(PlanError::InvalidArgument(format!(
                "total budget must be positive, got {total_budget}"
            )));
        }
        if total_budget > MAX_BUDGET {
            return Err(PlanError::InvalidArgument(format!(
                "total budget must not exceed {MAX_BUDGET}, got {total_budget}"
            )));
        }
        if trip_days == 0 {
            return Err(PlanError::InvalidArgument(
                "trip days must be positive".into(),
            ));
        }
        Ok(Self {
            total_budget,
            trip_days,
            minimums: CategoryMap::filled(Decimal::ZERO),
            weights: CategoryMap::filled(Decimal::ONE),
            allocations: CategoryMap::filled(Decimal::ZERO),
        })
    }

    pub fn set_minimum(&mut self, category: Category, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(PlanError::InvalidArgument(format!(
                "minimum for {category} must not be negative, got {value}"
            )));
        }
        self.minimums[category] = value;
        Ok(())
    }

    pub fn set_weight(&mut self, category: Category, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(PlanError::InvalidArgument(format!(
                "weight for {category} must not be negative, got {value}"
            )));
        }
        self.weights[category] = value;
        Ok(())
    }

    /// Recompute `allocations` from the current minimums and weights.
    ///
    /// Allocations are replaced only on success; a failed run leaves the
    /// previous result in place.
    pub fn allocate(&mut self) -> Result<()> {
        self.allocations =
            crate::allocate::allocate(self.total_budget, &self.minimums, &self.weights)?;
        Ok(())
    }

    pub fn total_budget(&self) -> Decimal {
        self.total_budget
    }

    pub fn trip_days(&self) -> u32 {
        self.trip_days
    }

    pub fn minimum(&self, category: Category) -> Decimal {
        self.minimums[category]
    }

    pub fn weight(&self, category: Category) -> Decimal {
        self.weights[category]
    }

    pub fn allocation(&self, category: Category) -> Decimal {
        self.allocations[category]
    }

    pub fn allocations(&self) -> &CategoryMap<Decimal> {
        &self.allocations
    }

    /// Sum of the current allocations.
    pub fn allocated_total(&self) -> Decimal {
        self.allocations.values().copied().sum()
    }
}
