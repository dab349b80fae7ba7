use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised while configuring or allocating a [`crate::models::BudgetPlan`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("All category weights are zero; at least one weight must be positive")]
    DegenerateWeights,
    #[error("Infeasible plan: {0}")]
    InfeasiblePlan(String),
    #[error("Allocation inconsistency: allocations sum to {total}, expected {expected}")]
    AllocationInconsistency { total: Decimal, expected: Decimal },
}

pub type Result<T> = std::result::Result<T, PlanError>;
