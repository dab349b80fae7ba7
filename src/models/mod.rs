mod category;
mod plan;

pub use category::{Category, CategoryMap};
pub use plan::{BudgetPlan, MAX_BUDGET};
