mod cli;
mod input;
mod prompt;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::BudgetPlan;

pub(crate) use cli::as_cli;
pub(crate) use prompt::as_prompt;

fn allocate_and_print(mut plan: BudgetPlan) -> Result<()> {
    plan.allocate().context("Could not allocate the budget")?;
    info!(
        budget = %plan.total_budget(),
        days = plan.trip_days(),
        "allocation complete"
    );
    for (category, amount) in plan.allocations().iter() {
        debug!(
            %category,
            weight = %plan.weight(category),
            minimum = %plan.minimum(category),
            allocation = %amount,
            "category allocation"
        );
    }

    println!("{}", crate::report::render(&plan));
    Ok(())
}
