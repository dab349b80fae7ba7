use anyhow::{Context, Result};
use rust_decimal::Decimal;

use super::input::{parse_assignment, parse_budget, parse_days};
use crate::models::{BudgetPlan, Category};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "plan" | "p" => cli_plan(&args[2..]),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("tripbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("TripBudget - split a trip budget across spending categories");
    println!();
    println!("Usage: tripbudget [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Answer prompts interactively");
    println!("  plan                          Allocate a budget from flags");
    println!("    --budget, -b <amount>       Total trip budget (required)");
    println!("    --days, -d <n>              Trip length in days (required)");
    println!("    --min, -m <category>=<amt>  Minimum spend for a category (repeatable)");
    println!("    --weight, -w <category>=<n> Priority weight for a category (repeatable, default 1)");
    println!("  categories                    List category names");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Set RUST_LOG=tripbudget=debug to trace the allocation.");
}

fn cli_plan(args: &[String]) -> Result<()> {
    let plan = parse_plan_args(args)?;
    super::allocate_and_print(plan)
}

fn cli_categories() {
    for c in Category::all() {
        println!("{}", c.as_str().to_lowercase());
    }
}

/// Build a configured plan from `plan` flags. Later flags for the same
/// category overwrite earlier ones.
pub(crate) fn parse_plan_args(args: &[String]) -> Result<BudgetPlan> {
    let mut budget: Option<Decimal> = None;
    let mut days: Option<u32> = None;
    let mut minimums = Vec::new();
    let mut weights = Vec::new();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let flag = flag.as_str();
        if !matches!(
            flag,
            "--budget" | "-b" | "--days" | "-d" | "--min" | "-m" | "--weight" | "-w"
        ) {
            anyhow::bail!("Unknown option: {flag}");
        }
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing value for {flag}"))?;
        match flag {
            "--budget" | "-b" => budget = Some(parse_budget(value)?),
            "--days" | "-d" => days = Some(parse_days(value)?),
            "--min" | "-m" => minimums.push(parse_assignment(value)?),
            _ => weights.push(parse_assignment(value)?),
        }
    }

    let budget = budget.ok_or_else(|| anyhow::anyhow!("Missing --budget <amount>"))?;
    let days = days.ok_or_else(|| anyhow::anyhow!("Missing --days <n>"))?;

    let mut plan = BudgetPlan::new(budget, days)?;
    for (category, value) in minimums {
        plan.set_minimum(category, value)
            .with_context(|| format!("Invalid --min for {category}"))?;
    }
    for (category, value) in weights {
        plan.set_weight(category, value)
            .with_context(|| format!("Invalid --weight for {category}"))?;
    }
    Ok(plan)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
