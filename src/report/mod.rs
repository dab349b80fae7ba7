mod format;

use format::{format_amount, format_percent, per_day};

use rust_decimal::Decimal;

use crate::models::{BudgetPlan, Category};

const RULE_WIDTH: usize = 66;

/// Render the allocation table for an allocated plan.
pub(crate) fn render(plan: &BudgetPlan) -> String {
    let days = plan.trip_days();
    let budget = plan.total_budget();
    let day_label = if days == 1 { "day" } else { "days" };

    let mut lines = vec![
        format!(
            "Trip budget: {} over {days} {day_label}",
            format_amount(budget)
        ),
        String::new(),
        row("Category", "Total", "Per Day", "% Total", "Min Req"),
        "─".repeat(RULE_WIDTH),
    ];

    for &category in Category::all() {
        let amount = plan.allocation(category);
        lines.push(row(
            category.as_str(),
            &format_amount(amount),
            &format_amount(per_day(amount, days)),
            &format_percent(amount, budget),
            &format_amount(plan.minimum(category)),
        ));
    }

    let total = plan.allocated_total();
    let total_minimum: Decimal = Category::all().iter().map(|&c| plan.minimum(c)).sum();
    lines.push("─".repeat(RULE_WIDTH));
    lines.push(row(
        "TOTAL",
        &format_amount(total),
        &format_amount(per_day(total, days)),
        &format_percent(total, budget),
        &format_amount(total_minimum),
    ));

    lines.join("\n")
}

fn row(category: &str, total: &str, per_day: &str, pct: &str, minimum: &str) -> String {
    format!("{category:<16}{total:>14}{per_day:>12}{pct:>10}{minimum:>14}")
}
