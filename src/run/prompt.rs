use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing::debug;

use super::input::{parse_amount, parse_budget, parse_days};
use crate::models::{BudgetPlan, Category};

pub(crate) fn as_prompt() -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let plan = prompter.collect_plan()?;
    super::allocate_and_print(plan)
}

/// Sequential console questions that build a fully configured plan.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for budget and trip length, then a minimum and a weight for each
    /// category in turn.
    pub(crate) fn collect_plan(&mut self) -> Result<BudgetPlan> {
        writeln!(self.output, "TripBudget - plan your trip spending")?;
        writeln!(self.output)?;

        let budget = self.ask("Total budget", None, parse_budget)?;
        let days = self.ask("Trip length in days", None, parse_days)?;
        let mut plan = BudgetPlan::new(budget, days)?;

        writeln!(self.output)?;
        writeln!(
            self.output,
            "For each category, a minimum spend (blank for none) and a priority weight (blank for 1):"
        )?;
        for &category in Category::all() {
            loop {
                let label = format!("  {category} minimum");
                let value = self.ask(&label, Some(Decimal::ZERO), parse_amount)?;
                match plan.set_minimum(category, value) {
                    Ok(()) => break,
                    Err(e) => writeln!(self.output, "    {e}")?,
                }
            }
            loop {
                let label = format!("  {category} weight");
                let value = self.ask(&label, Some(Decimal::ONE), parse_amount)?;
                match plan.set_weight(category, value) {
                    Ok(()) => break,
                    Err(e) => writeln!(self.output, "    {e}")?,
                }
            }
        }

        writeln!(self.output)?;
        Ok(plan)
    }

    /// Prompt until `parse` accepts the answer. A blank answer yields
    /// `default` when one is given.
    fn ask<T: Copy>(
        &mut self,
        label: &str,
        default: Option<T>,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input ended while waiting for: {}", label.trim());
            }
            let answer = line.trim();

            if answer.is_empty() {
                if let Some(value) = default {
                    return Ok(value);
                }
            }
            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(label = label.trim(), answer, "rejected answer");
                    writeln!(self.output, "    {e:#}")?;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
