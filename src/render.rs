use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::collections::HashMap;
use std::io::Write;

/// How wide the widest wedge or bar gets, in characters.
const CHART_WIDTH: usize = 40;

/// Flatten category totals into the pairs the renderers consume, biggest
/// total first. Ties fall back to the label so the output is stable even
/// though the map itself has no order.
pub(crate) fn sorted_totals(totals: &HashMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut pairs: Vec<(String, Decimal)> = totals
        .iter()
        .map(|(category, total)| (category.clone(), *total))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

/// A way of turning category totals into something the user can look at.
/// Every renderer consumes the same sorted pairs and writes plain text, so
/// the ledger doesn't know or care which views exist; a new view is one
/// more impl, not a change anywhere else.
pub(crate) trait SummaryRenderer {
    fn render<W: Write>(&self, out: W, totals: &[(String, Decimal)]) -> std::io::Result<()>;
}

/// Share-of-total view: each category's slice of the overall spend, as a
/// percentage with a proportional wedge.
pub(crate) struct PieSummary;

impl SummaryRenderer for PieSummary {
    fn render<W: Write>(&self, mut out: W, totals: &[(String, Decimal)]) -> std::io::Result<()> {
        writeln!(out, "Expense Summary by Category")?;
        let grand: Decimal = totals.iter().map(|(_, total)| *total).sum();
        if grand.is_zero() {
            // Every recorded amount is zero; there are no shares to draw.
            return Ok(());
        }
        for (category, total) in totals {
            let share = total / grand;
            let mut percent = share * Decimal::ONE_HUNDRED;
            percent.rescale(1);
            let wedge = share * Decimal::from(CHART_WIDTH as u64);
            let wedge = "#".repeat(wedge.to_usize().unwrap_or(0));
            writeln!(out, "{:<12} {:>5}%  {}", category, percent.to_string(), wedge)?;
        }
        Ok(())
    }
}

/// Absolute-amount view: one bar per category, scaled against the biggest
/// spender.
pub(crate) struct BarSummary;

impl SummaryRenderer for BarSummary {
    fn render<W: Write>(&self, mut out: W, totals: &[(String, Decimal)]) -> std::io::Result<()> {
        writeln!(out, "Expense Summary by Category")?;
        let max = totals
            .iter()
            .map(|(_, total)| *total)
            .max()
            .unwrap_or_default();
        for (category, total) in totals {
            let bar = if max.is_zero() {
                String::new()
            } else {
                let scaled = total / max * Decimal::from(CHART_WIDTH as u64);
                "#".repeat(scaled.to_usize().unwrap_or(0))
            };
            let mut amount = *total;
            amount.rescale(2);
            writeln!(out, "{:<12} {:<width$} {}", category, bar, amount, width = CHART_WIDTH)?;
        }
        Ok(())
    }
}
