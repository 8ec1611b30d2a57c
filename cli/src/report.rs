//! Text and JSON renderings of a calculation.

use std::fmt;

use margincalc::{FormulaParameters, Inputs, Results};
use serde::Serialize;

/// A calculation as printed by `compute`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub inputs: Inputs,
    pub formulas: FormulaParameters,
    pub results: Results,
}

impl Report {
    pub fn new(inputs: Inputs, formulas: FormulaParameters, results: Results) -> Self {
        Self {
            inputs,
            formulas,
            results,
        }
    }

    /// Pretty-printed JSON of inputs, formulas and results.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: f64, unit: &str) -> fmt::Result {
    writeln!(f, "  {label:<34} {value:>12.2} {unit}")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.results;

        writeln!(f, "PRICE:")?;
        line(f, "Listed price", self.inputs.price, "₽")?;
        line(f, "SPP discount", r.spp_discount_value, "₽")?;
        line(f, "Wallet discount", r.wallet_discount_value, "₽")?;
        line(f, "Price for buyer", r.price_on_platform, "₽")?;

        writeln!(f, "FEES AND TAX:")?;
        line(f, "Commission", r.commission_value, "₽")?;
        line(f, "Acquiring", r.acquiring_value, "₽")?;
        line(f, "Tax", r.tax_value, "₽")?;

        writeln!(f, "LOGISTICS (per unit):")?;
        line(f, "Volume", r.volume, "l")?;
        line(f, "To customer on sale", r.logistics_on_sale, "₽")?;
        line(f, "To customer on cancel", r.to_customer_on_cancel, "₽")?;
        line(f, "From customer on cancel", self.inputs.return_from_customer_cost, "₽")?;
        line(f, "Pickup return on cancel", r.return_to_pickup_on_cancel, "₽")?;
        line(f, "Total on cancel", r.logistics_on_cancel, "₽")?;
        line(f, "Blended by buyout rate", r.total_logistics, "₽")?;

        writeln!(f, "SUMMARY:")?;
        line(
            f,
            "Costs without cost price",
            r.costs_excluding_cost_price(self.inputs.cost_price),
            "₽",
        )?;
        line(f, "Costs with cost price", r.total_costs, "₽")?;
        line(f, "Net profit per unit", r.total_profit, "₽")?;
        line(f, "Margin", r.profit_margin, "%")?;
        writeln!(
            f,
            "  [{}]",
            if r.is_profitable() { "PROFIT" } else { "LOSS" }
        )
    }
}
