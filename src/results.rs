//! The derived profitability breakdown.

/// Every value derived from one (`Inputs`, `FormulaParameters`) pair.
///
/// Money values are per unit in the listing currency, `volume` is in liters,
/// `profit_margin` is a percentage of the listed price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Results {
    pub spp_discount_value: f64,
    pub wallet_discount_value: f64,
    /// Price the buyer sees after both discounts
    pub price_on_platform: f64,
    pub commission_value: f64,
    pub acquiring_value: f64,
    pub tax_value: f64,
    /// Package volume in liters
    pub volume: f64,
    pub to_customer_on_sale: f64,
    pub to_customer_on_cancel: f64,
    pub return_to_pickup_on_cancel: f64,
    /// Logistics when the customer keeps the item
    pub logistics_on_sale: f64,
    /// Logistics when the item comes back
    pub logistics_on_cancel: f64,
    /// Buyout-weighted blend of the sale and cancel paths
    pub total_logistics: f64,
    /// Fees, logistics, tax and cost of goods
    pub total_costs: f64,
    /// Net profit per unit
    pub total_profit: f64,
    /// Net profit as % of price (0 when price <= 0)
    pub profit_margin: f64,
}

impl Results {
    /// Total costs without the cost of goods (fees, logistics and tax only).
    pub fn costs_excluding_cost_price(&self, cost_price: f64) -> f64 {
        self.total_costs - cost_price
    }

    /// Returns true if the listing breaks even or better.
    #[inline]
    pub fn is_profitable(&self) -> bool {
        self.total_profit >= 0.0
    }
}
