//! Business inputs for a single listing.

/// Business parameters of one product listing.
///
/// Percent fields hold whole percentages (`7.0` means 7%). Dimensions are
/// package sizes in centimeters; money fields are in the listing currency.
/// No field is range-checked: the calculator accepts any finite value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Inputs {
    /// Listed price
    pub price: f64,
    /// Platform-wide (SPP) discount, % of price
    pub spp_discount_percent: f64,
    /// Wallet discount, % of price
    pub wallet_discount_percent: f64,
    /// Platform commission, % of price
    pub commission_percent: f64,
    /// Payment processing fee, % of price
    pub acquiring_percent: f64,
    /// Package length (cm)
    pub length: f64,
    /// Package width (cm)
    pub width: f64,
    /// Package height (cm)
    pub height: f64,
    /// Flat cost of taking a returned item back from the customer
    pub return_from_customer_cost: f64,
    /// Share of shipped units the customer keeps, in %
    pub buyout_percent: f64,
    /// Tax rate, % of price
    pub tax_percent: f64,
    /// Unit cost of goods
    pub cost_price: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            price: 10_000.0,
            spp_discount_percent: 7.0,
            wallet_discount_percent: 2.0,
            commission_percent: 21.5,
            acquiring_percent: 1.8,
            length: 104.0,
            width: 60.0,
            height: 34.0,
            return_from_customer_cost: 50.0,
            buyout_percent: 90.0,
            tax_percent: 6.0,
            cost_price: 3_000.0,
        }
    }
}
