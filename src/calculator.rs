//! The profitability pipeline.
//!
//! Discounts, then fees on the listed price, then volumetric logistics for the
//! sale and cancel paths, blended by the buyout rate, then profit and margin.
//! Everything here is a pure function of its arguments.

use crate::{FormulaParameters, Inputs, Results};

/// Liters per cubic centimeter divisor.
const CM3_PER_LITER: f64 = 1000.0;

/// Volume covered by the base cost of every logistics leg (liters).
const INCLUDED_LITERS: f64 = 1.0;

/// Package volume in liters from centimeter dimensions.
#[inline]
pub fn volume_liters(length: f64, width: f64, height: f64) -> f64 {
    (length * width * height) / CM3_PER_LITER
}

/// Volume charged per liter: everything above the first liter, never negative.
#[inline]
pub fn excess_volume(volume: f64) -> f64 {
    (volume - INCLUDED_LITERS).max(0.0)
}

/// Forward leg (warehouse to customer) for a package of `volume` liters.
pub fn to_customer_cost(volume: f64, formulas: &FormulaParameters) -> f64 {
    (formulas.base_to_customer_cost + formulas.to_customer_per_liter_cost * excess_volume(volume))
        * formulas.to_customer_multiplier
}

/// Pickup-return leg for a cancelled package of `volume` liters.
///
/// Free below the volume threshold; at or above it the base cost plus the
/// per-liter rate on the excess volume.
pub fn return_to_pickup_cost(volume: f64, formulas: &FormulaParameters) -> f64 {
    if volume < formulas.return_to_pickup_volume_threshold {
        return 0.0;
    }
    formulas.return_to_pickup_base_cost
        + formulas.return_to_pickup_per_liter_cost * excess_volume(volume)
}

/// Expected logistics per shipped unit: `buyout_percent` of units take the
/// sale path, the rest take the cancel path.
#[inline]
pub fn blend_logistics(buyout_percent: f64, on_sale: f64, on_cancel: f64) -> f64 {
    let buyout = buyout_percent / 100.0;
    buyout * on_sale + (1.0 - buyout) * on_cancel
}

/// Profit as a percentage of price, or 0 for a non-positive price.
#[inline]
pub fn profit_margin(profit: f64, price: f64) -> f64 {
    if price > 0.0 {
        (profit / price) * 100.0
    } else {
        0.0
    }
}

#[inline]
fn percent_of(amount: f64, percent: f64) -> f64 {
    amount * (percent / 100.0)
}

/// Compute the full profitability breakdown for one listing.
///
/// Commission, acquiring and tax are charged on the listed `price`, not on the
/// discounted price the buyer sees.
///
/// ```
/// use margincalc::{compute, FormulaParameters, Inputs};
///
/// let inputs = Inputs { price: 0.0, ..Inputs::default() };
/// let results = compute(&inputs, &FormulaParameters::default());
/// assert_eq!(results.profit_margin, 0.0);
/// ```
pub fn compute(inputs: &Inputs, formulas: &FormulaParameters) -> Results {
    let price = inputs.price;

    let spp_discount_value = percent_of(price, inputs.spp_discount_percent);
    let wallet_discount_value = percent_of(price, inputs.wallet_discount_percent);
    let price_on_platform = price - spp_discount_value - wallet_discount_value;

    let commission_value = percent_of(price, inputs.commission_percent);
    let acquiring_value = percent_of(price, inputs.acquiring_percent);
    let tax_value = percent_of(price, inputs.tax_percent);

    let volume = volume_liters(inputs.length, inputs.width, inputs.height);

    let to_customer_on_sale = to_customer_cost(volume, formulas);
    let to_customer_on_cancel = to_customer_on_sale;
    let return_to_pickup_on_cancel = return_to_pickup_cost(volume, formulas);

    let logistics_on_sale = to_customer_on_sale;
    let logistics_on_cancel =
        to_customer_on_cancel + inputs.return_from_customer_cost + return_to_pickup_on_cancel;
    let total_logistics =
        blend_logistics(inputs.buyout_percent, logistics_on_sale, logistics_on_cancel);

    let total_costs =
        commission_value + acquiring_value + total_logistics + tax_value + inputs.cost_price;
    let total_profit =
        price - commission_value - acquiring_value - total_logistics - tax_value - inputs.cost_price;

    Results {
        spp_discount_value,
        wallet_discount_value,
        price_on_platform,
        commission_value,
        acquiring_value,
        tax_value,
        volume,
        to_customer_on_sale,
        to_customer_on_cancel,
        return_to_pickup_on_cancel,
        logistics_on_sale,
        logistics_on_cancel,
        total_logistics,
        total_costs,
        total_profit,
        profit_margin: profit_margin(total_profit, price),
    }
}
