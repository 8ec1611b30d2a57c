//! Tunable coefficients of the logistics cost curves.

/// Coefficients for the volumetric logistics legs.
///
/// The forward leg is `(base + per_liter * excess) * multiplier`, the
/// pickup-return leg is `base + per_liter * excess` above the volume
/// threshold and free below it. `excess` is the volume beyond the first liter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FormulaParameters {
    /// Forward leg cost of the first liter
    pub base_to_customer_cost: f64,
    /// Forward leg cost per liter beyond the first
    pub to_customer_per_liter_cost: f64,
    /// Warehouse coefficient applied to the whole forward leg
    pub to_customer_multiplier: f64,
    /// Volume (liters) from which a pickup-return fee is charged
    pub return_to_pickup_volume_threshold: f64,
    /// Pickup-return cost of the first liter
    pub return_to_pickup_base_cost: f64,
    /// Pickup-return cost per liter beyond the first
    pub return_to_pickup_per_liter_cost: f64,
}

impl Default for FormulaParameters {
    fn default() -> Self {
        Self {
            base_to_customer_cost: 38.0,
            to_customer_per_liter_cost: 9.5,
            to_customer_multiplier: 1.25,
            return_to_pickup_volume_threshold: 100.0,
            return_to_pickup_base_cost: 137.5,
            return_to_pickup_per_liter_cost: 11.5,
        }
    }
}
