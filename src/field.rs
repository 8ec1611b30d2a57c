//! Catalogue of editable fields: names, labels, units, and record accessors.
//!
//! Hosts address fields by key (`"buyout_percent"`) or by the camelCase name
//! used by the web calculator (`"buyoutPercent"`). Both resolve to the same
//! variant.

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;
use crate::{FormulaParameters, Inputs};

/// Unit a field is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Currency,
    Percent,
    Centimeters,
    Liters,
    Multiplier,
}

impl Unit {
    /// Display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Currency => "₽",
            Unit::Percent => "%",
            Unit::Centimeters => "cm",
            Unit::Liters => "l",
            Unit::Multiplier => "x",
        }
    }

    /// Increment an editor should use for this unit.
    pub fn step(self) -> f64 {
        match self {
            Unit::Percent => 0.1,
            Unit::Multiplier => 0.01,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Generates a field enum with its key, camelCase alias, label, unit and
/// accessors into the backing record.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $name:ident for $record:ty {
            $( $variant:ident => $field:ident, $alias:literal, $label:literal, $unit:ident; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every field, in display order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Snake_case key, matching the record field name.
            pub fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($field), )+
                }
            }

            /// CamelCase name used by the web front end.
            pub fn alias(self) -> &'static str {
                match self {
                    $( $name::$variant => $alias, )+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            pub fn unit(self) -> Unit {
                match self {
                    $( $name::$variant => Unit::$unit, )+
                }
            }

            /// Read this field from `record`.
            pub fn get(self, record: &$record) -> f64 {
                match self {
                    $( $name::$variant => record.$field, )+
                }
            }

            /// Overwrite this field in `record`.
            pub fn set(self, record: &mut $record, value: f64) {
                match self {
                    $( $name::$variant => record.$field = value, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|f| f.key() == s || f.alias() == s)
                    .ok_or_else(|| FieldError::UnknownField(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

field_enum! {
    /// A business input of [`Inputs`].
    InputField for Inputs {
        Price => price, "price", "Price", Currency;
        SppDiscountPercent => spp_discount_percent, "sppDiscountPercent", "SPP discount", Percent;
        WalletDiscountPercent => wallet_discount_percent, "walletDiscountPercent", "Wallet discount", Percent;
        CommissionPercent => commission_percent, "commissionPercent", "Commission", Percent;
        AcquiringPercent => acquiring_percent, "acquiringPercent", "Acquiring", Percent;
        Length => length, "length", "Length", Centimeters;
        Width => width, "width", "Width", Centimeters;
        Height => height, "height", "Height", Centimeters;
        ReturnFromCustomerCost => return_from_customer_cost, "returnFromCustomerCost", "Return from customer", Currency;
        BuyoutPercent => buyout_percent, "buyoutPercent", "Buyout rate", Percent;
        TaxPercent => tax_percent, "taxPercent", "Tax", Percent;
        CostPrice => cost_price, "costPrice", "Cost price", Currency;
    }
}

field_enum! {
    /// A logistics coefficient of [`FormulaParameters`].
    FormulaField for FormulaParameters {
        BaseToCustomerCost => base_to_customer_cost, "baseToCustomerCost", "Base cost to customer", Currency;
        ToCustomerPerLiterCost => to_customer_per_liter_cost, "toCustomerPerLiterCost", "Cost per liter over 1 l", Currency;
        ToCustomerMultiplier => to_customer_multiplier, "toCustomerMultiplier", "Warehouse multiplier", Multiplier;
        ReturnToPickupVolumeThreshold => return_to_pickup_volume_threshold, "returnToPickupVolumeThreshold", "Free pickup-return volume threshold", Liters;
        ReturnToPickupBaseCost => return_to_pickup_base_cost, "returnToPickupBaseCost", "Pickup-return base cost", Currency;
        ReturnToPickupPerLiterCost => return_to_pickup_per_liter_cost, "returnToPickupPerLiterCost", "Pickup-return cost per liter over 1 l", Currency;
    }
}

/// Any editable field, business input or formula coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Input(InputField),
    Formula(FormulaField),
}

impl Field {
    /// Every field: inputs first, then formula coefficients.
    pub fn all() -> impl Iterator<Item = Field> {
        InputField::ALL
            .iter()
            .map(|&f| Field::Input(f))
            .chain(FormulaField::ALL.iter().map(|&f| Field::Formula(f)))
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Input(f) => f.key(),
            Field::Formula(f) => f.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Input(f) => f.label(),
            Field::Formula(f) => f.label(),
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Field::Input(f) => f.unit(),
            Field::Formula(f) => f.unit(),
        }
    }

    /// Read the field from whichever record holds it.
    pub fn get(self, inputs: &Inputs, formulas: &FormulaParameters) -> f64 {
        match self {
            Field::Input(f) => f.get(inputs),
            Field::Formula(f) => f.get(formulas),
        }
    }

    /// Write the field into whichever record holds it.
    pub fn set(self, inputs: &mut Inputs, formulas: &mut FormulaParameters, value: f64) {
        match self {
            Field::Input(f) => f.set(inputs, value),
            Field::Formula(f) => f.set(formulas, value),
        }
    }
}

impl From<InputField> for Field {
    fn from(f: InputField) -> Self {
        Field::Input(f)
    }
}

impl From<FormulaField> for Field {
    fn from(f: FormulaField) -> Self {
        Field::Formula(f)
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<InputField>()
            .map(Field::Input)
            .or_else(|_| s.parse::<FormulaField>().map(Field::Formula))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
