//! The host-held pair of editable records.
//!
//! A [`Session`] owns the current [`Inputs`] and [`FormulaParameters`] and
//! recomputes [`Results`] on request. Nothing is cached, so results can never
//! go stale after an edit.

use crate::error::FieldError;
use crate::field::Field;
use crate::{FormulaParameters, Inputs, Results, compute};

/// Outcome of applying raw text to a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOutcome {
    /// The field now holds this value.
    Applied(f64),
    /// The text was not a number; the previous value is kept.
    Discarded,
}

impl EditOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }
}

/// Interpret text typed into a numeric field.
///
/// Blank input counts as `0`. A comma is accepted as the decimal separator.
/// Anything else that does not parse to a finite number yields `None`.
///
/// ```
/// use margincalc::parse_edit;
///
/// assert_eq!(parse_edit("21,5"), Some(21.5));
/// assert_eq!(parse_edit(""), Some(0.0));
/// assert_eq!(parse_edit("abc"), None);
/// ```
pub fn parse_edit(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let value: f64 = trimmed.replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

/// Editable calculator state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub inputs: Inputs,
    pub formulas: FormulaParameters,
}

impl Session {
    /// A session with the default inputs and formula coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session starting from the given records.
    pub fn with(inputs: Inputs, formulas: FormulaParameters) -> Self {
        Self { inputs, formulas }
    }

    /// Recompute the breakdown from the current records.
    pub fn results(&self) -> Results {
        compute(&self.inputs, &self.formulas)
    }

    /// Current value of a field.
    pub fn get(&self, field: impl Into<Field>) -> f64 {
        field.into().get(&self.inputs, &self.formulas)
    }

    /// Set a field to an already-parsed value.
    pub fn set(&mut self, field: impl Into<Field>, value: f64) {
        field.into().set(&mut self.inputs, &mut self.formulas, value);
    }

    /// Apply raw text to a field. Non-numeric text is discarded silently.
    pub fn edit(&mut self, field: impl Into<Field>, raw: &str) -> EditOutcome {
        match parse_edit(raw) {
            Some(value) => {
                self.set(field, value);
                EditOutcome::Applied(value)
            }
            None => EditOutcome::Discarded,
        }
    }

    /// Like [`Session::edit`], addressing the field by key or camelCase name.
    pub fn edit_named(&mut self, name: &str, raw: &str) -> Result<EditOutcome, FieldError> {
        let field: Field = name.parse()?;
        Ok(self.edit(field, raw))
    }

    /// Restore both records to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FormulaField, InputField};

    #[test]
    fn parse_edit_variants() {
        assert_eq!(parse_edit("42"), Some(42.0));
        assert_eq!(parse_edit("  1.8 "), Some(1.8));
        assert_eq!(parse_edit("-5"), Some(-5.0));
        assert_eq!(parse_edit("   "), Some(0.0));
        assert_eq!(parse_edit("12abc"), None);
        assert_eq!(parse_edit("NaN"), None);
        assert_eq!(parse_edit("inf"), None);
        assert_eq!(parse_edit("1e999"), None);
    }

    #[test]
    fn edit_applies_number() {
        let mut session = Session::new();
        let outcome = session.edit(InputField::Price, "12500");
        assert_eq!(outcome, EditOutcome::Applied(12_500.0));
        assert_eq!(session.inputs.price, 12_500.0);
    }

    #[test]
    fn edit_discards_garbage_and_keeps_prior_value() {
        let mut session = Session::new();
        session.set(InputField::BuyoutPercent, 75.0);
        let outcome = session.edit(InputField::BuyoutPercent, "seventy");
        assert_eq!(outcome, EditOutcome::Discarded);
        assert!(!outcome.is_applied());
        assert_eq!(session.inputs.buyout_percent, 75.0);
    }

    #[test]
    fn edit_blank_sets_zero() {
        let mut session = Session::new();
        session.edit(FormulaField::ToCustomerMultiplier, "");
        assert_eq!(session.formulas.to_customer_multiplier, 0.0);
    }

    #[test]
    fn edit_named_resolves_both_spellings() {
        let mut session = Session::new();
        session.edit_named("costPrice", "2500").unwrap();
        session.edit_named("return_to_pickup_base_cost", "100").unwrap();
        assert_eq!(session.inputs.cost_price, 2_500.0);
        assert_eq!(session.formulas.return_to_pickup_base_cost, 100.0);
    }

    #[test]
    fn edit_named_unknown_field() {
        let mut session = Session::new();
        assert_eq!(
            session.edit_named("weight", "1"),
            Err(FieldError::UnknownField("weight".into()))
        );
        assert_eq!(session, Session::new());
    }

    #[test]
    fn results_follow_edits() {
        let mut session = Session::new();
        let before = session.results();
        session.set(InputField::CostPrice, 4_000.0);
        let after = session.results();
        assert!((before.total_profit - after.total_profit - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::new();
        session.set(InputField::Length, 1.0);
        session.set(FormulaField::BaseToCustomerCost, 0.0);
        session.reset();
        assert_eq!(session, Session::new());
        assert_eq!(session.get(InputField::Length), 104.0);
    }
}
