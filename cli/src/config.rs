//! TOML scenario loading, validation, and command-line overrides.

use std::path::{Path, PathBuf};

use log::warn;
use margincalc::export::DEFAULT_EXPORT_FILE;
use margincalc::{Field, FormulaParameters, Inputs, Session, Unit, parse_edit};
use serde::Deserialize;

use crate::error::{Error, Result};

/// A calculation scenario. Every table and key is optional; missing keys keep
/// the calculator defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub inputs: Inputs,
    pub formulas: FormulaParameters,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Where `export` writes when no `--output` is given.
    pub file: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Scenario {
    /// Load and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ScenarioRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse from a TOML string (useful for testing).
    pub fn from_toml(toml: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(toml)?;
        scenario.validate()?;
        for warning in scenario.range_warnings() {
            warn!("{warning}");
        }
        Ok(scenario)
    }

    /// Reject values the calculator cannot work with.
    fn validate(&self) -> Result<()> {
        for field in Field::all() {
            let value = field.get(&self.inputs, &self.formulas);
            if !value.is_finite() {
                return Err(Error::Scenario(format!(
                    "{} must be a finite number, got {value}",
                    field.key()
                )));
            }
        }
        Ok(())
    }

    /// Values the calculator accepts but that are unusual for a real listing.
    pub fn range_warnings(&self) -> Vec<String> {
        Field::all()
            .filter_map(|field| {
                let value = field.get(&self.inputs, &self.formulas);
                match field.unit() {
                    Unit::Percent if !(0.0..=100.0).contains(&value) => Some(format!(
                        "{} = {value} is outside 0..100%",
                        field.key()
                    )),
                    _ if value < 0.0 => Some(format!("{} = {value} is negative", field.key())),
                    _ => None,
                }
            })
            .collect()
    }

    /// A session starting from this scenario's records.
    pub fn session(&self) -> Session {
        Session::with(self.inputs, self.formulas)
    }
}

/// Parse a `key=value` override.
///
/// Unlike interactive edits, an unparsable value is an error here.
pub fn parse_override(raw: &str) -> Result<(Field, f64)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::Override(format!("'{raw}' is not in key=value form")))?;
    let field: Field = key.trim().parse()?;
    let value = parse_edit(value)
        .ok_or_else(|| Error::Override(format!("'{}' is not a number for {field}", value.trim())))?;
    Ok((field, value))
}

/// Apply every override to `session`, in order.
pub fn apply_overrides(session: &mut Session, overrides: &[String]) -> Result<()> {
    for raw in overrides {
        let (field, value) = parse_override(raw)?;
        session.set(field, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use margincalc::{FormulaField, InputField};

    fn example_toml() -> &'static str {
        r#"
[inputs]
price = 12000.0
buyout_percent = 75.0
length = 40.0
width = 30.0
height = 20.0

[formulas]
to_customer_multiplier = 1.5

[export]
file = "out/listing.csv"
"#
    }

    #[test]
    fn parse_example_scenario() {
        let scenario = Scenario::from_toml(example_toml()).unwrap();
        assert_eq!(scenario.inputs.price, 12_000.0);
        assert_eq!(scenario.inputs.buyout_percent, 75.0);
        assert_eq!(scenario.formulas.to_customer_multiplier, 1.5);
        assert_eq!(scenario.export.file, PathBuf::from("out/listing.csv"));
    }

    #[test]
    fn missing_keys_take_defaults() {
        let scenario = Scenario::from_toml(example_toml()).unwrap();
        assert_eq!(scenario.inputs.commission_percent, 21.5);
        assert_eq!(scenario.formulas.base_to_customer_cost, 38.0);
    }

    #[test]
    fn empty_scenario_is_default() {
        let scenario = Scenario::from_toml("").unwrap();
        assert_eq!(scenario.inputs, Inputs::default());
        assert_eq!(scenario.formulas, FormulaParameters::default());
        assert_eq!(scenario.export.file, PathBuf::from(DEFAULT_EXPORT_FILE));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = Scenario::from_toml("[inputs]\nweight = 3.0\n").unwrap_err();
        assert!(matches!(err, Error::ScenarioParse(_)));
    }

    #[test]
    fn non_finite_rejected() {
        let err = Scenario::from_toml("[inputs]\nprice = nan\n").unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));

        let err = Scenario::from_toml("[formulas]\nto_customer_multiplier = inf\n").unwrap_err();
        assert!(err.to_string().contains("to_customer_multiplier"));
    }

    #[test]
    fn out_of_range_is_only_a_warning() {
        let scenario =
            Scenario::from_toml("[inputs]\nbuyout_percent = 120.0\ncost_price = -1.0\n").unwrap();
        let warnings = scenario.range_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("buyout_percent"));
        assert!(warnings[1].contains("cost_price"));
    }

    #[test]
    fn defaults_have_no_warnings() {
        assert!(Scenario::default().range_warnings().is_empty());
    }

    #[test]
    fn override_parsing() {
        assert_eq!(
            parse_override("price=9000").unwrap(),
            (Field::Input(InputField::Price), 9_000.0)
        );
        assert_eq!(
            parse_override("toCustomerMultiplier = 1,1").unwrap(),
            (Field::Formula(FormulaField::ToCustomerMultiplier), 1.1)
        );
    }

    #[test]
    fn override_errors() {
        assert!(matches!(parse_override("price"), Err(Error::Override(_))));
        assert!(matches!(parse_override("weight=1"), Err(Error::Field(_))));
        assert!(matches!(parse_override("price=cheap"), Err(Error::Override(_))));
    }

    #[test]
    fn overrides_apply_in_order() {
        let mut session = Scenario::default().session();
        apply_overrides(
            &mut session,
            &["price=1000".to_string(), "price=2000".to_string()],
        )
        .unwrap();
        assert_eq!(session.inputs.price, 2_000.0);
    }
}
