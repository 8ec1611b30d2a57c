//! # margincalc
//!
//! A deterministic profitability calculator for a single marketplace listing.
//!
//! ## Features
//!
//! - **Discounts**: platform (SPP) and wallet discounts give the buyer's price
//! - **Fees**: commission, acquiring and tax on the listed price
//! - **Volumetric logistics**: forward leg and pickup-return leg priced by liters
//! - **Buyout blending**: expected logistics weighted between sale and return
//! - **Export**: semicolon-delimited CSV with comma decimals (`export` feature)
//!
//! ## Quick Start
//!
//! ```
//! use margincalc::{compute, FormulaParameters, Inputs};
//!
//! let inputs = Inputs::default();
//! let results = compute(&inputs, &FormulaParameters::default());
//!
//! assert!((results.volume - 212.16).abs() < 1e-9);
//! assert!((results.total_profit - 1_253.391).abs() < 1e-9);
//! assert!(results.is_profitable());
//! ```
//!
//! ## The Pipeline
//!
//! | step | value |
//! |------|-------|
//! | discounts | `price * percent / 100`, subtracted to get the buyer's price |
//! | fees | commission, acquiring, tax, all on the **listed** price |
//! | volume | `length * width * height / 1000` liters |
//! | forward leg | `(base + per_liter * max(0, volume - 1)) * multiplier` |
//! | pickup return | `0` below the threshold, else `base + per_liter * max(0, volume - 1)` |
//! | blend | `buyout * on_sale + (1 - buyout) * on_cancel` |
//! | margin | `profit / price * 100`, or `0` when `price <= 0` |
//!
//! ## Editing
//!
//! A [`Session`] holds the two editable records and recomputes on demand.
//! Text that is not a number is discarded and the previous value kept:
//!
//! ```
//! use margincalc::{EditOutcome, InputField, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.edit(InputField::Price, "12000"), EditOutcome::Applied(12_000.0));
//! assert_eq!(session.edit(InputField::Price, "twelve"), EditOutcome::Discarded);
//! assert_eq!(session.inputs.price, 12_000.0);
//!
//! let margin = session.results().profit_margin;
//! assert!(margin > 0.0);
//! ```

pub mod calculator;
mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod field;
mod formulas;
pub mod host;
mod inputs;
mod results;
mod session;

// Re-export public API
pub use calculator::compute;
pub use error::FieldError;
pub use field::{Field, FormulaField, InputField, Unit};
pub use formulas::FormulaParameters;
pub use host::{HostShell, NoHost, ThemeColors};
pub use inputs::Inputs;
pub use results::Results;
pub use session::{EditOutcome, Session, parse_edit};
