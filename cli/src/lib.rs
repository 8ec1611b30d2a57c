//! margincalc-cli: command-line front end for the listing profitability calculator.
//!
//! Loads a TOML scenario, applies `key=value` overrides, and prints, exports
//! or interactively edits the calculation.

pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod report;
