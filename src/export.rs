//! Spreadsheet export of a calculation.
//!
//! Produces a semicolon-delimited UTF-8 table with a byte-order mark, so it
//! opens directly in spreadsheet software configured for comma decimals.
//!
//! ```
//! use margincalc::{compute, export, FormulaParameters, Inputs};
//!
//! let inputs = Inputs::default();
//! let results = compute(&inputs, &FormulaParameters::default());
//! let csv = export::to_csv_string(&export::export_rows(&inputs, &results));
//!
//! assert!(csv.starts_with('\u{feff}'));
//! assert!(csv.contains("Result;Net profit;1253,39;₽"));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::field::{InputField, Unit};
use crate::{Inputs, Results};

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE: &str = "calculation.csv";

const BOM: &str = "\u{feff}";
const DELIMITER: u8 = b';';
const HEADER: [&str; 4] = ["Category", "Parameter", "Value", "Unit"];

/// Integer parts at least this long get thousands separators.
const GROUPING_MIN_DIGITS: usize = 5;
const GROUP_SEPARATOR: char = '\u{a0}';

/// Section a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Parameters,
    Finance,
    Result,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Parameters => write!(f, "Parameters"),
            Category::Finance => write!(f, "Finance"),
            Category::Result => write!(f, "Result"),
        }
    }
}

/// One line of the exported table.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportRow {
    Entry {
        category: Category,
        parameter: &'static str,
        value: f64,
        unit: Unit,
    },
    /// Section separator, written as empty cells.
    Blank,
}

impl ExportRow {
    fn input(category: Category, field: InputField, inputs: &Inputs) -> Self {
        ExportRow::Entry {
            category,
            parameter: field.label(),
            value: field.get(inputs),
            unit: field.unit(),
        }
    }

    fn result(parameter: &'static str, value: f64, unit: Unit) -> Self {
        ExportRow::Entry {
            category: Category::Result,
            parameter,
            value,
            unit,
        }
    }
}

/// The rows of an export, in table order.
pub fn export_rows(inputs: &Inputs, results: &Results) -> Vec<ExportRow> {
    use Category::{Finance, Parameters};

    vec![
        ExportRow::input(Parameters, InputField::Price, inputs),
        ExportRow::input(Parameters, InputField::SppDiscountPercent, inputs),
        ExportRow::input(Parameters, InputField::WalletDiscountPercent, inputs),
        ExportRow::input(Parameters, InputField::CommissionPercent, inputs),
        ExportRow::input(Parameters, InputField::BuyoutPercent, inputs),
        ExportRow::input(Parameters, InputField::ReturnFromCustomerCost, inputs),
        ExportRow::input(Finance, InputField::AcquiringPercent, inputs),
        ExportRow::input(Finance, InputField::TaxPercent, inputs),
        ExportRow::input(Parameters, InputField::Length, inputs),
        ExportRow::input(Parameters, InputField::Width, inputs),
        ExportRow::input(Parameters, InputField::Height, inputs),
        ExportRow::result("Product volume", results.volume, Unit::Liters),
        ExportRow::Blank,
        ExportRow::result("Price for buyer", results.price_on_platform, Unit::Currency),
        ExportRow::result("Commission", results.commission_value, Unit::Currency),
        ExportRow::result("Acquiring", results.acquiring_value, Unit::Currency),
        ExportRow::result("Tax (amount)", results.tax_value, Unit::Currency),
        ExportRow::result(
            "Total logistics incl. buyout",
            results.total_logistics,
            Unit::Currency,
        ),
        ExportRow::input(Parameters, InputField::CostPrice, inputs),
        ExportRow::result("Net profit", results.total_profit, Unit::Currency),
        ExportRow::result("Margin", results.profit_margin, Unit::Percent),
    ]
}

/// Two decimals, comma as decimal separator, non-breaking space between
/// thousands once the integer part reaches five digits.
///
/// Halves round away from zero (`0.125` gives `0,13`), judged on the exact
/// binary value of `value`. Non-finite values are written as `∞`, `-∞` and
/// `NaN`, since an overflowing volume can reach the export.
///
/// ```
/// use margincalc::export::format_decimal;
///
/// assert_eq!(format_decimal(1234.5), "1234,50");
/// assert_eq!(format_decimal(-12345.678), "-12\u{a0}345,68");
/// assert_eq!(format_decimal(83.125), "83,13");
/// ```
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = match Decimal::from_f64_retain(value.abs()) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Beyond Decimal's range two decimals carry no information anyway.
        None => format!("{:.2}", value.abs()),
    };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 {
        out.push('-');
    }
    if int_part.len() >= GROUPING_MIN_DIGITS && int_part.bytes().all(|b| b.is_ascii_digit()) {
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(digit);
        }
    } else {
        out.push_str(int_part);
    }
    out.push(',');
    out.push_str(frac_part);
    out
}

/// Write rows as a BOM-prefixed, semicolon-separated table.
///
/// Every record, the last one included, ends with `\n`. Cells holding the
/// delimiter or a quote are quoted.
pub fn write_csv<W: Write>(mut writer: W, rows: &[ExportRow]) -> io::Result<()> {
    writer.write_all(BOM.as_bytes())?;

    let mut csv = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(HEADER)?;

    for row in rows {
        match row {
            ExportRow::Entry {
                category,
                parameter,
                value,
                unit,
            } => csv.write_record([
                category.to_string(),
                parameter.to_string(),
                format_decimal(*value),
                unit.to_string(),
            ])?,
            ExportRow::Blank => csv.write_record(["", "", "", ""])?,
        }
    }

    csv.flush()
}

/// Render rows into a string.
pub fn to_csv_string(rows: &[ExportRow]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(&mut buf, rows);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the export for a calculation to `path`, replacing any existing file.
pub fn save_csv(path: &Path, inputs: &Inputs, results: &Results) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(io::BufWriter::new(file), &export_rows(inputs, results))
}
