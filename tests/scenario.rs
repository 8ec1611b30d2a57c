//! End-to-end scenarios: a bulky listing through the whole pipeline.

use margincalc::host::{self, NoHost};
use margincalc::{FormulaParameters, InputField, Inputs, Session, ThemeColors, compute};

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

fn bulky_listing() -> Inputs {
    Inputs {
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

#[test]
fn bulky_listing_breakdown() {
    let r = compute(&bulky_listing(), &FormulaParameters::default());

    assert_close(r.volume, 212.16, "volume");
    assert_close(r.to_customer_on_sale, (38.0 + 9.5 * 211.16) * 1.25, "to customer");
    assert_close(r.to_customer_on_sale, 2_555.025, "to customer");
    assert_close(r.return_to_pickup_on_cancel, 137.5 + 11.5 * 211.16, "pickup return");
    assert_close(r.return_to_pickup_on_cancel, 2_565.84, "pickup return");
    assert_close(r.logistics_on_cancel, 5_170.865, "cancel path");
    assert_close(r.total_logistics, 0.9 * 2_555.025 + 0.1 * 5_170.865, "blend");
    assert_close(r.total_logistics, 2_816.609, "blend");
    assert_close(
        r.total_profit,
        10_000.0 - 2_150.0 - 180.0 - 2_816.609 - 600.0 - 3_000.0,
        "profit",
    );
    assert_close(r.profit_margin, 12.53391, "margin");
}

#[test]
fn defaults_are_the_bulky_listing() {
    assert_eq!(Inputs::default(), bulky_listing());
}

#[test]
fn small_parcel_avoids_pickup_return() {
    let inputs = Inputs {
        length: 30.0,
        width: 20.0,
        height: 10.0,
        ..bulky_listing()
    };
    let r = compute(&inputs, &FormulaParameters::default());

    assert_close(r.volume, 6.0, "volume");
    assert_close(r.to_customer_on_sale, (38.0 + 9.5 * 5.0) * 1.25, "to customer");
    assert_eq!(r.return_to_pickup_on_cancel, 0.0);
    assert_close(r.logistics_on_cancel, r.to_customer_on_sale + 50.0, "cancel path");
    assert!(r.total_profit > compute(&bulky_listing(), &FormulaParameters::default()).total_profit);
}

#[test]
fn session_without_host() {
    let mut session = Session::new();
    let colors = host::attach(&mut NoHost, || {});
    assert_eq!(colors, ThemeColors::default());

    session.edit(InputField::BuyoutPercent, "100");
    let r = session.results();
    assert_eq!(r.total_logistics, r.logistics_on_sale);

    session.edit(InputField::Price, "");
    assert_eq!(session.results().profit_margin, 0.0);
}

#[cfg(feature = "export")]
#[test]
fn exported_table_matches_results() {
    use margincalc::export::{self, ExportRow};

    let inputs = bulky_listing();
    let results = compute(&inputs, &FormulaParameters::default());
    let rows = export::export_rows(&inputs, &results);

    let profit = rows.iter().find_map(|row| match row {
        ExportRow::Entry {
            parameter: "Net profit",
            value,
            ..
        } => Some(*value),
        _ => None,
    });
    assert_eq!(profit, Some(results.total_profit));

    let csv = export::to_csv_string(&rows);
    assert!(csv.contains("Result;Total logistics incl. buyout;2816,61;₽"));
    assert!(csv.contains("Parameters;Cost price;3000,00;₽"));
}
