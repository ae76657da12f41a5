use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_core::{BasketState, Shipping};

use super::*;
use crate::totals::format_row;

#[test]
fn parses_totals_command() {
    let cli = Cli::try_parse_from(["storefront-cli", "totals", "basket.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Totals { ref file } if file == &PathBuf::from("basket.json")
    ));
}

#[test]
fn parses_recommend_command() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "recommend",
        "--sku",
        "oak-side-table",
        "--visitor-id",
        "visitor-1",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Recommend { ref sku, ref visitor_id, raw: false }
            if sku == "oak-side-table" && visitor_id == "visitor-1"
    ));
}

#[test]
fn recommend_requires_visitor_id() {
    let result = Cli::try_parse_from(["storefront-cli", "recommend", "--sku", "oak-side-table"]);
    assert!(result.is_err());
}

#[test]
fn parses_page_command_without_visitor() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "page",
        "/shop/chairs/oak-lounge-chair",
        "--variant",
        "oak-lounge-chair-smoked",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Page { visitor_id: None, variant: Some(ref v), .. } if v == "oak-lounge-chair-smoked"
    ));
}

#[test]
fn parses_catalog_validate_with_explicit_path() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "catalog",
        "validate",
        "--path",
        "fixtures/catalog.yaml",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Catalog {
            command: CatalogCommands::Validate { ref path }
        } if path == &PathBuf::from("fixtures/catalog.yaml")
    ));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["storefront-cli"]).is_err());
}

#[test]
fn format_row_marks_struck_through_cells() {
    let basket = BasketState {
        shipping: Some(Shipping {
            unit_price: Decimal::from_str("12.50").expect("valid decimal"),
        }),
        free_shipping: true,
        ..BasketState::default()
    };
    let rows = basket.total_rows();
    let shipping = rows
        .iter()
        .find(|r| r.kind.label_key() == "basket:shipping")
        .expect("shipping row");
    assert_eq!(format_row(shipping).trim_end(), format!("{:<28}~~12.50~~ 0", "basket:shipping"));
}
