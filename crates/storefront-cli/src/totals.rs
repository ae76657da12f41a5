//! `totals` command: prints the rendered rows of a basket snapshot.

use std::path::Path;

use anyhow::Context;
use storefront_core::{BasketState, TotalsRow};

/// # Errors
///
/// Returns an error if the file cannot be read or is not a basket state.
pub(crate) fn run_totals(file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let basket: BasketState = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a basket state", file.display()))?;

    for row in basket.total_rows() {
        println!("{}", format_row(&row));
    }
    Ok(())
}

/// One line per row: label key, then the cells. Struck-through cells are
/// wrapped in `~~`.
pub(crate) fn format_row(row: &TotalsRow) -> String {
    let cells: Vec<String> = row
        .cells
        .iter()
        .map(|cell| {
            if cell.struck_through {
                format!("~~{}~~", cell.text())
            } else {
                cell.text()
            }
        })
        .collect();
    format!("{:<28}{}", row.kind.label_key(), cells.join(" "))
}
