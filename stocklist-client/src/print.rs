//! Headless rendering: mount, let the fetch and debounce settle, print once.

use std::io::Write;

use anyhow::{Context, Result, bail};
use stocklist_core::{LoadState, Message, SortColumn, TableModel};

use crate::domains::catalog::CatalogController;

/// Drive a freshly mounted controller through `query` and the `sorts`
/// clicks, then write the resulting table to `out`.
pub async fn run_print<W: Write>(
    controller: &mut CatalogController,
    query: Option<&str>,
    sorts: &[SortColumn],
    out: &mut W,
) -> Result<()> {
    controller.settle().await;

    if let Some(query) = query {
        controller.dispatch(Message::QueryChanged(query.to_string()));
        controller.settle().await;
    }
    for column in sorts {
        controller.dispatch(Message::SortRequested(*column));
    }

    let table = controller.state().table();
    out.write_all(render_table(&table).as_bytes())
        .context("write product table")?;
    out.flush().context("flush output")?;

    if let LoadState::Failed(reason) = controller.state().load_state() {
        bail!("failed to load products: {reason}");
    }
    Ok(())
}

/// Plain-text table with aligned columns. Low-stock rows are marked `!`
/// in the leading column.
pub fn render_table(table: &TableModel) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);
    let mut header = vec![String::new()];
    header.extend(table.headers.iter().map(|h| h.title()));
    grid.push(header);

    for row in &table.rows {
        grid.push(vec![
            if row.low_stock { "!" } else { "" }.to_string(),
            row.ordinal.to_string(),
            row.product_code.clone(),
            row.name.clone(),
            row.price.clone(),
            row.description.clone(),
            row.stock.to_string(),
            row.warning_level.to_string(),
        ]);
    }

    let columns = grid.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            grid.iter()
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut rendered = String::new();
    for line in &grid {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        rendered.push_str(cells.join("  ").trim_end());
        rendered.push('\n');
    }
    if table.is_empty() {
        rendered.push_str("(no products)\n");
    }
    rendered
}
