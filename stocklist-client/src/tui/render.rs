use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use stocklist_core::{CatalogState, LoadState, TableModel};
use stocklist_model::ProductId;

use super::UiState;
use crate::infra::navigation::Route;

const HELP: &str = "F2 name  F3 price  F4 stock  Up/Down select  Enter open  Esc quit";

pub(super) fn render(f: &mut Frame, state: &CatalogState, ui: &UiState) {
    match &ui.route {
        Route::ProductList => render_list(f, state, ui),
        Route::ProductDetail(id) => {
            let area = f.size();
            render_detail(f, area, state, id);
        }
    }
}

fn render_list(f: &mut Frame, state: &CatalogState, ui: &UiState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let min_chars = state.settings().min_query_chars;
    let search = Paragraph::new(state.query().to_string()).block(
        Block::default()
            .title(format!("Search code or name (min {min_chars} characters)"))
            .borders(Borders::ALL),
    );
    f.render_widget(search, vertical[0]);

    let model = state.table();
    let table = product_table(&model);
    let mut table_state = TableState::default();
    if !model.rows.is_empty() {
        table_state.select(Some(ui.selected.min(model.rows.len() - 1)));
    }
    f.render_stateful_widget(table, vertical[1], &mut table_state);

    let status = Paragraph::new(status_line(state))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, vertical[2]);
}

fn product_table(model: &TableModel) -> Table<'static> {
    let header = Row::new(
        model
            .headers
            .iter()
            .map(|header| Cell::from(header.title())),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = model
        .rows
        .iter()
        .map(|row| {
            let style = if row.low_stock {
                Style::default().bg(Color::Yellow).fg(Color::Black)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.ordinal.to_string()),
                Cell::from(row.product_code.clone()),
                Cell::from(row.name.clone()),
                Cell::from(row.price.clone()),
                Cell::from(row.description.clone()),
                Cell::from(row.stock.to_string()),
                Cell::from(row.warning_level.to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Percentage(20),
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(14),
    ];

    Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Products").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
}

fn status_line(state: &CatalogState) -> String {
    match state.load_state() {
        LoadState::Idle | LoadState::Loading => "Loading products...".to_string(),
        LoadState::Failed(err) => format!("Failed to load products: {err}"),
        LoadState::Loaded { count } => {
            format!("{} of {} products  |  {HELP}", state.working().len(), count)
        }
    }
}

fn render_detail(f: &mut Frame, area: Rect, state: &CatalogState, id: &ProductId) {
    let lines: Vec<Line> = match state.original().iter().find(|p| &p.id == id) {
        Some(product) => {
            let price = product
                .price()
                .map(|price| price.to_string())
                .unwrap_or_else(|| "-".to_string());
            let stock_style = if product.is_low_stock() {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let stock = Span::styled(product.stock.to_string(), stock_style);
            vec![
                Line::from(format!("Code:          {}", product.product_code)),
                Line::from(format!("Name:          {}", product.name)),
                Line::from(format!("Price:         {price}")),
                Line::from(vec![Span::raw("Stock:         "), stock]),
                Line::from(format!("Warning level: {}", product.warning_level)),
                Line::from(""),
                Line::from(product.description().to_string()),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc: back to the product list",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![Line::from(format!(
            "Product {id} is not part of the loaded catalog"
        ))],
    };

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Route::ProductDetail(id.clone()).path())
            .borders(Borders::ALL),
    );
    f.render_widget(detail, area);
}
