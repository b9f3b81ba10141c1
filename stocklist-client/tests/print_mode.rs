mod common;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use stocklist_client::domains::catalog::CatalogController;
use stocklist_client::infra::{ApiClient, MemorySessionStore, RouteNavigator, SessionStore};
use stocklist_client::print::run_print;
use stocklist_config::ApiConfig;
use stocklist_core::{SortColumn, ViewSettings};

use common::{StubSource, sample_json, sample_products, serve};

fn controller_for(source: StubSource) -> CatalogController {
    CatalogController::mounted(
        ViewSettings::default(),
        Arc::new(source),
        Arc::new(RouteNavigator::new()),
    )
}

#[tokio::test(start_paused = true)]
async fn prints_filtered_rows_in_clicked_order() {
    let mut controller = controller_for(StubSource::new(sample_products()));
    let mut out = Vec::new();

    run_print(
        &mut controller,
        Some("Ao "),
        &[SortColumn::Price, SortColumn::Price],
        &mut out,
    )
    .await
    .expect("print");

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "{text}");
    assert!(lines[0].contains("Price ↓"));
    assert!(lines[1].contains("Áo khoác gió"));
    assert!(lines[2].contains("Áo thun"));
    assert!(lines[1].starts_with('!') && lines[2].starts_with('!'));
    assert!(lines[2].contains("Áo thun cotton 100% thoáng mát, phù hợp mặc hằng n..."));
}

#[tokio::test(start_paused = true)]
async fn short_query_prints_everything() {
    let mut controller = controller_for(StubSource::new(sample_products()));
    let mut out = Vec::new();

    run_print(&mut controller, Some("ao"), &[], &mut out)
        .await
        .expect("print");

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 5, "{text}");
    assert!(text.contains("Giày thể thao"));
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_prints_empty_table_and_errors() {
    let mut controller = controller_for(StubSource::failing());
    let mut out = Vec::new();

    let err = run_print(&mut controller, None, &[], &mut out)
        .await
        .expect_err("fetch failure surfaces");

    assert!(err.to_string().contains("failed to load products"));
    assert!(String::from_utf8(out).expect("utf8").contains("(no products)"));
}

#[tokio::test]
async fn prints_from_a_live_endpoint() {
    let router = Router::new().route("/v1/app/products/", get(|| async { Json(sample_json()) }));
    let (base_url, server) = serve(router).await;

    let config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    let session: Arc<dyn SessionStore> =
        Arc::new(MemorySessionStore::new(Some("abc".to_string())));
    let client = ApiClient::new(&config, session).expect("client");
    let mut controller = CatalogController::mounted(
        ViewSettings::default(),
        Arc::new(client),
        Arc::new(RouteNavigator::new()),
    );
    let mut out = Vec::new();

    run_print(&mut controller, Some("SP00"), &[SortColumn::Stock], &mut out)
        .await
        .expect("print");

    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "{text}");
    assert!(lines[0].contains("Stock ↑"));
    assert!(lines[1].contains("SP003"));
    assert!(lines[3].contains("SP002"));
    server.abort();
}
