mod common;

use std::sync::Arc;
use std::time::Duration;

use stocklist_client::domains::catalog::CatalogController;
use stocklist_client::infra::{Navigator, Route, RouteNavigator};
use stocklist_core::{LoadState, Message, SortColumn, SortDirection, ViewSettings};

use common::{StubSource, names, sample_products};

fn mount(source: &StubSource, navigator: &RouteNavigator) -> CatalogController {
    CatalogController::mounted(
        ViewSettings::default(),
        Arc::new(source.clone()),
        Arc::new(navigator.clone()),
    )
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_runs_one_filter_pass_with_the_final_query() {
    let source = StubSource::new(sample_products());
    let mut controller = mount(&source, &RouteNavigator::new());
    controller.settle().await;
    let passes = controller.state().filter_passes();

    for query in ["q", "qu", "quầ", "quần"] {
        controller.dispatch(Message::QueryChanged(query.to_string()));
        tokio::time::advance(Duration::from_millis(50)).await;
        assert_eq!(controller.process_pending(), 0, "no pass inside the quiet period");
    }
    controller.settle().await;

    assert_eq!(controller.state().filter_passes(), passes + 1);
    assert_eq!(names(controller.state().working()), vec!["Quần jean"]);
}

#[tokio::test(start_paused = true)]
async fn quiet_period_elapses_before_filtering() {
    let source = StubSource::new(sample_products());
    let mut controller = mount(&source, &RouteNavigator::new());
    controller.settle().await;

    controller.dispatch(Message::QueryChanged("giay".to_string()));
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.process_pending();
    assert_eq!(controller.state().working().len(), 4);

    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.process_pending();
    assert_eq!(names(controller.state().working()), vec!["Giày thể thao"]);
}

#[tokio::test(start_paused = true)]
async fn products_arriving_after_typing_are_still_filtered() {
    let source = StubSource::new(sample_products()).with_latency(Duration::from_secs(1));
    let mut controller = mount(&source, &RouteNavigator::new());
    assert!(controller.state().load_state().is_loading());

    controller.dispatch(Message::QueryChanged("áo ".to_string()));
    controller.settle().await;

    assert_eq!(
        controller.state().load_state(),
        &LoadState::Loaded { count: 4 }
    );
    assert_eq!(
        names(controller.state().working()),
        vec!["Áo thun", "Áo khoác gió"]
    );
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_timer_and_fetch() {
    let source = StubSource::new(sample_products()).with_latency(Duration::from_secs(1));
    let mut controller = mount(&source, &RouteNavigator::new());
    controller.dispatch(Message::QueryChanged("quần".to_string()));
    assert!(controller.has_pending_work());

    controller.teardown();
    assert!(!controller.has_pending_work());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.process_pending(), 0);
    assert_eq!(controller.state().filter_passes(), 0);
    assert!(controller.state().original().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_leaves_an_empty_view() {
    let source = StubSource::failing();
    let mut controller = mount(&source, &RouteNavigator::new());
    controller.settle().await;

    match controller.state().load_state() {
        LoadState::Failed(reason) => assert!(reason.contains("401"), "{reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(controller.state().working().is_empty());
    assert!(controller.state().table().is_empty());

    // The view keeps accepting input.
    controller.dispatch(Message::QueryChanged("áo thun".to_string()));
    controller.dispatch(Message::SortRequested(SortColumn::Name));
    controller.settle().await;
    assert!(controller.state().working().is_empty());
}

#[tokio::test(start_paused = true)]
async fn activating_a_row_routes_to_its_detail_page() {
    let source = StubSource::new(sample_products());
    let navigator = RouteNavigator::new();
    let mut controller = mount(&source, &navigator);
    controller.settle().await;

    controller.dispatch(Message::SortRequested(SortColumn::Price));
    assert_eq!(controller.state().toggles().price, SortDirection::Ascending);
    controller.dispatch(Message::RowActivated(0));

    // Missing price sorts lowest.
    assert_eq!(navigator.current(), Route::ProductDetail("p4".into()));
    assert_eq!(navigator.current().path(), "/product/p4");
}

#[tokio::test(start_paused = true)]
async fn remounting_fetches_again_and_resets_view_state() {
    let source = StubSource::new(sample_products());
    let navigator = RouteNavigator::new();

    let mut first = mount(&source, &navigator);
    first.settle().await;
    first.dispatch(Message::QueryChanged("quần".to_string()));
    first.dispatch(Message::SortRequested(SortColumn::Stock));
    first.settle().await;
    drop(first);

    navigator.navigate_to_product(&"p2".into());
    navigator.back_to_list();

    let mut second = mount(&source, &navigator);
    second.settle().await;

    assert_eq!(source.calls(), 2);
    assert_eq!(second.state().query(), "");
    assert_eq!(second.state().toggles().stock, SortDirection::Unset);
    assert_eq!(second.state().working().len(), 4);
    assert_eq!(navigator.current(), Route::ProductList);
}
