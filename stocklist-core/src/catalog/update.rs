//! Catalog view update logic

use std::sync::Arc;

use super::messages::{Effect, Message};
use super::types::{CatalogState, LoadState};
use crate::matcher::filter_products;
use crate::sorting::sort_products;

pub fn update(state: &mut CatalogState, message: Message) -> Effect {
    log::trace!("catalog message: {}", message.as_str());

    match message {
        Message::Mounted => {
            state.load = LoadState::Loading;
            Effect::FetchProducts
        }

        Message::ProductsLoaded(products) => {
            log::info!("Loaded {} products", products.len());
            state.load = LoadState::Loaded {
                count: products.len(),
            };
            state.original = Arc::from(products);
            state.working = state.original.to_vec();
            // A query typed before the data arrived still has to be honored.
            schedule_filter(state)
        }

        Message::LoadFailed(error) => {
            log::error!("Failed to load products: {}", error);
            state.load = LoadState::Failed(error);
            Effect::None
        }

        Message::QueryChanged(query) => {
            state.query = query;
            schedule_filter(state)
        }

        Message::FilterElapsed(generation) => {
            if generation != state.filter_generation {
                log::debug!(
                    "Dropping stale filter pass {} (current {})",
                    generation,
                    state.filter_generation
                );
                return Effect::None;
            }
            apply_filter(state);
            Effect::None
        }

        Message::SortRequested(column) => {
            let direction = state.toggles.click(column);
            sort_products(&mut state.working, column, direction);
            log::debug!(
                "Sorted {} rows by {} {:?}",
                state.working.len(),
                column.as_str(),
                direction
            );
            Effect::None
        }

        Message::RowActivated(index) => match state.working.get(index) {
            Some(product) => Effect::Navigate(product.id.clone()),
            None => {
                log::warn!("Row {} activated but only {} visible", index, state.working.len());
                Effect::None
            }
        },
    }
}

fn schedule_filter(state: &mut CatalogState) -> Effect {
    state.filter_generation += 1;
    Effect::ScheduleFilter {
        generation: state.filter_generation,
        delay: state.settings.debounce,
    }
}

fn apply_filter(state: &mut CatalogState) {
    state.working = filter_products(
        &state.original,
        &state.query,
        state.settings.min_query_chars,
    );
    state.filter_passes += 1;
    log::debug!(
        "Filter pass {} for query '{}': {} of {} products",
        state.filter_passes,
        state.query,
        state.working.len(),
        state.original.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{SortColumn, SortDirection};
    use stocklist_model::{Product, ProductId};

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::default();
        update(&mut state, Message::Mounted);
        let effect = update(
            &mut state,
            Message::ProductsLoaded(vec![
                Product::new("1", "SP001", "Áo thun").with_price(100.0).with_stock(2, 5),
                Product::new("2", "SP002", "Quần jean").with_price(200.0).with_stock(10, 3),
            ]),
        );
        let Effect::ScheduleFilter { generation, .. } = effect else {
            panic!("expected a scheduled filter, got {effect:?}");
        };
        update(&mut state, Message::FilterElapsed(generation));
        state
    }

    #[test]
    fn mount_requests_fetch() {
        let mut state = CatalogState::default();
        assert_eq!(update(&mut state, Message::Mounted), Effect::FetchProducts);
        assert!(state.load_state().is_loading());
    }

    #[test]
    fn load_populates_both_datasets() {
        let state = loaded_state();
        assert_eq!(state.original().len(), 2);
        assert_eq!(state.working(), &state.original()[..]);
        assert_eq!(state.load_state(), &LoadState::Loaded { count: 2 });
    }

    #[test]
    fn load_failure_leaves_view_empty() {
        let mut state = CatalogState::default();
        update(&mut state, Message::Mounted);
        let effect = update(&mut state, Message::LoadFailed("connection refused".into()));
        assert_eq!(effect, Effect::None);
        assert!(state.working().is_empty());
        assert!(state.table().is_empty());
        assert!(matches!(state.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn query_change_is_deferred_until_timer_fires() {
        let mut state = loaded_state();
        let effect = update(&mut state, Message::QueryChanged("jean".into()));
        assert!(matches!(effect, Effect::ScheduleFilter { .. }));
        // Nothing filtered yet.
        assert_eq!(state.working().len(), 2);

        let generation = state.filter_generation();
        update(&mut state, Message::FilterElapsed(generation));
        assert_eq!(state.working().len(), 1);
        assert_eq!(state.working()[0].name, "Quần jean");
    }

    #[test]
    fn superseded_timer_is_ignored() {
        let mut state = loaded_state();
        let passes = state.filter_passes();
        let Effect::ScheduleFilter { generation: stale, .. } =
            update(&mut state, Message::QueryChanged("áo".into()))
        else {
            panic!("expected schedule");
        };
        update(&mut state, Message::QueryChanged("áo t".into()));

        update(&mut state, Message::FilterElapsed(stale));
        assert_eq!(state.filter_passes(), passes);
        assert_eq!(state.working().len(), 2);

        let generation = state.filter_generation();
        update(&mut state, Message::FilterElapsed(generation));
        assert_eq!(state.filter_passes(), passes + 1);
        assert_eq!(state.working().len(), 1);
    }

    #[test]
    fn sort_click_flips_toggle_and_reorders() {
        let mut state = loaded_state();
        update(&mut state, Message::SortRequested(SortColumn::Price));
        assert_eq!(state.toggles().price, SortDirection::Ascending);
        assert_eq!(state.working()[0].name, "Áo thun");

        update(&mut state, Message::SortRequested(SortColumn::Price));
        assert_eq!(state.toggles().price, SortDirection::Descending);
        assert_eq!(state.working()[0].name, "Quần jean");
        assert_eq!(state.toggles().name, SortDirection::Unset);
    }

    #[test]
    fn row_activation_navigates_by_identity() {
        let mut state = loaded_state();
        update(&mut state, Message::SortRequested(SortColumn::Stock));
        update(&mut state, Message::SortRequested(SortColumn::Stock));
        assert_eq!(
            update(&mut state, Message::RowActivated(0)),
            Effect::Navigate(ProductId::new("2"))
        );
        assert_eq!(update(&mut state, Message::RowActivated(9)), Effect::None);
    }
}
