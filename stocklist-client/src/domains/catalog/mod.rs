//! Catalog domain - drives the listing view model on the async runtime
//!
//! [`CatalogController`] owns one mounted [`CatalogState`] and carries out
//! the effects it asks for: the product fetch, the debounce timer and
//! navigation. All messages are processed one at a time on the caller's
//! task; the fetch and the timer report back through a channel.

pub mod debounce;

use std::sync::Arc;

use stocklist_core::catalog::{self, CatalogState, Effect, Message, ViewSettings};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub use self::debounce::Debouncer;
use crate::infra::navigation::Navigator;
use crate::infra::services::products::ProductSource;

pub struct CatalogController {
    state: CatalogState,
    source: Arc<dyn ProductSource>,
    navigator: Arc<dyn Navigator>,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    debouncer: Debouncer,
    fetch_task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("state", &self.state)
            .field("source", &self.source)
            .field("debouncer", &self.debouncer)
            .field("fetch_in_flight", &self.fetch_in_flight())
            .finish()
    }
}

impl CatalogController {
    pub fn new(
        settings: ViewSettings,
        source: Arc<dyn ProductSource>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: CatalogState::new(settings),
            source,
            navigator,
            tx,
            rx,
            debouncer: Debouncer::new(),
            fetch_task: None,
        }
    }

    /// Build and mount in one step.
    pub fn mounted(
        settings: ViewSettings,
        source: Arc<dyn ProductSource>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut controller = Self::new(settings, source, navigator);
        controller.mount();
        controller
    }

    pub fn mount(&mut self) {
        self.dispatch(Message::Mounted);
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply one message and run the resulting effect.
    pub fn dispatch(&mut self, message: Message) {
        let effect = catalog::update(&mut self.state, message);
        self.run_effect(effect);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchProducts => self.spawn_fetch(),
            Effect::ScheduleFilter { generation, delay } => {
                self.debouncer
                    .schedule(delay, self.tx.clone(), Message::FilterElapsed(generation));
            }
            Effect::Navigate(id) => self.navigator.navigate_to_product(&id),
        }
    }

    fn spawn_fetch(&mut self) {
        if let Some(previous) = self.fetch_task.take() {
            previous.abort();
        }
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let message = match source.fetch_products().await {
                Ok(products) => Message::ProductsLoaded(products),
                Err(err) => Message::LoadFailed(err.to_string()),
            };
            let _ = tx.send(message);
        }));
    }

    /// Wait for the next fetch/timer message. Does not dispatch it.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    /// Wait for the next message and dispatch it.
    pub async fn process_next(&mut self) {
        if let Some(message) = self.rx.recv().await {
            self.dispatch(message);
        }
    }

    /// Dispatch everything already queued without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message);
            processed += 1;
        }
        processed
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Fetch or debounce still outstanding.
    pub fn has_pending_work(&self) -> bool {
        self.fetch_in_flight() || self.debouncer.is_pending()
    }

    /// Process messages until the fetch has landed and no filter pass is
    /// pending.
    pub async fn settle(&mut self) {
        loop {
            let pending = self.has_pending_work();
            if self.process_pending() > 0 {
                continue;
            }
            if !pending {
                break;
            }
            self.process_next().await;
        }
    }

    /// Cancel the pending timer and any in-flight fetch. Called on drop.
    pub fn teardown(&mut self) {
        if self.debouncer.cancel() {
            log::debug!("Cancelled pending filter pass on teardown");
        }
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}

impl Drop for CatalogController {
    fn drop(&mut self) {
        self.teardown();
    }
}
