//! Interactive terminal surface for the product list and detail routes.

pub mod events;
mod render;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use stocklist_core::{Message, SortColumn, ViewSettings};
use tokio::sync::mpsc;

use crate::domains::catalog::CatalogController;
use crate::infra::navigation::{Route, RouteNavigator};
use crate::infra::services::products::ProductSource;

#[derive(Debug, Default)]
pub(crate) struct UiState {
    route: Route,
    selected: usize,
}

#[derive(Debug)]
enum Action {
    None,
    Quit,
    Dispatch(Message),
    Select(isize),
    Open,
    BackToList,
}

fn action_for_key(key: KeyEvent, route: &Route, query: &str) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if let Route::ProductDetail(_) = route {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace => Action::BackToList,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut next = query.to_string();
            next.push(ch);
            Action::Dispatch(Message::QueryChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = query.to_string();
            if next.pop().is_some() {
                Action::Dispatch(Message::QueryChanged(next))
            } else {
                Action::None
            }
        }
        KeyCode::F(2) => Action::Dispatch(Message::SortRequested(SortColumn::Name)),
        KeyCode::F(3) => Action::Dispatch(Message::SortRequested(SortColumn::Price)),
        KeyCode::F(4) => Action::Dispatch(Message::SortRequested(SortColumn::Stock)),
        KeyCode::Enter => Action::Open,
        KeyCode::Up => Action::Select(-1),
        KeyCode::Down => Action::Select(1),
        _ => Action::None,
    }
}

/// Run the terminal UI until the user quits or the scripted input runs dry.
pub async fn run_tui(settings: ViewSettings, source: Arc<dyn ProductSource>) -> Result<()> {
    let event_source = events::event_source_from_env()?;
    let scripted = event_source.is_scripted();
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let _reader = events::spawn_reader(event_source, input_tx);

    let mut stdout = io::stdout();
    if !scripted {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, settings, source, &mut input_rx).await;

    if !scripted {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: ViewSettings,
    source: Arc<dyn ProductSource>,
    input_rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let navigator = RouteNavigator::new();
    let mount = || {
        CatalogController::mounted(
            settings,
            Arc::clone(&source),
            Arc::new(navigator.clone()),
        )
    };
    let mut controller = mount();
    let mut ui = UiState::default();

    loop {
        terminal
            .draw(|f| render::render(f, controller.state(), &ui))
            .context("draw frame")?;

        tokio::select! {
            input = input_rx.recv() => {
                let Some(event) = input else {
                    log::debug!("Input closed; leaving the UI");
                    break;
                };
                let Event::Key(key) = event else { continue };
                match action_for_key(key, &ui.route, controller.state().query()) {
                    Action::None => {}
                    Action::Quit => break,
                    Action::Dispatch(message) => {
                        if matches!(message, Message::QueryChanged(_)) {
                            ui.selected = 0;
                        }
                        controller.dispatch(message);
                    }
                    Action::Select(delta) => {
                        let rows = controller.state().working().len();
                        ui.selected = step_selection(ui.selected, delta, rows);
                    }
                    Action::Open => controller.dispatch(Message::RowActivated(ui.selected)),
                    Action::BackToList => {
                        navigator.back_to_list();
                        // Fresh mount: refetch, query and toggles start over.
                        controller = mount();
                        ui.selected = 0;
                    }
                }
            }
            Some(message) = controller.next_message() => {
                controller.dispatch(message);
            }
        }

        ui.route = navigator.current();
    }

    controller.teardown();
    Ok(())
}

fn step_selection(selected: usize, delta: isize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    let next = selected.min(rows - 1).saturating_add_signed(delta);
    next.min(rows - 1)
}
