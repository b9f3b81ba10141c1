//! Input sources for the terminal UI.
//!
//! Input is read on a dedicated thread and forwarded to the UI task over a
//! channel, so the UI task only ever waits on channels and timers.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

pub const SCRIPT_ENV: &str = "STOCKLIST_TUI_SCRIPT";
pub const TRACE_ENV: &str = "STOCKLIST_TUI_TRACE";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Source of key/input events so tests can drive the TUI without a real tty.
pub trait EventSource: Send {
    /// `Ok(None)` on timeout.
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;

    /// No further events will ever be produced.
    fn is_exhausted(&self) -> bool {
        false
    }

    fn is_scripted(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Input(Event),
    Wait(Duration),
}

/// Scripted event source driven by a simple line-oriented DSL:
///   up|down|enter|esc|backspace|f2|f3|f4|ctrl-c|type:<text>|wait:<duration>
/// Lines beginning with # are ignored. Blank lines are skipped.
/// `wait:` takes a humantime duration, e.g. `wait:300ms`.
#[derive(Debug)]
pub struct ScriptEventSource {
    steps: Vec<ScriptStep>,
    cursor: usize,
    trace: Option<std::fs::File>,
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> ScriptStep {
    ScriptStep::Input(Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }))
}

impl ScriptEventSource {
    pub fn parse(contents: &str) -> Result<Vec<ScriptStep>> {
        let mut steps = Vec::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line {
                "up" => steps.push(key(KeyCode::Up, KeyModifiers::NONE)),
                "down" => steps.push(key(KeyCode::Down, KeyModifiers::NONE)),
                "enter" => steps.push(key(KeyCode::Enter, KeyModifiers::NONE)),
                "esc" => steps.push(key(KeyCode::Esc, KeyModifiers::NONE)),
                "backspace" => steps.push(key(KeyCode::Backspace, KeyModifiers::NONE)),
                "f2" => steps.push(key(KeyCode::F(2), KeyModifiers::NONE)),
                "f3" => steps.push(key(KeyCode::F(3), KeyModifiers::NONE)),
                "f4" => steps.push(key(KeyCode::F(4), KeyModifiers::NONE)),
                "ctrl-c" => steps.push(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                _ => {
                    if let Some(text) = line.strip_prefix("type:") {
                        steps.extend(
                            text.chars()
                                .map(|ch| key(KeyCode::Char(ch), KeyModifiers::NONE)),
                        );
                    } else if let Some(wait) = line.strip_prefix("wait:") {
                        let duration = humantime::parse_duration(wait.trim()).with_context(|| {
                            format!("invalid wait duration at line {}: {}", idx + 1, wait)
                        })?;
                        steps.push(ScriptStep::Wait(duration));
                    } else {
                        return Err(anyhow!(
                            "unrecognized TUI script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    }
                }
            }
        }
        Ok(steps)
    }

    pub fn from_path(path: PathBuf, trace_path: Option<PathBuf>) -> Result<Self> {
        let contents = std::fs::read_to_string(&path).context("read scripted TUI input")?;
        let trace = trace_path
            .map(|p| std::fs::File::create(p).context("create tui trace file"))
            .transpose()?;
        Ok(Self {
            steps: Self::parse(&contents)?,
            cursor: 0,
            trace,
        })
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        while let Some(step) = self.steps.get(self.cursor).cloned() {
            self.cursor += 1;
            if let Some(trace) = self.trace.as_mut() {
                let _ = writeln!(trace, "{:?}", step);
            }
            match step {
                ScriptStep::Wait(duration) => std::thread::sleep(duration),
                ScriptStep::Input(ev) => return Ok(Some(ev)),
            }
        }
        Ok(None)
    }

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

pub fn event_source_from_env() -> Result<Box<dyn EventSource>> {
    if let Ok(path) = std::env::var(SCRIPT_ENV) {
        let trace = std::env::var(TRACE_ENV).ok();
        let src = ScriptEventSource::from_path(PathBuf::from(path), trace.map(PathBuf::from))?;
        Ok(Box::new(src))
    } else {
        Ok(Box::new(CrosstermEventSource))
    }
}

/// Forward key presses and resizes until the source runs dry or the UI
/// hangs up.
pub fn spawn_reader(
    mut source: Box<dyn EventSource>,
    tx: UnboundedSender<Event>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            match source.next(POLL_INTERVAL) {
                Ok(Some(Event::Key(key))) if key.kind != KeyEventKind::Press => {}
                Ok(Some(ev)) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    if source.is_exhausted() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("Input source failed: {err:#}");
                    break;
                }
            }
        }
    })
}
