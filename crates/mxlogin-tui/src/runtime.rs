//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.
//!
//! Async results arrive through an "inbox" channel: the spawned submission
//! task sends a `UiEvent` to `inbox_tx`, and the runtime drains `inbox_rx`
//! each frame.

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use mxlogin_core::client::LoginClient;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll cadence while a submission is in flight (spinner animation).
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Poll cadence when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime for the login screen.
///
/// Owns the terminal and state. Terminal state is restored on drop, panic,
/// and Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<LoginClient>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(client: LoginClient) -> Result<Self> {
        // Set up panic hook BEFORE entering the alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(),
            client: Arc::new(client),
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            for event in self.collect_events()? {
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal, the tick timer, and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while a request is in flight.
        let tick_interval = if self.state.submission.is_submitting() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - the submission result arrives here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless events are already pending.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    self.state.should_quit = true;
                }
                UiEffect::SubmitLogin { attempt } => {
                    let client = Arc::clone(&self.client);
                    let tx = self.inbox_tx.clone();
                    tokio::spawn(async move {
                        let result = match client.submit(&attempt).await {
                            Ok(outcome) => Ok(outcome),
                            Err(err) => {
                                tracing::error!(error = format!("{err:#}"), "login request failed");
                                Err(format!("{err:#}"))
                            }
                        };
                        let _ = tx.send(UiEvent::SubmitFinished(result));
                    });
                }
            }
        }
    }
}
