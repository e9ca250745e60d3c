//! Input handling for the Quadrature TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use quadrature_engine::{App, COARSE_STEP, Overlay};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and queues them for the UI loop.
///
/// The reader only forwards events; all state changes happen on the loop
/// that drains the queue.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full queue wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to `app`, one event at a time.
///
/// Returns `true` when the user asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }

    if processed == MAX_EVENTS_PER_FRAME {
        debug!(
            backlog = input.rx.len(),
            "Input backlog deferred to next frame"
        );
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, ev: &Event) -> bool {
    let Event::Key(key) = ev else {
        // Resize and focus events need nothing beyond the next frame's redraw.
        return false;
    };
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }
    handle_key(app, *key);
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    let step = if coarse { COARSE_STEP } else { 1 };

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_quit();
        }
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.focus_next(),
        KeyCode::Left | KeyCode::Char('h') => {
            app.nudge_focused(-step);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.nudge_focused(step);
        }
        // Shifted letters arrive as uppercase without the SHIFT bit on some terminals.
        KeyCode::Char('H') => {
            app.nudge_focused(-COARSE_STEP);
        }
        KeyCode::Char('L') => {
            app.nudge_focused(COARSE_STEP);
        }
        KeyCode::Home => {
            app.jump_focused(false);
        }
        KeyCode::End => {
            app.jump_focused(true);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_focused();
        }
        KeyCode::Char(c) => {
            if let Some(overlay) = Overlay::from_hotkey(c) {
                app.toggle_overlay(overlay);
            }
        }
        _ => {}
    }
}
