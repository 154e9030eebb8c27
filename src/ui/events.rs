// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::engine::{self, JobOutcome, WorkerMessage, QUALITY_MAX, QUALITY_MIN};
use crate::ui::form;
use crate::ui::state::{AppState, Focus, Status};

// Event types sent from the dedicated event thread to the main loop
enum UiEvent {
    Input(Event), // Keyboard or other terminal events
    Tick,         // Periodic redraw so worker outcomes surface promptly
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(100);

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(initial_input: Option<PathBuf>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(initial_input);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    let result = run_app(&mut terminal, &mut state, event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Block for at least one event, then drain the queue so a tick
        // backlog never delays key handling
        let mut pending_inputs: Vec<Event> = Vec::new();

        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Channel closed, exit
        }
        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            if let Event::Key(key) = input {
                if handle_key(key, state) {
                    return Ok(());
                }
            }
        }

        // Result dispatch: outcomes cross from the worker thread only through
        // this channel, never by direct mutation of UI state
        while let Ok(msg) = state.runner.receiver().try_recv() {
            dispatch_worker_message(msg, state);
        }

        terminal.draw(|frame| form::render(frame, state))?;
    }
}

fn dispatch_worker_message(msg: WorkerMessage, state: &mut AppState) {
    match msg {
        WorkerMessage::JobStarted { job_id: _ } => {
            state.status = Status::Running;
        }
        WorkerMessage::JobFinished { job_id: _, outcome } => {
            state.status = match outcome {
                JobOutcome::Success { output_path } => Status::Succeeded { output_path },
                JobOutcome::Failure { diagnostic } => Status::Failed { diagnostic },
                JobOutcome::ToolNotFound => Status::ToolMissing,
            };
            // The gate resets on every outcome so the form can never stay
            // stuck in Running
            state.runner.finish();
        }
    }
}

fn should_quit(key: &KeyEvent, state: &AppState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    // 'q' quits unless the path field would swallow it
    state.focus != Focus::Input && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Returns true when the UI should exit
fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if should_quit(&key, state) {
        return true;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
        }
        KeyCode::Enter => start_job(state),
        KeyCode::Esc => {
            if state.focus == Focus::Input {
                state.focus = state.focus.next();
            }
        }
        code => handle_field_key(code, state),
    }

    false
}

fn handle_field_key(code: KeyCode, state: &mut AppState) {
    match state.focus {
        Focus::Input => match code {
            KeyCode::Char(c) => state.input.push(c),
            KeyCode::Backspace => {
                state.input.pop();
            }
            _ => {}
        },
        Focus::Codec => match code {
            KeyCode::Left => state.cycle_codec(false),
            KeyCode::Right => state.cycle_codec(true),
            _ => {}
        },
        Focus::Quality => match code {
            KeyCode::Left => state.quality = state.quality.saturating_sub(1).max(QUALITY_MIN),
            KeyCode::Right => state.quality = (state.quality + 1).min(QUALITY_MAX),
            KeyCode::Home => state.quality = QUALITY_MIN,
            KeyCode::End => state.quality = QUALITY_MAX,
            _ => {}
        },
        Focus::Preset => match code {
            KeyCode::Left => state.cycle_preset(false),
            KeyCode::Right => state.cycle_preset(true),
            _ => {}
        },
        Focus::Start => {}
    }
}

/// Validate the form, build the invocation, and hand it to the runner.
///
/// A no-op while a job is in flight; the runner's gate enforces the same
/// rule for callers that bypass the UI.
fn start_job(state: &mut AppState) {
    if !state.runner.can_start() {
        return;
    }

    match state.params().validate() {
        Ok(request) => {
            let job = engine::build_job(&request);
            state.notice = None;
            match state.runner.start(job) {
                Ok(_) => state.status = Status::Running,
                Err(e) => state.notice = Some(e.to_string()),
            }
        }
        Err(e) => {
            state.notice = Some(e.to_string());
        }
    }
}
