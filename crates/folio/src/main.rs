use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction, NavigationAction};
use background::{spawn_background_worker, SharedState, TICK_RATE};
use middleware::{
    app_config_middleware::AppConfigMiddleware, boot_middleware::BootMiddleware,
    carousel_middleware::CarouselMiddleware, contact_middleware::ContactMiddleware,
    context_middleware::ContextMiddleware, counter_middleware::CounterMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    navigation_middleware::NavigationMiddleware, text_input_middleware::TextInputMiddleware,
    Middleware,
};
use state::AppState;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting folio, logging to {}", log_file.display());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run(&mut terminal);

    // Restore terminal, also when the app failed
    let restored = restore(&mut terminal);

    log::info!("Exiting folio");
    result.and(restored)
}

fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

fn run(terminal: &mut Tui) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let initial_state = AppState {
        viewport: Rect::new(0, 0, size.width, size.height),
        ..Default::default()
    };
    let shared_state: SharedState = Arc::new(RwLock::new(initial_state.clone()));

    // Main -> worker, and middleware re-entry
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    // Worker -> main, for reducers
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    // Middleware run in this order
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(ContextMiddleware::new()),
        Box::new(AppConfigMiddleware::new()),
        Box::new(BootMiddleware::new()),
        Box::new(CarouselMiddleware::new()),
        Box::new(CounterMiddleware::new()),
        Box::new(ContactMiddleware::new()),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    let _ = action_tx.send(Action::Bootstrap(BootstrapAction::Start));

    let result = event_loop(terminal, initial_state, &shared_state, &action_tx, &result_rx);

    // The worker stops on Quit, or once the action channel is gone
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    result
}

fn event_loop(
    terminal: &mut Tui,
    mut state: AppState,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> Result<()> {
    while state.running {
        terminal
            .draw(|frame| views::render(&state, frame.area(), frame))
            .context("Failed to draw frame")?;

        if event::poll(TICK_RATE).context("Failed to poll terminal events")? {
            if let Some(action) = translate_event(event::read().context("Failed to read event")?)
            {
                if action_tx.send(action).is_err() {
                    log::error!("Background worker is gone, stopping");
                    break;
                }
            }
        }

        // Apply everything the worker forwarded since the last frame
        let mut changed = false;
        for action in result_rx.try_iter() {
            state = reducers::app_reducer::reduce(state, &action);
            changed = true;
        }

        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to write shared state: {}", e),
            }
        }
    }

    Ok(())
}

/// Map a terminal event to the action it raises, if any
fn translate_event(event: Event) -> Option<Action> {
    match event {
        // Only key presses; releases and repeats are ignored
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Action::Global(GlobalAction::KeyPressed(key)))
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => Some(Action::Global(GlobalAction::MouseMoved {
                column: mouse.column,
                row: mouse.row,
            })),
            MouseEventKind::ScrollDown => Some(Action::Navigate(NavigationAction::Next)),
            MouseEventKind::ScrollUp => Some(Action::Navigate(NavigationAction::Previous)),
            _ => None,
        },
        Event::Resize(width, height) => Some(Action::Global(GlobalAction::Resize { width, height })),
        _ => None,
    }
}
