use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::debug;

use folio_core::AppConfig;
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    widgets::{
        HelpWidget, HoverPreviewWidget, PageViewWidget, ProjectDetailWidget, StatusBarWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, anchor: Option<String>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state sized to the terminal
    let mut app = App::new(config.clone());
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    if let Some(anchor) = anchor {
        if !app.scroll_to_anchor(&anchor).is_started() {
            app.set_status(format!("No section named '{}'", anchor));
        }
    }

    let event_handler =
        EventHandler::new(config.ui.tick_rate_ms, config.scroll.frame_interval());

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Deliver this frame to running scroll animations
        let report = app.on_frame();
        for id in &report.completed {
            debug!("Scroll animation {} completed", id);
        }

        terminal.draw(|frame| draw(frame, app))?;

        // Poll at the frame rate while animating, otherwise at the tick rate
        let event = if app.is_animating() {
            event_handler.next_frame()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    match app.mode {
        Mode::Detail(_) => ProjectDetailWidget::render(frame, layout[0], app),
        Mode::Page | Mode::Help => {
            PageViewWidget::render(frame, layout[0], app);
            HoverPreviewWidget::render(frame, layout[0], app);
        }
    }
    StatusBarWidget::render(frame, layout[1], app);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, app);
    }
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollToAnchor(anchor) => {
            app.scroll_to_anchor(anchor);
        }
        Action::MoveDown => app.move_down(),
        Action::MoveUp => app.move_up(),
        Action::Select => app.open_detail(),
        Action::OpenLink => {
            if let Some(project) = app.current_project() {
                let url = project.image_url();
                if let Err(e) = open::that(&url) {
                    app.set_status(format!("Failed to open browser: {}", e));
                } else {
                    app.set_status(format!("Opening: {}", url));
                }
            }
        }
        Action::Back | Action::ExitMode => app.back(),
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::Help => app.toggle_help(),
        Action::None => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => app.pointer_clicked(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::ScrollUp => app.scroll_up(),
        _ => {}
    }
}
