use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::error;

use crate::constants::{UI_REFRESH_INTERVAL_MS, UI_RESULT_CHANNEL_CAPACITY};
use crate::controller::PendingTranslation;
use crate::translator::TranslationClient;
use crate::tui::input::InputHandler;
use crate::tui::render::render_ui;
use crate::tui::App;
use crate::utils::CrushorError;

/// A finished background translation; `result` is `None` if the task died
struct TranslationOutcome {
    pending: PendingTranslation,
    result: Option<String>,
}

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("❌ Crushor requires an interactive terminal.");
        eprintln!("   For pipes and scripts use: crushor --message \"u up?\"");
        return Err(CrushorError::UIError("No interactive terminal available".to_string()).into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let (tx, mut rx) = mpsc::channel::<TranslationOutcome>(UI_RESULT_CHANNEL_CAPACITY);

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<TranslationOutcome>,
    rx: &mut mpsc::Receiver<TranslationOutcome>,
) -> Result<()> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(UI_REFRESH_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input.handle_key(key);
                    if let Some(pending) = app.apply(action) {
                        spawn_translation(app.controller.client(), pending, tx.clone());
                    }
                }
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.finish(outcome.pending, outcome.result);
        }

        app.on_tick();

        if !app.running {
            break;
        }
    }

    Ok(())
}

/// Run the client call off the UI loop and report back over the channel
fn spawn_translation(
    client: Arc<TranslationClient>,
    pending: PendingTranslation,
    tx: mpsc::Sender<TranslationOutcome>,
) {
    tokio::spawn(async move {
        let request = pending.request.clone();
        let task =
            tokio::spawn(async move { client.translate(&request.input_text, request.mode).await });

        let result = match task.await {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Translation task failed: {}", e);
                None
            }
        };

        // Receiver is gone only when the UI has exited
        let _ = tx.send(TranslationOutcome { pending, result }).await;
    });
}
