use crate::carousel::SystemClock;
use crate::config::Config;
use crate::content::ContentClient;
use crate::loader::{LoadOutcome, LoadTask};
use crate::ui::app::PreviewApp;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::Instant;
use tokio::sync::mpsc;

/// Run the terminal preview until the user quits.
pub async fn run(client: ContentClient, config: &Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = PreviewApp::connect(client, config, SystemClock);
    let mut events = EventHandler::start();
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();

    tracing::info!("Preview started");
    spawn_all(app.mount(), &settled_tx);

    loop {
        let drawn = app.render_frame(|app| {
            terminal.draw(|frame| draw(frame, app))?;
            Ok::<_, std::io::Error>(())
        });
        if let Err(err) = drawn {
            events.stop();
            drop(guard);
            return Err(err.into());
        }
        if app.should_quit() {
            break;
        }

        let wake = tokio::time::Instant::from_std(app.next_wake(Instant::now()));
        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => spawn_all(app.on_key(key), &settled_tx),
                // Redrawn at the top of the loop.
                Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            Some(outcome) = settled_rx.recv() => {
                tracing::trace!(?outcome, "Fetch settled");
            }
            _ = tokio::time::sleep_until(wake) => {}
        }
    }

    app.teardown();
    events.stop();
    drop(guard);
    tracing::info!("Preview closed");
    Ok(())
}

/// Spawn fetches; each reports back so the loop redraws when it lands.
fn spawn_all(tasks: Vec<LoadTask>, settled: &mpsc::UnboundedSender<LoadOutcome>) {
    for task in tasks {
        let settled = settled.clone();
        tokio::spawn(async move {
            let _ = settled.send(task.await);
        });
    }
}
