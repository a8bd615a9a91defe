use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;

use voxelforge::app::App;
use voxelforge::event::Event;
use voxelforge::tui::{init, restore, set_title};
use voxelforge::ui::render;

/// Logging would corrupt the raw-mode terminal, so it only goes to the
/// file named by `VOXELFORGE_LOG`.
fn init_logging() {
    let Ok(path) = std::env::var("VOXELFORGE_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("cannot open log file {path}: {err}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut tui = init()?;
    let size = tui.size()?;
    let mut app = App::new(size.width, size.height);

    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(50));

    while app.running {
        if app.title_dirty {
            set_title(app.window_title())?;
            app.title_dirty = false;
        }
        tui.draw(|frame| render(&mut app, frame))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    // Other crossterm events carry nothing we render.
                    Some(Ok(_)) => continue,
                    // If the event stream ends or errors, shut down.
                    Some(Err(_)) | None => break,
                }
            }
        };

        app.handle_event(event);
    }

    restore()?;
    Ok(())
}
