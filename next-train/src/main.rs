use std::io::Write;

use next_train::board::{Board, BoardConfig};
use next_train::query::now_local;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig::from_env();
    info!(path = %config.timetable_path.display(), "loading timetable");
    let board = Board::load(config);

    let mut interval = tokio::time::interval(board.config().refresh_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut stdout = std::io::stdout();
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = now_local();
                // Clear screen and home the cursor before each redraw
                let frame = format!(
                    "\x1b[2J\x1b[H{}\n{}",
                    board.title(now),
                    board.render(now, true)
                );
                if let Err(e) = stdout.write_all(frame.as_bytes()).and_then(|_| stdout.flush()) {
                    eprintln!("Failed to draw board: {e}");
                    break;
                }
            }
            _ = &mut shutdown => {
                println!();
                info!("shutting down");
                break;
            }
        }
    }
}
