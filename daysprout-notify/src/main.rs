//! Desktop notification service for daysprout reminders.
//!
//! `check` fires every reminder that came due since the last check and
//! records a watermark; `watch` does the same on an interval. Delivery is
//! best-effort: a failed notification is reported on stderr and never
//! touches the store or the exit code.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use daysprout_core::countdown::{days_difference, distance_suffix};
use daysprout_core::event::{CountdownMode, Event};
use daysprout_core::reminder::{due_reminders, load_watermark, save_watermark};
use daysprout_core::store::Store;
use notify_rust::Notification;

#[derive(Parser)]
#[command(name = "daysprout-notify")]
#[command(about = "Deliver daysprout reminders as desktop notifications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire reminders that came due since the last check
    Check,
    /// Keep checking on an interval
    Watch {
        /// Seconds between checks
        #[arg(short, long, default_value_t = 60)]
        interval: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::load()?;

    match cli.command {
        Commands::Check => check(&store),
        Commands::Watch { interval } => loop {
            if let Err(e) = check(&store) {
                eprintln!("Reminder check failed: {e}");
            }
            std::thread::sleep(std::time::Duration::from_secs(interval));
        },
    }
}

fn check(store: &Store) -> Result<()> {
    let now = Local::now().naive_local();

    let Some(since) = load_watermark(store.data_dir()) else {
        // First run: start the window now instead of replaying history.
        save_watermark(store.data_dir(), now)?;
        return Ok(());
    };

    // Raw events: reminder projection handles repeats itself.
    let events = store.events()?;

    for event in due_reminders(&events, since, now) {
        deliver(&event);
    }

    save_watermark(store.data_dir(), now)
        .map_err(|e| anyhow::anyhow!("Could not record check time: {e}"))
}

fn deliver(event: &Event) {
    let today = Local::now().date_naive();
    let days = days_difference(event.target_date, today);
    let display_days = match event.countdown_mode {
        CountdownMode::Forward => days,
        CountdownMode::Backward => -days,
    };

    let body = if days == 0 {
        format!("\u{201c}{}\u{201d} is today!", event.title)
    } else {
        format!(
            "\u{201c}{}\u{201d}: {} days {}",
            event.title,
            days.abs(),
            distance_suffix(event.countdown_mode, display_days)
        )
    };

    let result = Notification::new()
        .summary("📌 DaySprout reminder")
        .body(&body)
        .show();

    if let Err(e) = result {
        eprintln!("Failed to deliver reminder for '{}': {e}", event.title);
    }
}
