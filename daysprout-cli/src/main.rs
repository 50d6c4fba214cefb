mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daysprout_core::store::Store;

#[derive(Parser)]
#[command(name = "daysprout")]
#[command(about = "Track countdown events from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, future first
    List {
        /// Only show events in this category (by id or name)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show full details for one event
    Show {
        /// Event id (or unique prefix) or exact title
        event: String,
    },
    /// Create a new event
    Add {
        title: Option<String>,

        /// Target date/time (e.g. "2025-12-24", "next friday 6pm")
        #[arg(short, long)]
        date: Option<String>,

        /// Category id or name
        #[arg(short, long)]
        category: Option<String>,

        /// Repeat rule: none, daily, weekly, monthly, yearly
        #[arg(short, long)]
        repeat: Option<String>,

        /// Count up from the date instead of down to it
        #[arg(long)]
        backward: bool,

        /// Pin this event (unpins any other)
        #[arg(long)]
        pin: bool,

        /// Reminder date/time
        #[arg(long)]
        remind_at: Option<String>,
    },
    /// Edit an existing event
    Edit {
        /// Event id (or unique prefix) or exact title
        event: String,

        #[arg(long)]
        title: Option<String>,

        /// New target date/time
        #[arg(short, long)]
        date: Option<String>,

        /// Category id or name
        #[arg(short, long)]
        category: Option<String>,

        /// Repeat rule: none, daily, weekly, monthly, yearly
        #[arg(short, long)]
        repeat: Option<String>,

        /// New reminder date/time ("off" to clear)
        #[arg(long)]
        remind_at: Option<String>,
    },
    /// Delete an event
    Delete {
        /// Event id (or unique prefix) or exact title
        event: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Pin an event to the top of the list
    Pin {
        /// Event id (or unique prefix) or exact title
        event: String,
    },
    /// Remove the current pin
    Unpin,
    /// Search events by title
    Search { query: String },
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List all categories
    List,
    /// Create a new category
    Add {
        name: String,

        /// Glyph shown next to the name
        #[arg(long, default_value = "📅")]
        icon: String,
    },
    /// Delete a category (its events move to the default category)
    Delete {
        /// Category id or name
        category: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::load()?;

    match cli.command {
        Commands::List { category } => commands::list::run(&store, category.as_deref()),
        Commands::Show { event } => commands::show::run(&store, &event),
        Commands::Add {
            title,
            date,
            category,
            repeat,
            backward,
            pin,
            remind_at,
        } => commands::add::run(&store, title, date, category, repeat, backward, pin, remind_at),
        Commands::Edit {
            event,
            title,
            date,
            category,
            repeat,
            remind_at,
        } => commands::edit::run(&store, &event, title, date, category, repeat, remind_at),
        Commands::Delete { event, yes } => commands::delete::run(&store, &event, yes),
        Commands::Pin { event } => commands::pin::run(&store, &event),
        Commands::Unpin => commands::pin::run_unpin(&store),
        Commands::Search { query } => commands::search::run(&store, &query),
        Commands::Category { command } => match command {
            CategoryCommands::List => commands::category::run_list(&store),
            CategoryCommands::Add { name, icon } => commands::category::run_add(&store, &name, &icon),
            CategoryCommands::Delete { category, yes } => {
                commands::category::run_delete(&store, &category, yes)
            }
        },
    }
}
