//! Command-line argument definition and processing.

use clap::{Parser, Subcommand};

use atelier::state::{PriceRange, SortOption};

/// Atelier - browse an artist's storefront from the terminal
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(version)]
#[command(about = "Browse an artist's storefront from the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Storefront API base URL (overrides `api_base_url` in settings.conf)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Current route, used to compute the locale redirect (e.g. /en/shop)
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Page to show (defaults to the home page)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Pages and actions.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Featured works and the hero image
    Home,
    /// Available artworks with client-side sorting and price filtering
    Shop {
        /// Sort order: newest, oldest, price-low, price-high
        #[arg(long, default_value_t = SortOption::Newest)]
        sort: SortOption,
        /// Price range: all, under-500, 500-1000, 1000+ or MIN-MAX
        #[arg(long, default_value = "all")]
        range: PriceRange,
    },
    /// Show the language switcher, or switch language
    Locale {
        /// Locale action; omit to list the supported languages
        #[command(subcommand)]
        action: Option<LocaleAction>,
    },
}

/// Language switcher actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    /// Switch to a supported language and persist the choice
    Set {
        /// Language code (en, bg)
        code: String,
    },
}

/// What: Dispatch the parsed command.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `true` when the command succeeded.
///
/// Details:
/// - Loads `settings.conf`, applies CLI overrides, then resolves the active locale
///   before rendering any page.
pub async fn process_args(args: &Args) -> bool {
    use crate::args::{home, locale, shop};

    let mut settings = atelier::settings::load_settings();
    if let Some(url) = &args.api_base_url {
        settings.api_base_url = url.trim_end_matches('/').to_string();
    }
    let mut session = locale::Session::start(&settings, &args.path);

    match args.command.clone().unwrap_or(Command::Home) {
        Command::Home => home::handle_home(&settings, &session).await,
        Command::Shop { sort, range } => shop::handle_shop(&settings, &session, sort, range).await,
        Command::Locale { action: None } => {
            locale::handle_show(&session);
            true
        }
        Command::Locale {
            action: Some(LocaleAction::Set { code }),
        } => locale::handle_set(&mut session, &code),
    }
}
