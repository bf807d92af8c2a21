//! Command-line home page.

use atelier::home::HomeViewModel;
use atelier::settings::Settings;
use atelier::sources::StorefrontApi;

use crate::args::locale::Session;

/// What: Fetch and print the home page.
///
/// Inputs:
/// - `settings`: Effective settings (API base URL, timeout, featured limit)
/// - `session`: Resolved locale session
///
/// Output:
/// - `false` only when the HTTP client cannot be built; fetch failures still render.
pub async fn handle_home(settings: &Settings, session: &Session) -> bool {
    tracing::info!(api = %settings.api_base_url, "Home page requested from CLI");
    let api = match StorefrontApi::new(&settings.api_base_url, settings.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "Failed to build HTTP client");
            return false;
        }
    };
    let mut home = HomeViewModel::new(settings.featured_limit);
    home.load(&api).await;
    println!("{}", atelier::ui::render_home(&home, &session.translations));
    true
}
