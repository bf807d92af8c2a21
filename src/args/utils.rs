//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log filter string (trace, debug, info, warn, error, or a full `RUST_LOG` directive).
///
/// Details:
/// - Verbose flag overrides `log_level`.
/// - A non-empty `RUST_LOG` wins over both, so targeted directives keep working.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if let Ok(directive) = std::env::var("RUST_LOG")
        && !directive.trim().is_empty()
    {
        directive
    } else if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
