//! Diagnostic logging to stderr via `tracing`.

use std::io::IsTerminal;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Picks the filter directive.
///
/// Precedence order:
/// 1. `-v` flags (info, debug, trace)
/// 2. `RUST_LOG` environment variable
/// 3. Config file `log` setting
/// 4. `warn`
pub fn filter_directive(verbose: u8, env: Option<&str>, config: Option<&str>) -> String {
    let from_flags = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };

    from_flags
        .or(env.filter(|s| !s.is_empty()))
        .or(config)
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// Builds the filter for `directive`, falling back to `warn` when it does not
/// parse. The parse error is returned so it can be reported once logging is up.
pub fn build_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(err)),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, config: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref(), config);
    let (filter, invalid) = build_filter(&directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if let Some(err) = invalid {
        warn!(directive = %directive, error = %err, "invalid log filter, using warn");
    }
}
