use crate::error::ScorerError;
use tracing_subscriber::EnvFilter;

/// Level implied by the global `-v`/`-q` flags, falling back to config, then `warn`.
pub fn resolve_level(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_ascii_lowercase(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// `RUST_LOG` wins over the resolved level. Logs go to stderr so stdout stays parseable.
pub fn init(level: &str) -> Result<(), ScorerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            ScorerError::ConfigParse(format!("invalid log level '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| ScorerError::ConfigParse(format!("logging setup failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_everything() {
        assert_eq!(resolve_level(2, true, Some("debug")), "error");
    }

    #[test]
    fn verbosity_flags_beat_config() {
        assert_eq!(resolve_level(1, false, Some("error")), "info");
        assert_eq!(resolve_level(3, false, None), "debug");
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(resolve_level(0, false, Some("INFO")), "info");
        assert_eq!(resolve_level(0, false, None), "warn");
    }
}
