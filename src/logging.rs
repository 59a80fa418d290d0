use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

pub(crate) const LOG_ENV: &str = "CLOSET_LOG";
const DEFAULT_FILTER: &str = "budget_closet=warn";

static INIT: Once = Once::new();

/// Install the global subscriber once. Logs go to stderr so they never interleave with the shell.
pub(crate) fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
