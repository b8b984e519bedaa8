// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Call [`init`] once at the start of `main`. Output goes to stderr so that
//! JSON written to stdout stays machine-readable. `RUST_LOG` takes
//! precedence over the default level.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gallery_lens=debug,info"
    } else {
        "info"
    }
}

/// Builds the filter: `RUST_LOG` if set and valid, otherwise the default.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global fmt subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
