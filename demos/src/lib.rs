// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Understory demos.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber for the demos.
///
/// The filter comes from `RUST_LOG` and defaults to `debug` for the
/// Understory crates, so commits and skipped setters are visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_control_style=debug,info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
