//! Tarn command-line front end.
//!
//! The binary only parses arguments; the commands live here so they can be
//! driven from tests with in-memory writers.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `TARN_LOG=tarn_lexer=debug` (or `RUST_LOG`); without either
/// variable no subscriber is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var("TARN_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
