#![forbid(unsafe_code)]

//! Command-line front ends for the Lumo toolkit.
//!
//! # Role in Lumo
//! `lumo-cli` owns everything `lumo-color` and `lumo-rings` deliberately
//! exclude: argument and environment parsing, console formatting, HTML
//! preview assembly, and file writing. The two binaries (`lumo-colors`,
//! `lumo-logo`) are thin wrappers over the testable functions in here.
//!
//! Args are parsed manually (no external dependencies) to keep the binaries
//! lean; every tool supports `LUMO_*` environment overrides with explicit
//! flags taking precedence.

pub mod colors;
pub mod logo;
pub mod preview;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by the `LUMO_LOG` variable.
///
/// With `LUMO_LOG` unset nothing is emitted, so diagnostic output never
/// pollutes the generated documents on stdout.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LUMO_LOG"))
        .with_writer(std::io::stderr)
        .try_init();
}
