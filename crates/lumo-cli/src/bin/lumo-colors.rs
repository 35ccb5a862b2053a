#![forbid(unsafe_code)]

//! `lumo-colors` binary entry point.

use lumo_cli::colors;

fn main() {
    lumo_cli::init_tracing();
    let opts = colors::Opts::parse();
    if let Err(e) = colors::run(&opts) {
        eprintln!("Failed to write preview: {e}");
        std::process::exit(1);
    }
}
