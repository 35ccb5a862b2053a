#![forbid(unsafe_code)]

//! `lumo-logo` binary entry point.

use lumo_cli::logo;

fn main() {
    lumo_cli::init_tracing();
    let opts = logo::Opts::parse();
    if let Err(e) = logo::run(&opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
