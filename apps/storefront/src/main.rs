//! # Dondurma Storefront Entry Point
//!
//! Replays a JSON command script against a fresh storefront session and
//! prints the final basket.
//!
//! ## Usage
//! ```bash
//! # Empty session on the seed catalog
//! cargo run -p dondurma-storefront
//!
//! # Replay a script
//! cargo run -p dondurma-storefront -- session.json
//!
//! # Use a catalog file
//! DONDURMA_CATALOG_PATH=./catalog.json cargo run -p dondurma-storefront -- session.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let script = std::env::args_os().nth(1).map(PathBuf::from);

    match dondurma_storefront::run(script.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
