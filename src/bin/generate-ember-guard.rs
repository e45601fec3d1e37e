//! Ember Guard placeholder sprite: red square.
//!
//! Run with: `cargo run --bin generate-ember-guard`

use std::path::Path;
use std::process::ExitCode;

use asset_tools::sprite::{generate_ember_guard, EMBER_GUARD_FILE};

fn main() -> ExitCode {
    match generate_ember_guard(Path::new(EMBER_GUARD_FILE)) {
        Ok(path) => {
            println!("Created {}", path.display());
            println!("Ember Guard sprite generated!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error [{}]: {}", err.code.as_str(), err);
            ExitCode::from(err.code.exit_code() as u8)
        }
    }
}
