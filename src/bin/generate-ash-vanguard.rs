//! Ash Vanguard placeholder sprite: large orange-red circle.
//!
//! Run with: `cargo run --bin generate-ash-vanguard`

use std::path::Path;
use std::process::ExitCode;

use asset_tools::sprite::{generate_ash_vanguard, ASH_VANGUARD_FILE};

fn main() -> ExitCode {
    match generate_ash_vanguard(Path::new(ASH_VANGUARD_FILE)) {
        Ok(path) => {
            println!("Created {}", path.display());
            println!("Ash Vanguard sprite generated!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error [{}]: {}", err.code.as_str(), err);
            ExitCode::from(err.code.exit_code() as u8)
        }
    }
}
