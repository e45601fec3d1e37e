use clap::Parser;

mod commands;
mod output;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rename-assets")]
#[command(version = VERSION)]
#[command(about = "Rename image assets to snake_case and update references in project files")]
struct Cli {
    #[command(flatten)]
    rename: rename::RenameArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match rename::run(cli.rename) {
        Ok((text, exit_code)) => match output::print_text(&text) {
            Ok(()) => exit_code,
            Err(err) => {
                output::print_error(&err);
                err.code.exit_code()
            }
        },
        Err(err) => {
            output::print_error(&err);
            err.code.exit_code()
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
