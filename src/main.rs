use clap::Parser;

use terra_dist::pipeline::ReleasePipeline;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "terra-dist")]
#[command(version = VERSION)]
#[command(about = "Package an optimized, stripped Terra-Link release binary")]
struct Cli {}

fn main() -> std::process::ExitCode {
    let _cli = Cli::parse();

    match ReleasePipeline::new().run() {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            // Collaborator diagnostics already passed through on inherited
            // stderr; this line is the pipeline's own failure status.
            eprintln!("error: {}", err);
            for hint in &err.hints {
                eprintln!("hint: {}", hint.message);
            }
            std::process::ExitCode::from(exit_code_to_u8(err.exit_code()))
        }
    }
}

// Only reached on failure, so a non-positive status still exits non-zero.
fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        1
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
