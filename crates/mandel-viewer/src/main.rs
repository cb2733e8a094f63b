use std::process::ExitCode;

use clap::Parser;
use mandel_core::errors::MandelErrorCode;
use mandel_viewer::cli::Cli;

fn main() -> ExitCode {
    mandel_core::tracing::init_tracing();
    let cli = Cli::parse();
    match mandel_viewer::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "{e}");
            eprintln!("{}", e.coded_message());
            ExitCode::FAILURE
        }
    }
}
