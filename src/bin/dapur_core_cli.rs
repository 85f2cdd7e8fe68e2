use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = dapur_core::cli::run() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
