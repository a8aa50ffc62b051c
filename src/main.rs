use std::process::ExitCode;

fn main() -> ExitCode {
    date_ledger::common::logging::init_tracing();

    match date_ledger::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
