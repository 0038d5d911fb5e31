use std::process::ExitCode;

use clap::Parser;

use sit_booker::cli::Args;
use sit_booker::orchestrator::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match sit_booker::run(args).await {
        Ok(Outcome::Booked) => {
            println!("Slot booked!");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Unmatched) => {
            println!("Could not find a training slot matching the provided parameters.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
