use std::process::ExitCode;

use account_summary::{summarize, AccountDirectory, ExactDob};
use clap::Parser;
use log::error;

/// Demo account summary printer
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Account number (8–16 digits)
    #[clap(long)]
    account: String,

    /// Date of Birth in yyyy-mm-dd
    #[clap(long)]
    dob: String,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let directory = match AccountDirectory::demo() {
        Ok(directory) => directory,
        Err(err) => {
            error!("Embedded dataset failed to load: {:?}", err);
            println!("Error: demo dataset is invalid: {}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    match summarize(&directory, &ExactDob, &args.account, &args.dob) {
        Ok(summary) => {
            print!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
