mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(2);
        }
    };

    match jadval::run(&config) {
        Ok(summary) => {
            println!(
                "Processed {} page(s) in {} file(s); wrote {} spreadsheet(s).",
                summary.pages, summary.files, summary.sheets
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
