mod cli;
mod cmd;
mod error;
mod i18n;
mod model;
mod tui;

use clap::Parser;
use error::DeckError;

fn main() {
    let cli = cli::Cli::parse();
    match cmd::dispatch(cli.command) {
        Ok(()) => {}
        Err(e) => {
            if let Some(de) = e.downcast_ref::<DeckError>() {
                let json = serde_json::to_value(de).unwrap();
                eprintln!("{}", json);
                std::process::exit(de.exit_code());
            } else {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
