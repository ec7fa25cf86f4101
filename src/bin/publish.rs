//! Builds Avant Open Cloud for distribution.

use std::process;

use avant_publish::cli::{self, PublishArgs};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = PublishArgs::parse();
    let exit_code = match cli::run_publish(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
