//! Creates the Avant Open Cloud binaries for distribution using Docker.

use std::process;

use avant_publish::cli::{self, DockerArgs};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = DockerArgs::parse();
    let exit_code = match cli::run_docker(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
