//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_carbon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Dispatch to server or one-shot analysis mode
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_carbon::initialization::init_logger_with;
use page_carbon::{analyze_once, run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PORT or ALLOWED_ORIGINS in .env without exporting
    // them manually. Try the current directory first, then next to the
    // executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Some(url) = config.analyze.clone() {
        // One-shot mode: analyze, print, exit
        match analyze_once(&config, &url).await {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(())
            }
            Err(e) => {
                eprintln!("page_carbon error: {:#}", e);
                process::exit(1);
            }
        }
    } else {
        match run_server(config).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("page_carbon error: {:#}", e);
                process::exit(1);
            }
        }
    }
}
