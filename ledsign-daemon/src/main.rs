//! ledsign - LED dot-matrix sign daemon
//!
//! Drives a software sign on stdout and takes control commands from
//! stdin, one per line. Type `help` for the command list.
//!
//! Usage: `ledsign [CONFIG]` (default `sign.toml`)

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info, warn};

use ledsign_drivers::TerminalMatrix;

mod commands;
mod config;
mod sign;

use crate::commands::{Command, CommandError};
use crate::config::DEFAULT_CONFIG_PATH;
use crate::sign::SignService;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let sign = config.paced_for_terminal().sign;
    let device = TerminalMatrix::new(io::stdout(), sign.width, sign.height);
    let mut service = match SignService::new(device, sign) {
        Ok(service) => service,
        Err(e) => {
            error!("sign init failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("ledsign ready, type `help` for commands");

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("stdin: {}", e);
                break;
            }
        };

        if let Err(e) = service.poll() {
            error!("display loop stopped: {}", e);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("error: {}", e);
                continue;
            }
        };

        let quit = command == Command::Quit;
        match service.execute(command) {
            Ok(reply) => println!("{}", reply),
            Err(e) if e.is_recoverable() => println!("error: {}", e),
            Err(e) => {
                error!("{}", e);
                println!("error: {}", e);
            }
        }
        if quit {
            break;
        }
    }

    if let Err(e) = service.shutdown() {
        warn!("shutdown: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
