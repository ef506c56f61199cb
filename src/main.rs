mod args;
mod copy;
mod error;
mod receive;
mod send;
mod stream;
mod tcp;

use anyhow::{Context, Result};
use clap::Parser;
use crate::args::Command::*;
use crate::args::{Command, Config};
use crate::receive::*;
use crate::send::*;
use std::process::ExitCode;
use tracing::Level;


fn main() -> ExitCode
{ let args = args::CliArgs::parse();
  let config = args.config();

  init_logging(&config);

  match run(args.command, &config)
  { Ok(()) => ExitCode::SUCCESS,
    Err(e) =>
    { eprintln!("error: {:#}", e);
      ExitCode::FAILURE
    },
  }
}

fn run(command: Command, config: &Config) -> Result<()>
{ match command
  { Receive(a) =>
    { let address = a.address.clone();
      receive(a, config).with_context(|| format!("receive on {} failed", address))?;
    },
    Send(a) =>
    { let address = a.address.clone();
      send(a, config).with_context(|| format!("send to {} failed", address))?;
    },
  }

  return Ok(());
}

// Diagnostics go to stderr and stay quiet unless --verbose was given.

fn init_logging(config: &Config)
{ let level = if config.verbose { Level::INFO } else { Level::WARN };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level)
    .with_target(false)
    .with_ansi(false)
    .without_time()
    .init();
}
