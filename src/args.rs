use clap::{Args, Parser, Subcommand};

/// Utility to relay a byte stream between two devices over TCP.
#[derive(Parser, Debug)]

#[command(author, version, about, long_about = None)]
pub struct CliArgs
{ #[command(subcommand)]
  pub command: Command,

  /// Print verbose information to stderr
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// (De-)compress the stream with gzip
  #[arg(short = 'z', long = "gzip", global = true)]
  pub gzip: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command
{ #[command(about="Accept one connection and copy it to stdout", name="receive")]
  Receive(ReceiveArgs),

  #[command(about="Connect to a receiver and copy stdin to it", name="send")]
  Send(SendArgs),
}

#[derive(Args, Debug)]
pub struct ReceiveArgs
{ /// Address to listen on, e.g. 0.0.0.0:9000 or :9000
  #[clap(value_name = "binding_address")]
  pub address: String,
}

#[derive(Args, Debug)]
pub struct SendArgs
{ /// Address of the receiver, e.g. 192.168.1.20:9000
  #[clap(value_name = "destination_address")]
  pub address: String,
}

// Options shared by both modes, built once at startup.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config
{ pub verbose: bool,
  pub gzip: bool,
}

impl CliArgs
{ pub fn config(&self) -> Config
  { return Config { verbose: self.verbose, gzip: self.gzip };
  }
}
