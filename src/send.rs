use crate::args::*;
use crate::copy::*;
use crate::error::*;
use crate::stream::Outbound;
use crate::tcp::*;
use std::io::{self, Read};
use std::net::TcpStream;
use tracing::info;

// Connect to a receiver and copy stdin to it until stdin is exhausted.

pub fn send(args: SendArgs, config: &Config) -> Result<u64, RelayError>
{ let stdin = io::stdin();
  let mut input = stdin.lock();

  return send_from(&args.address, config, &mut input);
}

pub fn send_from<R: Read>(address: &str, config: &Config, input: &mut R) -> Result<u64, RelayError>
{ let stream = connect_to(address)?;

  return relay_outbound(stream, config, input);
}

// Copy the input to the connection. The gzip trailer has to be written
// before the connection is closed, on the failure path too.

fn relay_outbound<R: Read>(stream: TcpStream, config: &Config, input: &mut R) -> Result<u64, RelayError>
{ let mut outbound = Outbound::new(stream, config.gzip);

  if outbound.is_compressed()
  { info!("Using gzip compression"); }

  let progress_bar = progress_bar(config.verbose, "Sending");
  let transfer = copy(input, &mut outbound, &progress_bar);
  progress_bar.finish_and_clear();

  if transfer.bytes > 0
  { info!("Sent {} bytes", transfer.bytes); }

  let copied = transfer.result.map_err(|failure| match failure
  { CopyFailure::Read(e) | CopyFailure::Write(e) => RelayError::Io(e),
  });

  let closed = match outbound.finish()
  { Ok(stream) => close(stream),
    Err(e) => Err(e),
  };

  return keep_first(copied, closed).map(|()| transfer.bytes);
}
