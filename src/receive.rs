use crate::args::*;
use crate::copy::*;
use crate::error::*;
use crate::stream::Inbound;
use crate::tcp::*;
use std::io::{self, Write};
use std::net::TcpStream;
use tracing::info;

// Wait for a single TCP connection and copy everything it carries to stdout.

pub fn receive(args: ReceiveArgs, config: &Config) -> Result<u64, RelayError>
{ let stdout = io::stdout();
  let mut output = stdout.lock();

  return receive_into(&args.address, config, &mut output);
}

pub fn receive_into<W: Write>(address: &str, config: &Config, output: &mut W) -> Result<u64, RelayError>
{ let (stream, _) = listen_on(address)?;

  return relay_inbound(stream, config, output);
}

// Copy an accepted connection to the output, then release the decoder
// and close the connection, on the failure path too.

fn relay_inbound<W: Write>(stream: TcpStream, config: &Config, output: &mut W) -> Result<u64, RelayError>
{ let mut inbound = Inbound::new(stream, config.gzip);
  let compressed = inbound.is_compressed();

  if compressed
  { info!("Using gzip compression"); }

  let progress_bar = progress_bar(config.verbose, "Receiving");
  let transfer = copy(&mut inbound, output, &progress_bar);
  progress_bar.finish_and_clear();

  if transfer.bytes > 0
  { info!("Received {} bytes", transfer.bytes); }

  let copied = match transfer.result
  { Ok(()) => Ok(()),
    Err(CopyFailure::Read(e)) if compressed => Err(RelayError::from_decoder(e)),
    Err(CopyFailure::Read(e)) | Err(CopyFailure::Write(e)) => Err(RelayError::Io(e)),
  };

  // bytes already received stay delivered, even after a failure
  let copied = keep_first(copied, output.flush());
  let closed = close(inbound.into_inner());

  return keep_first(copied, closed).map(|()| transfer.bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::Outbound;
    use std::net::TcpListener;
    use std::thread;

    /// Accept one connection on loopback after `peer` has written `wire` to it.
    fn receive_wire(wire: Vec<u8>, gzip: bool) -> (Result<u64, RelayError>, Vec<u8>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        let peer = thread::spawn(move || {
            let mut stream = TcpStream::connect(address).unwrap();
            stream.write_all(&wire).unwrap();
        });

        let (stream, _) = listener.accept().unwrap();
        let config = Config { verbose: false, gzip };
        let mut output = Vec::new();
        let result = relay_inbound(stream, &config, &mut output);

        peer.join().unwrap();
        (result, output)
    }

    fn gzipped(data: &[u8]) -> Vec<u8> {
        let mut outbound = Outbound::new(Vec::new(), true);
        outbound.write_all(data).unwrap();
        outbound.finish().unwrap()
    }

    #[test]
    fn test_receive_raw_until_peer_closes() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 256) as u8).collect();

        let (result, output) = receive_wire(data.clone(), false);

        assert_eq!(result.unwrap(), data.len() as u64);
        assert_eq!(output, data);
    }

    #[test]
    fn test_receive_gzip_counts_decompressed_bytes() {
        let data = b"abcabcabc".repeat(5_000);

        let (result, output) = receive_wire(gzipped(&data), true);

        assert_eq!(result.unwrap(), data.len() as u64);
        assert_eq!(output, data);
    }

    #[test]
    fn test_receive_gzip_from_uncompressed_sender_is_codec_error() {
        let (result, output) = receive_wire(b"plain text, no header".to_vec(), true);

        assert!(matches!(result, Err(RelayError::Codec(_))), "got {:?}", result);
        assert!(output.is_empty());
    }

    #[test]
    fn test_receive_truncated_gzip_is_codec_error() {
        let data = b"0123456789".repeat(1_000);
        let mut wire = gzipped(&data);
        wire.truncate(wire.len() - 4);

        let (result, _) = receive_wire(wire, true);

        assert!(matches!(result, Err(RelayError::Codec(_))), "got {:?}", result);
    }

    #[test]
    fn test_receive_empty_connection() {
        let (result, output) = receive_wire(Vec::new(), false);

        assert_eq!(result.unwrap(), 0);
        assert!(output.is_empty());
    }
}
