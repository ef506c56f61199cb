use std::io;
use thiserror::Error;
use tracing::debug;

// Operational failures. Usage errors never get this far: clap reports them
// and exits with status 2.

#[derive(Error, Debug)]
pub enum RelayError
{ #[error("cannot listen on {address}: {source}")]
  Bind { address: String, source: io::Error },

  #[error("cannot accept a connection on {address}: {source}")]
  Accept { address: String, source: io::Error },

  #[error("cannot connect to {address}: {source}")]
  Connect { address: String, source: io::Error },

  #[error("invalid gzip stream: {0}")]
  Codec(#[source] io::Error),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

impl RelayError
{ // Classify a failure that surfaced while reading a gzip-wrapped stream.
  // The decoder reports bad headers, corrupt blocks and truncated trailers
  // with these kinds; anything else came from the socket underneath.

  pub fn from_decoder(error: io::Error) -> RelayError
  { return match error.kind()
    { io::ErrorKind::InvalidInput
      | io::ErrorKind::InvalidData
      | io::ErrorKind::UnexpectedEof => RelayError::Codec(error),
      _ => RelayError::Io(error),
    };
  }
}

// Combine the outcome of a transfer with the outcome of tearing it down.
// The first failure wins; a later one is only logged.

pub fn keep_first(result: Result<(), RelayError>, teardown: io::Result<()>) -> Result<(), RelayError>
{ return match (result, teardown)
  { (Err(e), Err(later)) =>
    { debug!("ignoring teardown failure after {}: {}", e, later);
      Err(e)
    },
    (Err(e), Ok(())) => Err(e),
    (Ok(()), teardown) => teardown.map_err(RelayError::Io),
  };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset() -> io::Error {
        io::Error::new(io::ErrorKind::ConnectionReset, "reset")
    }

    #[test]
    fn test_keep_first_prefers_transfer_failure() {
        let err = keep_first(Err(RelayError::Codec(reset())), Err(reset())).unwrap_err();
        assert!(matches!(err, RelayError::Codec(_)));
    }

    #[test]
    fn test_keep_first_reports_teardown_failure() {
        let err = keep_first(Ok(()), Err(reset())).unwrap_err();
        assert!(matches!(err, RelayError::Io(_)));
        assert!(keep_first(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_decoder_errors_are_codec_errors() {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "invalid gzip header");
        assert!(matches!(RelayError::from_decoder(err), RelayError::Codec(_)));

        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        assert!(matches!(RelayError::from_decoder(err), RelayError::Codec(_)));
    }

    #[test]
    fn test_transport_errors_stay_io_errors() {
        let err = io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer");
        assert!(matches!(RelayError::from_decoder(err), RelayError::Io(_)));
    }

    #[test]
    fn test_messages_name_the_address() {
        let err = RelayError::Connect {
            address: "127.0.0.1:1".to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        };
        assert_eq!(err.to_string(), "cannot connect to 127.0.0.1:1: connection refused");
    }
}
