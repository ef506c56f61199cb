use crate::error::RelayError;
use local_ip_address::local_ip;
use std::io;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use tracing::info;

// An address written as ":port" listens on every interface.

pub fn bind_address(address: &str) -> String
{ if address.starts_with(':')
  { return format!("0.0.0.0{address}"); }

  return address.to_string();
}

// An address written as ":port" dials this device.

pub fn dial_address(address: &str) -> String
{ if address.starts_with(':')
  { return format!("127.0.0.1{address}"); }

  return address.to_string();
}

// Listen on the given address and accept a single connection.
// The listener is closed as soon as the connection is accepted.

pub fn listen_on(address: &str) -> Result<(TcpStream, SocketAddr), RelayError>
{ let bind_error = |source: io::Error| RelayError::Bind { address: address.to_string(), source };

  let listener = TcpListener::bind(bind_address(address)).map_err(bind_error)?;
  let local = listener.local_addr().map_err(bind_error)?;

  info!("Listening on {}", local);

  if local.ip().is_unspecified()
  { if let Ok(ip) = local_ip()
    { info!("Reachable at {}", SocketAddr::new(ip, local.port())); }
  }

  let (stream, peer) = listener
    .accept()
    .map_err(|source| RelayError::Accept { address: address.to_string(), source })?;

  info!("Accepted connection from {}", peer);

  return Ok((stream, peer));
}

// Open a TCP connection with the device at the given address.

pub fn connect_to(address: &str) -> Result<TcpStream, RelayError>
{ let stream = TcpStream::connect(dial_address(address))
    .map_err(|source| RelayError::Connect { address: address.to_string(), source })?;

  if let Ok(peer) = stream.peer_addr()
  { info!("Connected to {}", peer); }

  return Ok(stream);
}

// Close both directions of the connection. A peer that already went away
// after a complete transfer is not a failure.

pub fn close(stream: TcpStream) -> io::Result<()>
{ return match stream.shutdown(Shutdown::Both)
  { Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
    other => other,
  };
}
