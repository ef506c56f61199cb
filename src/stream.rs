use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

// Read end of a connection, optionally gunzipped on the way in.
// A bad gzip header only shows up on the first read.

pub enum Inbound<R: Read>
{ Raw(R),
  Gzip(MultiGzDecoder<R>),
}

impl<R: Read> Inbound<R>
{ pub fn new(reader: R, gzip: bool) -> Inbound<R>
  { if gzip
    { return Inbound::Gzip(MultiGzDecoder::new(reader)); }

    return Inbound::Raw(reader);
  }

  pub fn is_compressed(&self) -> bool
  { return matches!(self, Inbound::Gzip(_));
  }

  // Release the decoder and hand back the connection.

  pub fn into_inner(self) -> R
  { return match self
    { Inbound::Raw(reader) => reader,
      Inbound::Gzip(decoder) => decoder.into_inner(),
    };
  }
}

impl<R: Read> Read for Inbound<R>
{ fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>
  { return match self
    { Inbound::Raw(reader) => reader.read(buf),
      Inbound::Gzip(decoder) => decoder.read(buf),
    };
  }
}

// Write end of a connection, optionally gzipped on the way out.
// The gzip variant must be finished or the peer sees a truncated stream.

pub enum Outbound<W: Write>
{ Raw(W),
  Gzip(GzEncoder<W>),
}

impl<W: Write> Outbound<W>
{ pub fn new(writer: W, gzip: bool) -> Outbound<W>
  { if gzip
    { return Outbound::Gzip(GzEncoder::new(writer, Compression::default())); }

    return Outbound::Raw(writer);
  }

  pub fn is_compressed(&self) -> bool
  { return matches!(self, Outbound::Gzip(_));
  }

  // Emit any buffered blocks and the gzip trailer, then hand back the connection.

  pub fn finish(self) -> io::Result<W>
  { return match self
    { Outbound::Raw(mut writer) =>
      { writer.flush()?;
        Ok(writer)
      },
      Outbound::Gzip(encoder) => encoder.finish(),
    };
  }
}

impl<W: Write> Write for Outbound<W>
{ fn write(&mut self, buf: &[u8]) -> io::Result<usize>
  { return match self
    { Outbound::Raw(writer) => writer.write(buf),
      Outbound::Gzip(encoder) => encoder.write(buf),
    };
  }

  fn flush(&mut self) -> io::Result<()>
  { return match self
    { Outbound::Raw(writer) => writer.flush(),
      Outbound::Gzip(encoder) => encoder.flush(),
    };
  }
}
