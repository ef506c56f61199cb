use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read, Write};

pub const COPY_BUFFER_SIZE: usize = 32 * 1024;

#[derive(Debug)]
pub enum CopyFailure
{ Read(io::Error),
  Write(io::Error),
}

// Outcome of a copy. The byte count is kept even when the copy failed,
// so a partial transfer can still be reported.

#[derive(Debug)]
pub struct Transfer
{ pub bytes: u64,
  pub result: Result<(), CopyFailure>,
}

// Move bytes from source to sink until the source reports end of stream.
// Every byte the sink accepts is counted, including those accepted before
// a write failure.

pub fn copy<R: Read, W: Write>(source: &mut R, sink: &mut W, progress: &ProgressBar) -> Transfer
{ let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
  let mut bytes: u64 = 0;

  loop
  { let n = match source.read(&mut buffer)
    { Ok(0) => break,
      Ok(n) => n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Transfer { bytes, result: Err(CopyFailure::Read(e)) },
    };

    let mut written = 0;
    while written < n
    { match sink.write(&buffer[written..n])
      { Ok(0) =>
        { let e = io::Error::new(io::ErrorKind::WriteZero, "sink accepted no bytes");
          return Transfer { bytes, result: Err(CopyFailure::Write(e)) };
        },
        Ok(k) =>
        { written += k;
          bytes += k as u64;
          progress.inc(k as u64);
        },
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Transfer { bytes, result: Err(CopyFailure::Write(e)) },
      }
    }
  }

  return Transfer { bytes, result: Ok(()) };
}

// Spinner counting transferred bytes on stderr; hidden unless verbose.

pub fn progress_bar(verbose: bool, verb: &str) -> ProgressBar
{ if !verbose
  { return ProgressBar::hidden(); }

  let progress_bar = ProgressBar::new_spinner();
  if let Ok(style) = ProgressStyle::with_template(&format!("{verb}: {{bytes}} at {{binary_bytes_per_sec}}"))
  { progress_bar.set_style(style); }

  return progress_bar;
}
