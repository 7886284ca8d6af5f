use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::PathBuf;

use crate::config::Target;
use crate::errors::{Error, Result};

/// Destination a rendered conversation is written to
pub enum Sink {
    Stdout(Stdout),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Sink {
    /// Resolves the target into an open writer
    ///
    /// A file target must not exist yet. The existence check and the creation
    /// are two separate steps, so a concurrent writer can slip in between.
    pub fn open(target: &Target) -> Result<Self> {
        match target {
            Target::Stdout => Ok(Sink::Stdout(io::stdout())),
            Target::File(path) => {
                if path.exists() {
                    return Err(Error::FileExists(path.clone()));
                }
                let file = File::create(path).map_err(|source| Error::FileCreate {
                    path: path.clone(),
                    source,
                })?;
                Ok(Sink::File {
                    path: path.clone(),
                    writer: BufWriter::new(file),
                })
            }
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Sink::File { .. })
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(stdout) => stdout.write(buf),
            Sink::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(stdout) => stdout.flush(),
            Sink::File { writer, .. } => writer.flush(),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout(_) => write!(f, "stdout"),
            Sink::File { path, .. } => write!(f, "file {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = Sink::open(&Target::File(path.clone())).unwrap();
        assert!(sink.is_file());
        assert!(path.exists());

        sink.write_all(b"hello").unwrap();
        sink.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(sink.to_string(), format!("file {}", path.display()));
    }

    #[test]
    fn test_open_rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "keep me").unwrap();

        assert!(matches!(
            Sink::open(&Target::File(path.clone())),
            Err(Error::FileExists(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_open_rejects_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Sink::open(&Target::File(dir.path().to_path_buf())),
            Err(Error::FileExists(_))
        ));
    }

    #[test]
    fn test_stdout_display() {
        assert_eq!(Sink::open(&Target::Stdout).unwrap().to_string(), "stdout");
    }
}
