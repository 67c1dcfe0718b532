use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single line that does not have the `<date> <time> <level> <message>` shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid log line format: {line}")]
    MalformedLine { line: String },
}

/// Conditions that stop a file from being loaded at all.
///
/// The loader never propagates these; they travel inside a
/// [`LoadReport`](crate::loader::LoadReport) next to an empty collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error: File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Error: Failed to read file '{}'.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read fault on a source that isn't a named file
    #[error("Error: Failed to read log input.")]
    Stream {
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error while reading file: {message}")]
    Unexpected { message: String },
}

impl LoadError {
    /// Sort an I/O failure into the loader's taxonomy.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            // Non-UTF-8 content surfaces as InvalidData from `lines()`
            io::ErrorKind::InvalidData => LoadError::Unexpected {
                message: err.to_string(),
            },
            _ => LoadError::Read { path, source: err },
        }
    }

    /// Same classification for a reader with no backing path.
    pub fn from_stream_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData => LoadError::Unexpected {
                message: err.to_string(),
            },
            _ => LoadError::Stream { source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            LoadError::from_io("a.log", not_found),
            LoadError::NotFound { .. }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            LoadError::from_io("a.log", denied),
            LoadError::Read { .. }
        ));

        let bad_utf8 = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = LoadError::from_io("a.log", bad_utf8);
        assert_eq!(
            err.to_string(),
            "Unexpected error while reading file: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_stream_errors_have_no_path() {
        let fault = io::Error::new(io::ErrorKind::Other, "device fault");
        let err = LoadError::from_stream_io(fault);
        assert!(matches!(err, LoadError::Stream { .. }));
        assert_eq!(err.to_string(), "Error: Failed to read log input.");

        let bad_utf8 = io::Error::new(io::ErrorKind::InvalidData, "bad bytes");
        assert!(matches!(
            LoadError::from_stream_io(bad_utf8),
            LoadError::Unexpected { .. }
        ));
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("missing.log"),
        };
        assert_eq!(err.to_string(), "Error: File 'missing.log' not found.");

        let err = LoadError::Read {
            path: PathBuf::from("locked.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error: Failed to read file 'locked.log'.");
    }
}
