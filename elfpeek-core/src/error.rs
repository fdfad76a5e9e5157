use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElfError {
    #[error("failed to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fewer than 16 identification bytes were available.
    #[error("truncated identification block: got {got} of {expected} bytes")]
    TruncatedInput { got: usize, expected: usize },

    #[error("supplied file is NOT an elf file (wrong magic bytes {found:02X?})")]
    BadMagic { found: [u8; 4] },

    /// The header body was not exactly the size of the layout for its class.
    #[error("truncated elf header: got {got} of {expected} bytes")]
    TruncatedHeader { got: usize, expected: usize },

    #[error("invalid elf file: class {0:#04x} is invalid")]
    UnsupportedClass(u8),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ElfError>;
