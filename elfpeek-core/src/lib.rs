pub mod binary;
pub mod error;
pub mod header;
pub mod ident;
pub mod labels;
pub mod report;

pub use binary::*;
pub use error::ElfError;
pub use header::{FileHeader, Header};
pub use ident::{read_identification, Identification};
pub use report::{decode_header, header_body_size, Report};
