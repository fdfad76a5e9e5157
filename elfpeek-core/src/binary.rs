use crate::error::{ElfError, Result};
use crate::ident::read_identification;
use crate::report::{decode_header, header_body_size, Report};
use std::io::Read;
use std::path::Path;

/// An ELF file whose identification block and header have been decoded.
#[derive(Debug)]
pub struct Binary {
    pub path: String,
    pub report: Report,
}

impl Binary {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = std::fs::File::open(&path).map_err(|source| ElfError::FileOpen {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let report = Self::read_report(&mut file).map_err(|e| match e {
            ElfError::Io(source) => ElfError::Read {
                path: path.as_ref().to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!(
            "Decoded {} header from {}",
            report.header().format_name(),
            path.as_ref().display()
        );

        Ok(Self {
            path: path.as_ref().display().to_string(),
            report,
        })
    }

    /// Reads the identification block, then exactly one header body, from
    /// `reader`. Anything after the header is left unread.
    pub fn read_report<R: Read>(reader: &mut R) -> Result<Report> {
        let ident = read_identification(reader)?;
        let class = ident.class();
        let size = header_body_size(class)?;

        let mut raw = Vec::with_capacity(size);
        reader.by_ref().take(size as u64).read_to_end(&mut raw)?;
        if raw.len() < size {
            log::warn!("Header body is {} bytes, expected {}", raw.len(), size);
        }

        decode_header(&ident, class, &raw)
    }
}
