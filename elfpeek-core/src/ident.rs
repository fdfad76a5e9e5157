use std::io::Read;

use goblin::elf::header::{
    EI_ABIVERSION, EI_CLASS, EI_DATA, EI_OSABI, EI_VERSION, ELFMAG, SELFMAG, SIZEOF_IDENT,
};

use crate::error::{ElfError, Result};

/// The 16-byte `e_ident` prefix of an ELF file.
///
/// Only the magic is checked on construction. The remaining bytes are kept
/// verbatim and interpreted when the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identification {
    bytes: [u8; SIZEOF_IDENT],
}

impl Identification {
    /// Validates the magic of an already-read identification block.
    pub fn from_bytes(bytes: [u8; SIZEOF_IDENT]) -> Result<Self> {
        if &bytes[..SELFMAG] != ELFMAG {
            let mut found = [0u8; SELFMAG];
            found.copy_from_slice(&bytes[..SELFMAG]);
            return Err(ElfError::BadMagic { found });
        }
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8; SIZEOF_IDENT] {
        &self.bytes
    }

    /// Word size selector, `EI_CLASS`.
    pub fn class(&self) -> u8 {
        self.bytes[EI_CLASS]
    }

    /// Byte order selector, `EI_DATA`.
    pub fn data_encoding(&self) -> u8 {
        self.bytes[EI_DATA]
    }

    pub fn version(&self) -> u8 {
        self.bytes[EI_VERSION]
    }

    pub fn os_abi(&self) -> u8 {
        self.bytes[EI_OSABI]
    }

    pub fn abi_version(&self) -> u8 {
        self.bytes[EI_ABIVERSION]
    }
}

/// Reads exactly [`SIZEOF_IDENT`] bytes from `reader` and checks the magic.
///
/// A stream that ends early yields [`ElfError::TruncatedInput`]; the magic is
/// only compared once the whole block is present.
pub fn read_identification<R: Read>(reader: &mut R) -> Result<Identification> {
    let mut buf = Vec::with_capacity(SIZEOF_IDENT);
    reader
        .by_ref()
        .take(SIZEOF_IDENT as u64)
        .read_to_end(&mut buf)?;

    let bytes: [u8; SIZEOF_IDENT] = buf
        .as_slice()
        .try_into()
        .map_err(|_| ElfError::TruncatedInput {
            got: buf.len(),
            expected: SIZEOF_IDENT,
        })?;

    let ident = Identification::from_bytes(bytes)?;
    log::debug!("Identification bytes: {:02X?}", ident.bytes());
    Ok(ident)
}
