use std::fmt;
use std::io::Cursor;

use goblin::elf::header::{ELFCLASS32, ELFCLASS64};

use crate::error::{ElfError, Result};
use crate::header::elf::{ELF32_BODY_SIZE, ELF64_BODY_SIZE};
use crate::header::{FileHeader, Header};
use crate::ident::Identification;
use crate::labels;

/// Number of header body bytes that follow `e_ident` for `class`.
pub fn header_body_size(class: u8) -> Result<usize> {
    match class {
        ELFCLASS32 => Ok(ELF32_BODY_SIZE),
        ELFCLASS64 => Ok(ELF64_BODY_SIZE),
        other => Err(ElfError::UnsupportedClass(other)),
    }
}

/// Decodes the header body in `raw` using the layout selected by `class`.
///
/// `raw` must be exactly as long as that layout; nothing is decoded
/// otherwise. Multi-byte fields follow the byte order declared by the
/// identification block.
pub fn decode_header(ident: &Identification, class: u8, raw: &[u8]) -> Result<Report> {
    let expected = header_body_size(class)?;
    if raw.len() != expected {
        return Err(ElfError::TruncatedHeader {
            got: raw.len(),
            expected,
        });
    }

    let mut cur = Cursor::new(raw);
    let header = if class == ELFCLASS32 {
        FileHeader::read_elf32(&mut cur, ident.data_encoding())?
    } else {
        FileHeader::read_elf64(&mut cur, ident.data_encoding())?
    };
    log::debug!("Decoded header: {header:?}");

    Ok(Report {
        ident: *ident,
        class,
        header,
    })
}

/// A decoded identification block and file header, ready for display.
///
/// The [`fmt::Display`] impl produces the plain-text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    ident: Identification,
    class: u8,
    header: FileHeader,
}

impl Report {
    pub fn ident(&self) -> &Identification {
        &self.ident
    }

    pub fn class(&self) -> u8 {
        self.class
    }

    pub fn class_label(&self) -> Option<&'static str> {
        labels::class_label(self.class)
    }

    pub fn data_encoding(&self) -> u8 {
        self.ident.data_encoding()
    }

    pub fn data_encoding_label(&self) -> Option<&'static str> {
        labels::data_encoding_label(self.data_encoding())
    }

    pub fn ident_version(&self) -> u8 {
        self.ident.version()
    }

    pub fn ident_version_label(&self) -> &'static str {
        labels::version_label(self.ident_version())
    }

    pub fn os_abi(&self) -> u8 {
        self.ident.os_abi()
    }

    pub fn os_abi_label(&self) -> Option<&'static str> {
        labels::os_abi_label(self.os_abi())
    }

    pub fn object_type(&self) -> u16 {
        self.header().object_type()
    }

    pub fn object_type_label(&self) -> Option<&'static str> {
        labels::object_type_label(self.object_type())
    }

    pub fn machine(&self) -> u16 {
        self.header().machine()
    }

    pub fn machine_label(&self) -> &'static str {
        labels::machine_label(self.machine())
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.header
    }

    pub fn header(&self) -> &dyn Header {
        self.header.as_header()
    }
}

fn write_coded(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    code: u8,
    label: Option<&str>,
) -> fmt::Result {
    writeln!(f, "{name}: {code:02X}, {}", label.unwrap_or(""))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ident:")?;
        for b in self.ident.bytes() {
            write!(f, " {b:02X}")?;
        }
        writeln!(f)?;

        write_coded(f, "Class", self.class, self.class_label())?;
        write_coded(
            f,
            "Data encoding",
            self.data_encoding(),
            self.data_encoding_label(),
        )?;
        write_coded(
            f,
            "EI version",
            self.ident_version(),
            Some(self.ident_version_label()),
        )?;
        write_coded(f, "OSABI", self.os_abi(), self.os_abi_label())?;
        writeln!(f)?;

        writeln!(
            f,
            "Type: {:08X}, {}",
            self.object_type(),
            self.object_type_label().unwrap_or("")
        )?;
        writeln!(
            f,
            "Machine: {:08X}, {}",
            self.machine(),
            self.machine_label()
        )
    }
}
