use crate::header::Header;
use byteorder::{ByteOrder, ReadBytesExt, BE, LE};
use goblin::elf::header::{ELFDATA2MSB, SIZEOF_IDENT};
use std::io;

/// Size of the 32-bit header body that follows `e_ident`.
pub const ELF32_BODY_SIZE: usize = goblin::elf32::header::SIZEOF_EHDR - SIZEOF_IDENT;

/// Size of the 64-bit header body that follows `e_ident`.
pub const ELF64_BODY_SIZE: usize = goblin::elf64::header::SIZEOF_EHDR - SIZEOF_IDENT;

/// The `Elf32_Ehdr` fields that follow the identification block.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf32Ehdr {
    /// Object file type (e.g. relocatable, executable, shared, core).
    ///
    /// Common values:
    /// - `ET_NONE` (0): No file type
    /// - `ET_REL` (1): Relocatable file
    /// - `ET_EXEC` (2): Executable file
    /// - `ET_DYN` (3): Shared object
    /// - `ET_CORE` (4): Core dump
    pub e_type: u16,

    /// Target architecture (e.g. `EM_386` (3), `EM_MIPS` (8)).
    pub e_machine: u16,

    /// ELF version (usually set to `EV_CURRENT` = 1).
    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u32,

    /// File offset of the program header table.
    pub e_phoff: u32,

    /// File offset of the section header table.
    pub e_shoff: u32,

    /// Processor-specific flags.
    pub e_flags: u32,

    /// Size of the whole ELF header (usually `52` bytes).
    pub e_ehsize: u16,

    /// Size of one entry in the program header table.
    pub e_phentsize: u16,

    /// Number of entries in the program header table.
    pub e_phnum: u16,

    /// Size of one entry in the section header table.
    pub e_shentsize: u16,

    /// Number of entries in the section header table.
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

/// The `Elf64_Ehdr` fields that follow the identification block.
///
/// Identical to [`Elf32Ehdr`] except that the entry point and both table
/// offsets are 64 bits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Ehdr {
    /// Object file type (e.g. relocatable, executable, shared, core).
    ///
    /// Common values:
    /// - `ET_NONE` (0): No file type
    /// - `ET_REL` (1): Relocatable file
    /// - `ET_EXEC` (2): Executable file
    /// - `ET_DYN` (3): Shared object
    /// - `ET_CORE` (4): Core dump
    pub e_type: u16,

    /// Target architecture (e.g. `EM_386` (3), `EM_MIPS` (8)).
    pub e_machine: u16,

    /// ELF version (usually set to `EV_CURRENT` = 1).
    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u64,

    /// File offset of the program header table.
    pub e_phoff: u64,

    /// File offset of the section header table.
    pub e_shoff: u64,

    /// Processor-specific flags.
    pub e_flags: u32,

    /// Size of the whole ELF header (usually `64` bytes).
    pub e_ehsize: u16,

    /// Size of one entry in the program header table.
    pub e_phentsize: u16,

    /// Number of entries in the program header table.
    pub e_phnum: u16,

    /// Size of one entry in the section header table.
    pub e_shentsize: u16,

    /// Number of entries in the section header table.
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

impl Elf32Ehdr {
    pub fn from_reader<E: ByteOrder, R: io::Read>(cur: &mut R) -> io::Result<Elf32Ehdr> {
        Ok(Elf32Ehdr {
            e_type: cur.read_u16::<E>()?,
            e_machine: cur.read_u16::<E>()?,
            e_version: cur.read_u32::<E>()?,
            e_entry: cur.read_u32::<E>()?,
            e_phoff: cur.read_u32::<E>()?,
            e_shoff: cur.read_u32::<E>()?,
            e_flags: cur.read_u32::<E>()?,
            e_ehsize: cur.read_u16::<E>()?,
            e_phentsize: cur.read_u16::<E>()?,
            e_phnum: cur.read_u16::<E>()?,
            e_shentsize: cur.read_u16::<E>()?,
            e_shnum: cur.read_u16::<E>()?,
            e_shstrndx: cur.read_u16::<E>()?,
        })
    }
}

impl Elf64Ehdr {
    pub fn from_reader<E: ByteOrder, R: io::Read>(cur: &mut R) -> io::Result<Elf64Ehdr> {
        Ok(Elf64Ehdr {
            e_type: cur.read_u16::<E>()?,
            e_machine: cur.read_u16::<E>()?,
            e_version: cur.read_u32::<E>()?,
            e_entry: cur.read_u64::<E>()?,
            e_phoff: cur.read_u64::<E>()?,
            e_shoff: cur.read_u64::<E>()?,
            e_flags: cur.read_u32::<E>()?,
            e_ehsize: cur.read_u16::<E>()?,
            e_phentsize: cur.read_u16::<E>()?,
            e_phnum: cur.read_u16::<E>()?,
            e_shentsize: cur.read_u16::<E>()?,
            e_shnum: cur.read_u16::<E>()?,
            e_shstrndx: cur.read_u16::<E>()?,
        })
    }
}

macro_rules! impl_header {
    ($ty:ty, $is_64:expr, $name:expr) => {
        impl Header for $ty {
            fn object_type(&self) -> u16 {
                self.e_type
            }

            fn machine(&self) -> u16 {
                self.e_machine
            }

            fn version(&self) -> u32 {
                self.e_version
            }

            fn entry_point(&self) -> u64 {
                self.e_entry as u64
            }

            fn program_header_offset(&self) -> u64 {
                self.e_phoff as u64
            }

            fn section_header_offset(&self) -> u64 {
                self.e_shoff as u64
            }

            fn flags(&self) -> u32 {
                self.e_flags
            }

            fn header_size(&self) -> u16 {
                self.e_ehsize
            }

            fn program_header_entry_size(&self) -> u16 {
                self.e_phentsize
            }

            fn program_header_count(&self) -> u16 {
                self.e_phnum
            }

            fn section_header_entry_size(&self) -> u16 {
                self.e_shentsize
            }

            fn section_header_count(&self) -> u16 {
                self.e_shnum
            }

            fn section_name_index(&self) -> u16 {
                self.e_shstrndx
            }

            fn is_64(&self) -> bool {
                $is_64
            }

            fn format_name(&self) -> &'static str {
                $name
            }
        }
    };
}

impl_header!(Elf32Ehdr, false, "ELF32");
impl_header!(Elf64Ehdr, true, "ELF64");

/// A decoded header body. Exactly one layout is ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileHeader {
    Elf32(Elf32Ehdr),
    Elf64(Elf64Ehdr),
}

impl FileHeader {
    /// Decodes a 32-bit body. `data_encoding` is the `EI_DATA` byte:
    /// big-endian when it says so, little-endian otherwise.
    pub fn read_elf32<R: io::Read>(cur: &mut R, data_encoding: u8) -> io::Result<Self> {
        let hdr = if data_encoding == ELFDATA2MSB {
            Elf32Ehdr::from_reader::<BE, _>(cur)?
        } else {
            Elf32Ehdr::from_reader::<LE, _>(cur)?
        };
        Ok(FileHeader::Elf32(hdr))
    }

    /// Decodes a 64-bit body, see [`FileHeader::read_elf32`].
    pub fn read_elf64<R: io::Read>(cur: &mut R, data_encoding: u8) -> io::Result<Self> {
        let hdr = if data_encoding == ELFDATA2MSB {
            Elf64Ehdr::from_reader::<BE, _>(cur)?
        } else {
            Elf64Ehdr::from_reader::<LE, _>(cur)?
        };
        Ok(FileHeader::Elf64(hdr))
    }

    pub fn as_header(&self) -> &dyn Header {
        match self {
            FileHeader::Elf32(hdr) => hdr,
            FileHeader::Elf64(hdr) => hdr,
        }
    }
}
