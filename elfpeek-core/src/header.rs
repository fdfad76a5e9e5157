pub mod elf;

pub use elf::{Elf32Ehdr, Elf64Ehdr, FileHeader};

/// Accessors shared by both ELF header layouts.
///
/// Address-sized fields are widened to `u64` so callers never need to know
/// which layout they are looking at.
pub trait Header: std::fmt::Debug + Send + Sync {
    /// Returns the object file type, `e_type`.
    fn object_type(&self) -> u16;

    /// Returns the machine architecture identifier.
    fn machine(&self) -> u16;

    /// Returns the object file version, `e_version`.
    fn version(&self) -> u32;

    /// Returns the virtual address of the entry point.
    fn entry_point(&self) -> u64;

    fn program_header_offset(&self) -> u64;

    fn section_header_offset(&self) -> u64;

    /// Processor-specific flags.
    fn flags(&self) -> u32;

    fn header_size(&self) -> u16;

    fn program_header_entry_size(&self) -> u16;

    fn program_header_count(&self) -> u16;

    fn section_header_entry_size(&self) -> u16;

    fn section_header_count(&self) -> u16;

    fn section_name_index(&self) -> u16;

    /// Returns true if this is a 64-bit header.
    fn is_64(&self) -> bool;

    /// Returns a short human-readable name, e.g. "ELF32" or "ELF64".
    fn format_name(&self) -> &'static str;
}
