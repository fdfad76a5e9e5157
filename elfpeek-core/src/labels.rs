//! Code to label tables for the coded header fields.
//!
//! Lookups return `None` for codes without a textual meaning; the renderer
//! then prints the numeric code alone.

use goblin::elf::header::{
    ELFCLASS32, ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB, ELFDATANONE, ET_CORE, ET_DYN, ET_EXEC,
    ET_NONE, ET_REL, EV_CURRENT,
};

pub const CLASS_LABELS: &[(u8, &str)] = &[(ELFCLASS32, "32-bit"), (ELFCLASS64, "64-bit")];

pub const DATA_ENCODING_LABELS: &[(u8, &str)] = &[
    (ELFDATA2LSB, "Two's complement, little-endian"),
    (ELFDATA2MSB, "Two's complement, big-endian"),
    (ELFDATANONE, "Unknown data format"),
];

pub const OS_ABI_LABELS: &[(u8, &str)] = &[
    (0x00, "No extension or unspecified"),
    (0x01, "HP-UX"),
    (0x02, "NetBSD"),
    (0x03, "Linux"),
    (0x06, "Sun Solaris"),
    (0x07, "AIX"),
    (0x08, "IRIX"),
    (0x09, "FreeBSD"),
    (0x0a, "TRU64 UNIX"),
    (0x0b, "Novell Modesto"),
    (0x0c, "Open BSD"),
    (0x0d, "Open VMS"),
    (0x61, "ARM"),
    (0xff, "Standalone (embedded) application"),
];

pub const OBJECT_TYPE_LABELS: &[(u8, &str)] = &[
    (ET_NONE as u8, "Unknown file"),
    (ET_REL as u8, "Relocatable file"),
    (ET_EXEC as u8, "Executable file"),
    (ET_DYN as u8, "Shared object"),
    (ET_CORE as u8, "Core file"),
];

pub const MACHINE_LABELS: &[(u16, &str)] = &[
    (0, "Unknown machine"),
    (1, "AT&T WE 32100"),
    (2, "Sun Microsystems SPARC"),
    (3, "Intel 80386"),
    (4, "Motorola 68000"),
    (5, "Motorola 88000"),
    (6, "Intel 80860"),
    (7, "Intel i860"),
    (8, "MIPS RS3000 Big-Endian"),
    (9, "IBM System/370 Processor"),
    (10, "MIPS RS3000 Little-Endian"),
    (11, "RS6000"),
];

/// Label for machines missing from [`MACHINE_LABELS`].
pub const UNKNOWN_MACHINE: &str = "Unknown machine*";

fn lookup<T: PartialEq + Copy>(table: &[(T, &'static str)], code: T) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, label)| *label)
}

pub fn class_label(class: u8) -> Option<&'static str> {
    lookup(CLASS_LABELS, class)
}

pub fn data_encoding_label(encoding: u8) -> Option<&'static str> {
    lookup(DATA_ENCODING_LABELS, encoding)
}

/// `EI_VERSION` has only one valid value, so every code gets a label.
pub fn version_label(version: u8) -> &'static str {
    if version == EV_CURRENT {
        "Current"
    } else {
        "Invalid"
    }
}

pub fn os_abi_label(os_abi: u8) -> Option<&'static str> {
    lookup(OS_ABI_LABELS, os_abi)
}

/// Only the low byte of `e_type` selects the label, so `0x0102` reads as an
/// executable. Output from earlier releases depends on this.
///
/// Machine labels are the one place output differs from those releases:
/// code 0 used to print the misspelled `Unknowe machine` and now prints
/// `Unknown machine`. See [`machine_label`].
pub fn object_type_label(e_type: u16) -> Option<&'static str> {
    lookup(OBJECT_TYPE_LABELS, e_type as u8)
}

/// Code 0 renders as `Unknown machine` (earlier releases printed
/// `Unknowe machine`); codes missing from the table get [`UNKNOWN_MACHINE`].
pub fn machine_label(machine: u16) -> &'static str {
    lookup(MACHINE_LABELS, machine).unwrap_or(UNKNOWN_MACHINE)
}
