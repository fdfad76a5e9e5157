use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use elfpeek_core::{Binary, Header, Report};
use serde::Serialize;
use std::io::{self, Write};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Print the identification block and file header of an ELF binary
#[derive(Parser)]
#[command(
    name = "elfpeek",
    about = "Inspect ELF file headers (class, encoding, OS/ABI, type, machine)",
    version,
    author
)]
struct Cli {
    /// Path to binary file
    #[arg(required = true)]
    path: std::path::PathBuf,

    /// Also list the remaining header fields
    #[arg(long)]
    all: bool,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "all")]
    json: bool,
}

#[derive(Serialize)]
struct Coded<T> {
    code: T,
    label: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    ident: [u8; 16],
    class: Coded<u8>,
    data_encoding: Coded<u8>,
    version: Coded<u8>,
    os_abi: Coded<u8>,
    abi_version: u8,
    object_type: Coded<u16>,
    machine: Coded<u16>,
    e_version: u32,
    entry: u64,
    phoff: u64,
    shoff: u64,
    flags: u32,
    ehsize: u16,
    phentsize: u16,
    phnum: u16,
    shentsize: u16,
    shnum: u16,
    shstrndx: u16,
}

impl<'a> JsonReport<'a> {
    fn new(path: &'a str, r: &Report) -> Self {
        let h = r.header();
        Self {
            path,
            ident: *r.ident().bytes(),
            class: Coded {
                code: r.class(),
                label: r.class_label(),
            },
            data_encoding: Coded {
                code: r.data_encoding(),
                label: r.data_encoding_label(),
            },
            version: Coded {
                code: r.ident_version(),
                label: Some(r.ident_version_label()),
            },
            os_abi: Coded {
                code: r.os_abi(),
                label: r.os_abi_label(),
            },
            abi_version: r.ident().abi_version(),
            object_type: Coded {
                code: r.object_type(),
                label: r.object_type_label(),
            },
            machine: Coded {
                code: r.machine(),
                label: Some(r.machine_label()),
            },
            e_version: h.version(),
            entry: h.entry_point(),
            phoff: h.program_header_offset(),
            shoff: h.section_header_offset(),
            flags: h.flags(),
            ehsize: h.header_size(),
            phentsize: h.program_header_entry_size(),
            phnum: h.program_header_count(),
            shentsize: h.section_header_entry_size(),
            shnum: h.section_header_count(),
            shstrndx: h.section_name_index(),
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn field_rows(r: &Report) -> Vec<FieldRow> {
    let h = r.header();
    let row = |field: &'static str, value: String| FieldRow { field, value };
    vec![
        row("Format", h.format_name().to_string()),
        row("ABI version", r.ident().abi_version().to_string()),
        row("Version", format!("{:#x}", h.version())),
        row("Entry point", format!("{:#x}", h.entry_point())),
        row("Program headers offset", h.program_header_offset().to_string()),
        row("Section headers offset", h.section_header_offset().to_string()),
        row("Flags", format!("{:#x}", h.flags())),
        row("Header size", h.header_size().to_string()),
        row("Program header size", h.program_header_entry_size().to_string()),
        row("Program header count", h.program_header_count().to_string()),
        row("Section header size", h.section_header_entry_size().to_string()),
        row("Section header count", h.section_header_count().to_string()),
        row("Section name index", h.section_name_index().to_string()),
    ]
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let bin = Binary::open(&cli.path)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&JsonReport::new(&bin.path, &bin.report))?;
        writeln!(out, "{json}")?;
        out.flush()?;
        return Ok(());
    }

    write!(out, "{}", bin.report)?;
    if cli.all {
        let mut table = Table::new(field_rows(&bin.report));
        table.with(Style::psql());
        writeln!(out)?;
        writeln!(out, "{table}")?;
    }
    out.flush()?;

    Ok(())
}

/// A reader that went away (`elfpeek f | head -0`) is not a failure.
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("Fatal error: not enough arguments supplied");
            std::process::exit(1);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    if let Err(e) = run(&cli, &mut out) {
        if is_broken_pipe(&e) {
            log::debug!("stdout closed early: {e:#}");
            return;
        }
        log::debug!("{e:?}");
        eprintln!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}
