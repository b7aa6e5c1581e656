use clap::{Parser, Subcommand};
use cryptdatum::{decode_header, has_header, has_valid_header, DatumFlags};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cryptdatum", version = "1.0.0", about = "The Cryptdatum (CDT) header codec CLI")]
struct Cli {
    /// Write error diagnostics to standard error
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a file begins with a recognizable Cryptdatum header
    FileHasHeader { path: PathBuf },
    /// Check whether a file begins with a fully valid Cryptdatum header
    FileHasValidHeader { path: PathBuf },
    /// Decode and pretty-print a file's Cryptdatum header
    FileInfo { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let result = match &cli.command {
        Commands::FileHasHeader { path } => cmd_file_has_header(path),
        Commands::FileHasValidHeader { path } => cmd_file_has_valid_header(path),
        Commands::FileInfo { path } => cmd_file_info(path),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // IO failure opening the file always prints, regardless of -v.
            eprintln!("cryptdatum: {e}");
            ExitCode::FAILURE
        }
    }
}

// ── Subcommands ──────────────────────────────────────────────────────────────

fn cmd_file_has_header(path: &PathBuf) -> Result<bool, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let ok = has_header(&bytes);
    log::info!("file-has-header {}: {ok}", path.display());
    println!("{ok}");
    Ok(ok)
}

fn cmd_file_has_valid_header(path: &PathBuf) -> Result<bool, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let ok = has_valid_header(&bytes);
    log::info!("file-has-valid-header {}: {ok}", path.display());
    println!("{ok}");
    Ok(ok)
}

fn cmd_file_info(path: &PathBuf) -> Result<bool, Box<dyn std::error::Error>> {
    let mut f = File::open(path)?;
    let header = decode_header(&mut f)?;

    let timestamp = chrono::DateTime::from_timestamp(
        (header.timestamp / 1_000_000_000) as i64,
        (header.timestamp % 1_000_000_000) as u32,
    );

    println!("── Cryptdatum header ────────────────────────────────────");
    println!("  Path             {}", path.display());
    println!("  Version          {}", header.version);
    println!("  Flags            0x{:016x}", header.flags.bits());
    print_flag_names(header.flags);
    match timestamp {
        Some(ts) => println!("  Timestamp        {} ({} ns)", ts.to_rfc3339(), header.timestamp),
        None => println!("  Timestamp        {} ns (out of range)", header.timestamp),
    }
    println!("  OPC              {}", header.opc);
    println!("  Checksum set     {}", header.has_checksum());
    println!("  Size             {} B", header.size);
    println!("  Compression alg  {}", header.compression_alg);
    println!("  Encryption alg   {}", header.encryption_alg);
    println!("  Signature type   {}", header.signature_type);
    println!("  Signature size   {} B", header.signature_size);
    println!("  File ext         {:?}", printable_ascii(&header.file_ext));
    println!("  Custom set       {}", header.has_custom());
    println!("  Flagged unreliable  {}", header.is_flagged_unreliable());

    Ok(true)
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn print_flag_names(flags: DatumFlags) {
    const NAMED: &[(DatumFlags, &str)] = &[
        (DatumFlags::INVALID, "INVALID"),
        (DatumFlags::DRAFT, "DRAFT"),
        (DatumFlags::EMPTY, "EMPTY"),
        (DatumFlags::CHECKSUM, "CHECKSUM"),
        (DatumFlags::OPC, "OPC"),
        (DatumFlags::COMPRESSED, "COMPRESSED"),
        (DatumFlags::ENCRYPTED, "ENCRYPTED"),
        (DatumFlags::EXTRACTABLE, "EXTRACTABLE"),
        (DatumFlags::SIGNED, "SIGNED"),
        (DatumFlags::STREAMABLE, "STREAMABLE"),
        (DatumFlags::CUSTOM, "CUSTOM"),
        (DatumFlags::COMPROMISED, "COMPROMISED"),
    ];
    let names: Vec<&str> = NAMED
        .iter()
        .filter(|(bit, _)| flags.contains(*bit))
        .map(|(_, name)| *name)
        .collect();
    println!("                   [{}]", names.join(", "));
}

fn printable_ascii(bytes: &[u8; 8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}
