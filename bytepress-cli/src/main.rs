//! bytepress CLI - whole-file compression batch driver.
//!
//! Compresses a file, decompresses it, or verifies that files survive a
//! compression round trip, reporting sizes, ratios, and wall-clock timing.

mod utils;

use bytepress_core::{Codec, io};
use bytepress_lzw::{LzwCodec, LzwConfig};
use bytepress_rle::RleCodec;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use utils::{create_progress_bar, ratio_percent};

#[derive(Parser)]
#[command(name = "bytepress")]
#[command(author, version, about = "Whole-file RLE and LZW compression")]
#[command(long_about = "
bytepress compresses and decompresses whole files with two codecs:

  rle  - run-length encoding with a doubled-byte escape and decimal lengths
  lzw  - adaptive dictionary compression with fixed-width codes

The LZW code width (default 16) is not recorded in the output; decompress
with the same --width the file was compressed with.

Examples:
  bytepress compress input.txt -o input.lzw
  bytepress compress input.txt -o input.rle --codec rle
  bytepress decompress input.lzw -o restored.txt
  bytepress compress input.txt -o input.lzw --width 12
  bytepress verify file1.txt file2.txt --codec lzw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "lzw")]
        codec: CodecKind,

        /// Bits per LZW code (9-32; ignored by rle)
        #[arg(short, long, default_value_t = LzwConfig::DEFAULT_WIDTH)]
        width: u32,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "lzw")]
        codec: CodecKind,

        /// Bits per LZW code; must match the width used to compress
        #[arg(short, long, default_value_t = LzwConfig::DEFAULT_WIDTH)]
        width: u32,
    },

    /// Verify that files survive a compression round trip in memory
    #[command(alias = "v")]
    Verify {
        /// Files to check
        files: Vec<PathBuf>,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "lzw")]
        codec: CodecKind,

        /// Bits per LZW code (9-32; ignored by rle)
        #[arg(short, long, default_value_t = LzwConfig::DEFAULT_WIDTH)]
        width: u32,

        /// Show per-file timing and ratio
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },
}

/// Selectable codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CodecKind {
    /// Run-length encoding with a doubled-byte escape
    Rle,
    /// Adaptive dictionary (LZW) with fixed-width codes
    Lzw,
}

fn build_codec(
    kind: CodecKind,
    width: u32,
) -> Result<Box<dyn Codec>, Box<dyn std::error::Error>> {
    Ok(match kind {
        CodecKind::Rle => Box::new(RleCodec),
        CodecKind::Lzw => Box::new(LzwCodec::new(LzwConfig::new(width)?)),
    })
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            width,
        } => cmd_compress(&input, &output, codec, width),
        Commands::Decompress {
            input,
            output,
            codec,
            width,
        } => cmd_decompress(&input, &output, codec, width),
        Commands::Verify {
            files,
            codec,
            width,
            verbose,
            progress,
        } => cmd_verify(&files, codec, width, verbose, progress),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    output: &Path,
    kind: CodecKind,
    width: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = build_codec(kind, width)?;
    let data = io::read_all(input)?;

    let start = Instant::now();
    let packed = codec.compress(&data)?;
    let elapsed = start.elapsed();

    io::write_all(output, &packed)?;

    println!(
        "Compressed {} -> {} ({})",
        input.display(),
        output.display(),
        codec.name()
    );
    println!(
        "  {} -> {} bytes ({} of original)",
        data.len(),
        packed.len(),
        ratio_percent(packed.len(), data.len())
    );
    println!("  Took {} ms", elapsed.as_millis());

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: &Path,
    kind: CodecKind,
    width: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = build_codec(kind, width)?;
    let data = io::read_all(input)?;

    let start = Instant::now();
    let restored = codec.decompress(&data)?;
    let elapsed = start.elapsed();

    io::write_all(output, &restored)?;

    println!(
        "Decompressed {} -> {} ({})",
        input.display(),
        output.display(),
        codec.name()
    );
    println!("  {} -> {} bytes", data.len(), restored.len());
    println!("  Took {} ms", elapsed.as_millis());

    Ok(())
}

/// Timing and size figures from one in-memory round trip.
struct VerifyStats {
    original: usize,
    packed: usize,
    encode_time: Duration,
    decode_time: Duration,
}

fn verify_file(codec: &dyn Codec, path: &Path) -> Result<VerifyStats, Box<dyn std::error::Error>> {
    let original = io::read_all(path)?;

    let start = Instant::now();
    let packed = codec.compress(&original)?;
    let encode_time = start.elapsed();

    let start = Instant::now();
    let restored = codec.decompress(&packed)?;
    let decode_time = start.elapsed();

    if restored != original {
        return Err(format!(
            "round trip mismatch: {} bytes in, {} bytes out",
            original.len(),
            restored.len()
        )
        .into());
    }

    Ok(VerifyStats {
        original: original.len(),
        packed: packed.len(),
        encode_time,
        decode_time,
    })
}

fn cmd_verify(
    files: &[PathBuf],
    kind: CodecKind,
    width: u32,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("No files specified".into());
    }

    let codec = build_codec(kind, width)?;

    println!("Verifying {} file(s) with {}", files.len(), codec.name());

    let mut ok_count = 0usize;
    let mut error_count = 0usize;
    let mut errors: Vec<(String, String)> = Vec::new();

    let pb = create_progress_bar(files.len() as u64, progress);
    pb.set_message("files");

    for path in files {
        match verify_file(codec.as_ref(), path) {
            Ok(stats) => {
                ok_count += 1;
                if verbose {
                    pb.println(format!(
                        "  OK: {} ({} -> {} bytes, {}, encode {} ms, decode {} ms)",
                        path.display(),
                        stats.original,
                        stats.packed,
                        ratio_percent(stats.packed, stats.original),
                        stats.encode_time.as_millis(),
                        stats.decode_time.as_millis()
                    ));
                }
            }
            Err(e) => {
                error_count += 1;
                errors.push((path.display().to_string(), e.to_string()));
                if verbose {
                    pb.println(format!("  FAILED: {} - {}", path.display(), e));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    println!();
    println!("Verify results:");
    println!("  Total files: {}", files.len());
    println!("  OK: {}", ok_count);
    println!("  Failed: {}", error_count);

    if !errors.is_empty() && !verbose {
        println!();
        println!("Errors:");
        for (name, err) in &errors {
            println!("  {}: {}", name, err);
        }
    }

    if error_count > 0 {
        std::process::exit(2);
    }

    println!();
    println!("All files OK");
    Ok(())
}
