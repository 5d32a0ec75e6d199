//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsift::cli::Args;
use chatsift::core::ChatStats;
use chatsift::format::write_to_format;
use chatsift::parser::read_transcript;
use chatsift::{ChatsiftError, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let total_start = Instant::now();

    let parser = TranscriptParser::try_with_config(args.parser_config())?;
    let filter_config = args.filter_config()?;
    let output_config = args.output_config()?;
    let output_path = args.output_path();

    println!("📦 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {}", args.format);
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {from}");
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let text = read_transcript(&args.input)?;
    let (table, report) = parser.parse_strict_with_report(&text)?;
    println!(
        "   Found {} entries, kept {} records ({:.2}s)",
        report.chunks,
        report.records,
        parse_start.elapsed().as_secs_f64()
    );

    let table = if filter_config.is_active() {
        println!("🔍 Filtering records...");
        let filtered = table.filter(&filter_config);
        println!("   {} records after filtering", filtered.len());
        filtered
    } else {
        table
    };

    if table.is_empty() {
        println!("⚠️  No records to write; the output will only carry the column layout.");
    }

    println!("💾 Writing {}...", args.format);
    let write_start = Instant::now();
    write_to_format(table.records(), &output_path, args.format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {output_path}");

    let stats = ChatStats::from_records(table.records());
    println!();
    println!("📊 Summary:");
    println!("   Entries:   {}", report.chunks);
    println!("   Dropped:   {}", report.dropped());
    if report.dropped() > 0 {
        println!(
            "     invalid date {}, invalid time {}, empty {}, placeholder {}, system {}",
            report.invalid_date, report.invalid_time, report.empty, report.placeholder, report.system
        );
    }
    println!("   Records:   {}", table.len());
    println!("   Senders:   {}", table.senders().len());
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
