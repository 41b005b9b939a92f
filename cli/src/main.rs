mod config;

use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use renderer::DocumentOptions;
use songbook::{Songbook, Warning, extract_songs};

const SUBCOMMANDS: &[&str] = &["build", "check", "help"];

#[derive(Parser)]
#[command(name = "songbook", version, about = "LaTeX songbook to HTML converter")]
struct Cli {
    /// Disable colored warning output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert songbook sources into a single HTML document
    Build(BuildArgs),

    /// Parse sources and list the songs without writing anything
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// LaTeX songbook source files, processed in order
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output HTML file
    #[arg(short, long, default_value = "songbook.html")]
    output: String,

    /// TOML file with the page title, language and asset links
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// LaTeX songbook source files, processed in order
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn main() {
    // Backwards compatibility: if the first positional arg is not a known
    // subcommand, inject "build" so `songbook a.tex -o out.html` works
    // like `songbook build a.tex -o out.html`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(first_pos) = args.iter().skip(1).find(|a| !a.starts_with('-')) {
        let first_pos = first_pos.clone();
        if !SUBCOMMANDS.contains(&first_pos.as_str()) {
            let pos = args.iter().position(|a| *a == first_pos).unwrap();
            args.insert(pos, "build".to_string());
        }
    }

    let cli = Cli::parse_from(&args);

    match cli.command {
        Command::Build(build_args) => do_build(build_args, cli.no_color),
        Command::Check(check_args) => do_check(check_args, cli.no_color),
    }
}

fn do_build(args: BuildArgs, no_color: bool) {
    let options = match &args.config {
        Some(path) => match config::load(path) {
            Ok(options) => options,
            Err(message) => {
                eprintln!("error: {}", message);
                process::exit(1);
            }
        },
        None => DocumentOptions::default(),
    };

    let (files, books, mut warnings) = read_books(&args.inputs);

    let (html, mut render_warnings) = renderer::render_document(&books, &options);
    warnings.append(&mut render_warnings);
    emit_warnings(&files, &warnings, no_color);

    if let Err(e) = std::fs::write(&args.output, html) {
        eprintln!("error: cannot write '{}': {}", args.output, e);
        process::exit(1);
    }
    println!("✅ generated {}", args.output);
}

fn do_check(args: CheckArgs, no_color: bool) {
    let (files, books, mut warnings) = read_books(&args.inputs);

    let mut position = 0usize;
    for book in &books {
        for song in &book.songs {
            position += 1;
            let number = song.metadata.number.unwrap_or(position);
            match &song.metadata.author {
                Some(author) if !author.is_empty() => {
                    println!("{}. {} ({})", number, song.title, author)
                }
                _ => println!("{}. {}", number, song.title),
            }
            let (_, mut body_warnings) =
                songbook::body::parse_body(&song.body, song.body_offset, book.source_id);
            warnings.append(&mut body_warnings);
        }
    }

    emit_warnings(&files, &warnings, no_color);
}

/// Read every input file and extract its songs. An unreadable input is
/// the one fatal error in the pipeline.
fn read_books(inputs: &[String]) -> (SimpleFiles<String, String>, Vec<Songbook>, Vec<Warning>) {
    let mut files = SimpleFiles::new();
    let mut books = Vec::new();
    let mut warnings = Vec::new();

    for input in inputs {
        let source = match std::fs::read_to_string(input) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", input, e);
                process::exit(1);
            }
        };
        let file_id = files.add(input.clone(), source.clone());
        let (book, mut extract_warnings) = extract_songs(&source, file_id);
        warnings.append(&mut extract_warnings);
        books.push(book);
    }

    (files, books, warnings)
}

fn emit_warnings(files: &SimpleFiles<String, String>, warnings: &[Warning], no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for warning in warnings {
        let diagnostic = warning.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, &diagnostic);
    }
}
