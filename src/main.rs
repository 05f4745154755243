//! Caption Markup CLI
//!
//! Usage:
//!   caption-markup [OPTIONS] <COMMAND>
//!
//! Options:
//!   -i, --input <FILE>   Input file (reads from stdin if not provided)
//!   -c, --config <FILE>  Settings file (TOML format)
//!   -v, --verbose        Enable debug logging
//!   -h, --help           Print help

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use caption_markup::{
    clean, data_replace, data_replace_json, decode_special, distribute_lines, encode_special,
    get_start_tags, lines, remove_format, slice, split, visible_length, Settings,
};

#[derive(Parser)]
#[command(name = "caption-markup")]
#[command(about = "Inline markup tools for captions and lyrics")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Repair and normalize markup
    Clean,
    /// Print the visible length
    Length,
    /// Extract a visible range
    Slice {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: Option<usize>,
    },
    /// Split into lines
    Lines,
    /// Split on a literal delimiter
    Split {
        #[arg(short, long)]
        delimiter: String,
    },
    /// Distribute lines across slides
    Distribute {
        /// Maximum lines per slide (overrides the settings file)
        #[arg(short, long)]
        max_lines: Option<usize>,
        /// Drop trailing blank lines
        #[arg(long)]
        trim_end: bool,
    },
    /// Remove all formatting, printing plain text
    Strip,
    /// Escape plain text for use as markup
    Encode,
    /// Decode entities
    Decode,
    /// Print the tags open before the first visible character
    StartTags,
    /// Fill in {name:fallback} placeholders
    Replace {
        /// Data file: JSON object or TOML table of strings
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => fail(&format!("Error loading settings '{}': {}", path.display(), e)),
        },
        None => Settings::default(),
    };

    let source = read_input(cli.input.as_deref());

    match cli.command {
        Command::Clean => println!("{}", clean(&source)),
        Command::Length => println!("{}", visible_length(&source)),
        Command::Slice { from, to } => match to {
            Some(to) => println!("{}", slice(&source, from..to)),
            None => println!("{}", slice(&source, from..)),
        },
        Command::Lines => print_pieces(&lines(&source)),
        Command::Split { delimiter } => print_pieces(&split(&source, &delimiter)),
        Command::Distribute {
            max_lines,
            trim_end,
        } => {
            let max_lines = max_lines.unwrap_or(settings.pagination.max_lines);
            let trim_end = trim_end || settings.pagination.trim_end;
            print_pieces(&distribute_lines(&source, max_lines, trim_end));
        }
        Command::Strip => println!("{}", remove_format(&source)),
        Command::Encode => println!("{}", encode_special(&source)),
        Command::Decode => println!("{}", decode_special(&source)),
        Command::StartTags => {
            let names: Vec<&str> = get_start_tags(&source)
                .into_iter()
                .map(|kind| kind.name())
                .collect();
            println!("{}", names.join(" "));
        }
        Command::Replace { data } => {
            let output = match data {
                Some(path) => replace_from_file(&source, &path),
                None => data_replace(&source, &settings.data),
            };
            println!("{}", output);
        }
    }
}

fn replace_from_file(source: &str, path: &Path) -> String {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(&format!("Error reading data '{}': {}", path.display(), e)),
    };

    if path.extension().is_some_and(|ext| ext == "json") {
        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => fail(&format!("Error parsing data '{}': {}", path.display(), e)),
        };
        match data_replace_json(source, &value) {
            Ok(output) => output,
            Err(e) => fail(&format!("Error: {}", e)),
        }
    } else {
        match toml::from_str::<HashMap<String, String>>(&content) {
            Ok(record) => data_replace(source, &record),
            Err(e) => fail(&format!("Error parsing data '{}': {}", path.display(), e)),
        }
    }
}

fn read_input(path: Option<&Path>) -> String {
    let text = match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => fail(&format!("Error reading file '{}': {}", path.display(), e)),
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => fail(&format!("Error reading from stdin: {}", e)),
            }
        }
    };
    // A single trailing newline comes from the file or the shell, not the caption
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

fn print_pieces(pieces: &[String]) {
    match serde_json::to_string_pretty(pieces) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Error: {}", e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
