//! Sprig CLI
//!
//! Parses a markup file (or an inline string) and prints the resulting
//! node tree, either as an indented dump or as JSON.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use sprig_common::warning::set_warnings_enabled;
use sprig_dom::{ElementNode, print_tree};
use sprig_html::{DEFAULT_ITERATION_LIMIT, DEFAULT_MAX_DEPTH, MarkupParser, ParserOptions};

/// Sprig — parse markup into an element tree
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    sprig page.html

    # Parse markup from stdin
    cat page.html | sprig -

    # Parse an inline string and emit JSON
    sprig --html '<p class="a">Hello<br /></p>' --json
"#)]
struct Cli {
    /// Path to a markup file, or `-` for stdin
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this markup string instead of reading a file
    #[arg(long, value_name = "MARKUP", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(short, long)]
    json: bool,

    /// With --json, print on a single line
    #[arg(long, requires = "json")]
    compact: bool,

    /// Print node count and nesting depth after the tree
    #[arg(long)]
    stats: bool,

    /// Loop passes an element may make without finding its close tag
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ITERATION_LIMIT)]
    max_iterations: usize,

    /// Maximum number of nested open elements
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not print warnings about ignored input
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ParserOptions {
        ParserOptions {
            iteration_limit: self.max_iterations,
            max_depth: self.max_depth,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_warnings_enabled(!cli.quiet);

    let source = load_source(&cli)?;
    let outcome = MarkupParser::new(&source)
        .with_options(cli.options())
        .run()
        .context("failed to parse markup")?;

    let Some(root) = outcome.root else {
        eprintln!("{}", "No root element found".dimmed());
        return Ok(());
    };

    if cli.json {
        print_json(&root, cli.compact)?;
    } else {
        println!("{}", "=== Element Tree ===".bold());
        print_tree(&root);
    }

    if cli.stats {
        println!();
        println!("{}", "=== Stats ===".bold());
        println!("nodes: {}", root.descendant_count() + 1);
        println!("depth: {}", root.depth());
        println!("consumed: {} bytes", source.len() - outcome.remainder.len());
        println!("ignored: {} issue(s)", outcome.issues.len());
    }

    Ok(())
}

/// Read the markup from `--html`, a file path, or stdin.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref markup) = cli.html {
        return Ok(markup.clone());
    }
    let Some(ref path) = cli.path else {
        bail!("no input: pass a file path, `-` for stdin, or --html");
    };
    if path.as_os_str() == OsStr::new("-") {
        let mut buffer = String::new();
        let _ = io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn print_json(root: &ElementNode, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(root)
    } else {
        serde_json::to_string_pretty(root)
    }
    .context("failed to serialize tree")?;
    println!("{json}");
    Ok(())
}
