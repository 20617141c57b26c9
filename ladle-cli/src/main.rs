//! Ladle CLI
//!
//! Parse an HTML document and either print its tree or query it with a CSS
//! selector.

mod output;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ladle::Document;
use ladle::common::logging::init_logging;
use ladle::html::{OutputFormat, ParseOptions, SerializeOptions};
use tracing::debug;

/// Ladle - parse HTML and query it with CSS selectors
#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the parsed tree
    ladle page.html

    # Outer HTML of every match
    ladle page.html -s 'article > h2'

    # Text of the first three links
    ladle page.html -s 'a[href]' -l 3 --text

    # JSON summaries with source positions
    ladle --html '<p class=a>hi</p>' -s p --json --locations

    # Read from stdin
    curl -s https://example.com | ladle -s title --text
"#)]
struct Cli {
    /// Path to an HTML file (stdin when omitted and piped)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// CSS selector to query
    #[arg(short, long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Stop after this many matches
    #[arg(short, long, value_name = "N", requires = "selector")]
    limit: Option<usize>,

    /// Print the text of each match
    #[arg(long, requires = "selector", conflicts_with = "json")]
    text: bool,

    /// Print matches as a JSON array of node summaries
    #[arg(long, requires = "selector")]
    json: bool,

    /// Markup dialect for printed matches (default, minimal, html5, xhtml)
    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Default)]
    format: OutputFormat,

    /// Parse as XML: no implicit closing, no raw-text elements
    #[arg(long)]
    xml: bool,

    /// Keep tag and attribute names as written
    #[arg(long)]
    keep_case: bool,

    /// Record and show source line and column
    #[arg(long)]
    locations: bool,

    /// Print the tree without colors
    #[arg(long)]
    no_color: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_lower_case_tags(!self.keep_case)
            .with_lower_case_attributes(!self.keep_case)
            .with_source_locations(self.locations)
            .with_xml_mode(self.xml)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let html = read_input(&cli)?;
    let doc = Document::parse_with_options(&html, &cli.parse_options());
    debug!(nodes = doc.tree().len(), "document ready");

    let Some(selector) = cli.selector.as_deref() else {
        if cli.no_color {
            print!("{}", ladle::html::format_tree(doc.tree(), doc.root()));
        } else {
            output::print_tree(doc.tree(), doc.root(), cli.locations);
        }
        return Ok(());
    };

    let matches = match cli.limit {
        Some(limit) => doc.select_with_limit(selector, limit),
        None => doc.select(selector),
    };
    debug!(selector, found = matches.len(), "query finished");

    if cli.json {
        let summaries: Vec<_> = matches
            .iter()
            .filter_map(|&id| output::NodeSummary::new(doc.tree(), id))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if cli.text {
        for id in matches {
            println!("{}", doc.text(id));
        }
    } else {
        let options = SerializeOptions::format(cli.format);
        for id in matches {
            println!("{}", doc.to_html_with(id, &options));
        }
    }
    Ok(())
}

/// Load HTML from `--html`, the file argument or piped stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    if let Some(path) = &cli.path {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()));
    }
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no input: pass a FILE, --html, or pipe HTML on stdin");
    }
    let mut html = String::new();
    let _ = stdin
        .read_to_string(&mut html)
        .context("failed to read stdin")?;
    Ok(html)
}
