use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagtree::{
    error::Result,
    find_all, find_first, first_text,
    utils::{format_tokens, format_tree, parse_str, read_file, write_file},
    Lexer, Node,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    file: String,

    /// Print the whole tree
    #[arg(long)]
    tree: bool,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print every element with this tag name
    #[arg(long, value_name = "TAG")]
    find: Option<String>,

    /// Report one line per element with this tag name
    #[arg(long, value_name = "TAG", requires = "field")]
    select: Option<String>,

    /// Tag whose text is printed for each selected element (repeatable)
    #[arg(long, value_name = "TAG", requires = "select")]
    field: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let mut sections = Vec::new();

    if args.tokens {
        let tokens = Lexer::new(&content)?.tokenize()?;
        sections.push(format!("Tokens:\n{}", format_tokens(&tokens)));
    }

    let tree = parse_str(&content)?;

    if args.tree {
        sections.push(format!("Whole tree:\n{}", format_tree(&tree)?));
    }

    if let Some(tag) = &args.find {
        let matches = find_all(&tree, tag);
        info!("Found {} <{}> element(s)", matches.len(), tag);
        for node in matches {
            sections.push(format_tree(node)?);
        }
    }

    if let Some(tag) = &args.select {
        sections.push(report(&tree, tag, &args.field));
    }

    let output = sections.join("\n");
    if let Some(output_path) = args.output {
        write_file(&output_path, &output)?;
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// One line per `select` match: the first text of each field, `-` if absent
fn report(tree: &Node, select: &str, fields: &[String]) -> String {
    find_all(tree, select)
        .into_iter()
        .map(|item| {
            fields
                .iter()
                .map(|field| {
                    find_first(item, field)
                        .and_then(first_text)
                        .unwrap_or("-")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
