use anyhow::Result;
use clap::Parser;
use std::io::{BufWriter, Write};

use docx_dump::{Config, load_document, render_document};

#[derive(Parser)]
#[command(name = "docx-dump")]
#[command(about = "Print the paragraphs and tables of a .docx file")]
#[command(
    long_about = "Print the paragraphs and tables of a .docx file.\n\n\
    The document path and banner title are read from config.toml in the \
    docx-dump config directory."
)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    let config = Config::load()?;
    let document = load_document(&config.document_path)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = render_document(&mut out, &document, &config.render_options());
    // Flush whatever was rendered before a failure
    out.flush()?;
    result?;

    Ok(())
}
