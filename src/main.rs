use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Grid markup exported by the layout tool.
    input: PathBuf,

    /// Clue list with `across` / `down` section lines.
    clues: PathBuf,

    /// Where to write the interactive page.
    output: PathBuf,
}

fn read_to_string(path: &Path) -> Result<String> {
    let mut text = String::new();
    File::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .read_to_string(&mut text)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(text)
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(page.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("argument error: {e}");
            println!("{}", Args::command().render_usage());
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();

    let clue_text = read_to_string(&args.clues)?;
    let grid_markup = read_to_string(&args.input)?;

    let page = crossword_html::convert(&grid_markup, &clue_text)
        .with_context(|| format!("convert {}", args.input.display()))?;
    write_page(&args.output, &page)?;

    println!("Done: {}", args.output.display());
    Ok(())
}
