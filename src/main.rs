//! Command-line shim around the renderer.
//!
//! Reads a JSON array of object records from a file or stdin, renders it in
//! the requested layout and prints the fragment to stdout.
//!
//! ```text
//! islandora-objects --mode list objects.json > fragment.html
//! cat objects.json | islandora-objects --classes site-classes.toml
//! ```
//!
//! Logs go to stderr; see [`islandora_objects::observability`].

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use islandora_objects::{
    load_classes, load_records, parse_records, render_with_classes, Config, DisplayMode,
    ObjectRecord,
};

#[derive(Debug, Parser)]
#[command(name = "islandora-objects", version, about = "Render object records as an HTML grid or list")]
struct Cli {
    /// Layout to render: grid or list.
    #[arg(short, long, default_value = "grid")]
    mode: DisplayMode,

    /// TOML file overriding the CSS class vocabulary.
    #[arg(short, long, value_name = "FILE")]
    classes: Option<PathBuf>,

    /// Tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// JSON array of object records. Reads stdin when omitted.
    input: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut options = BTreeMap::new();
        options.insert("mode".to_string(), self.mode.to_string());
        if let Some(classes) = &self.classes {
            options.insert("classes_file".to_string(), classes.display().to_string());
        }
        if let Some(level) = &self.trace_level {
            options.insert("trace_level".to_string(), level.clone());
        }
        Config::from_map(&options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    islandora_objects::observability::init_tracing(&config);

    let span = tracing::debug_span!("render_cli", mode = %config.mode);
    let _guard = span.entered();

    let classes = load_classes(&config).with_context(|| {
        format!("loading classes from {}", config.classes_file.as_deref().unwrap_or_default())
    })?;

    let records = read_records(cli.input.as_ref())?;

    let html = render_with_classes(config.mode, &records, &classes)
        .with_context(|| format!("rendering {} records in {} mode", records.len(), config.mode))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{html}").context("writing output")?;

    Ok(())
}

fn read_records(path: Option<&PathBuf>) -> Result<Vec<ObjectRecord>> {
    match path {
        Some(path) => load_records(path)
            .with_context(|| format!("loading object records from {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            parse_records(&buf).context("parsing object records")
        }
    }
}
