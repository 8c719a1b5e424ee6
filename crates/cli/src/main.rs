use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use vartok_core::session::ExportSession;
use vartok_protocol::{ColorFormat, ExportConfig, ExportMessage, UiRequest, UnitFormat};

/// Export design tokens from a variables snapshot.
#[derive(Parser, Debug)]
#[command(name = "vartok")]
#[command(about = "Export design tokens from a variables snapshot")]
struct Args {
    /// Snapshot file (plugin or REST API export, JSON)
    snapshot: PathBuf,

    /// Directory the token documents are written into
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Dimension unit for string-formatted values
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,

    /// Color format for string-formatted values
    #[arg(long, value_enum)]
    color: Option<ColorArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Px,
    Rem,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Hex,
    Rgba,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = fs::read(&args.snapshot)
        .with_context(|| format!("reading {}", args.snapshot.display()))?;
    let snapshot = vartok_core::parsers::parse_auto(&data)
        .with_context(|| format!("parsing {}", args.snapshot.display()))?;
    info!(
        "parsed snapshot: {} collections, {} variables",
        snapshot.collection_count(),
        snapshot.variable_count(),
    );

    let config = ExportConfig {
        unit: args.unit.map(|unit| match unit {
            UnitArg::Px => UnitFormat::Px,
            UnitArg::Rem => UnitFormat::Rem,
        }),
        color: args.color.map(|color| match color {
            ColorArg::Hex => ColorFormat::Hex,
            ColorArg::Rgba => ColorFormat::Rgba,
        }),
    };

    let mut session = ExportSession::new();
    let messages = session.handle_request(&snapshot, UiRequest::Run { config })?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    for message in messages {
        let (name, contents) = match message {
            ExportMessage::BaseTokens(json) => ("base-tokens.json", json),
            ExportMessage::ThemeTokens(theme) => (
                "theme-tokens.json",
                vartok_core::export::to_document_json(&theme)?,
            ),
            ExportMessage::MergedTokens(json) => ("merged-tokens.json", json),
        };
        let path = args.out.join(name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
