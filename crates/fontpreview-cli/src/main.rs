//! fontpreview CLI - Render a font preview image from the command line

mod cli;

use std::path::PathBuf;

use clap::Parser;
use fontpreview::prelude::*;

use crate::cli::Args;

fn main() {
    let args = Args::parse();
    init_logger(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--verbose` raises the default filter, `-q` lowers it; `RUST_LOG` wins over both
fn init_logger(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<()> {
    let placement = parse_placement(&args.position)?;

    let mut config = PreviewConfig::default()
        .with_text(unescape_newlines(&args.text))
        .with_dimension(args.dimension)
        .with_background(args.background)
        .with_foreground(args.foreground)
        .with_color_model(args.color_model);
    if let Some(path) = &args.background_image {
        config = config.with_background_image(path);
    }

    let spec = FontSpec::new(&args.font)
        .with_size(args.font_size)
        .with_face_index(args.face_index);

    let mut preview = FontPreview::new(spec, config)?;
    preview.set_text_position(placement)?;
    preview.set_font_size(args.font_size)?;

    let output = match &args.output {
        Some(path) => {
            preview.save(path)?;
            path.clone()
        },
        None => preview.save_default()?,
    };

    if !args.quiet {
        if preview.font_size() != args.font_size {
            eprintln!(
                "Shrunk font size from {} to {} to fit the canvas",
                args.font_size,
                preview.font_size()
            );
        }
        eprintln!("{}", preview);
        eprintln!("Saved preview to {}", output.display());
    }

    if args.show {
        let shown: PathBuf = preview.show()?;
        log::debug!("Viewer opened {}", shown.display());
    }

    Ok(())
}

/// `x,y` or an anchor name; unknown names fall back to center
fn parse_placement(value: &str) -> Result<Placement> {
    if !value.contains(',') && value.parse::<Anchor>().is_err() {
        log::warn!("Unknown position {:?}, using center", value);
    }
    value.parse()
}

/// Turns a literal `\n` typed on the shell into a line break
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
