//! Non-interactive rendering (`cardsmith render ...`).

use anyhow::{Context, Result, bail};
use cardsmith::{CardColor, CardConfig, RepeatCount, create_card, preview_card};
use clap::Args;

use crate::cli::common::Workspace;

/// Args for `cardsmith render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Title text, fitted above the centre.
    #[arg(long, default_value = "")]
    pub title: String,
    /// Description text, fitted below the centre.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Font name from the catalog (defaults to the first one).
    #[arg(long)]
    pub font: Option<String>,
    /// Repeat count shown in the footer: a positive number or `unlimited`.
    #[arg(long, default_value = "1")]
    pub times: RepeatCount,
    /// Border color: preset name or #RRGGBB.
    #[arg(long = "border-color", default_value = "black", conflicts_with = "no_border")]
    pub border_color: CardColor,
    /// Draw no border.
    #[arg(long = "no-border")]
    pub no_border: bool,
    /// Background color: preset name or #RRGGBB.
    #[arg(long = "background-color", default_value = "white")]
    pub background_color: CardColor,
    /// Text color: preset name or #RRGGBB.
    #[arg(long = "text-color", default_value = "black")]
    pub text_color: CardColor,
    /// Additional caption; repeat for more.
    #[arg(long = "caption")]
    pub captions: Vec<String>,
    /// Render even when title or description is empty.
    #[arg(long)]
    pub preview: bool,
}

/// Execute `cardsmith render`.
pub fn handle(args: RenderArgs, workspace: &Workspace) -> Result<()> {
    let font = match &args.font {
        Some(name) => Some(workspace.catalog.find(name)?.clone()),
        None => workspace.catalog.first().cloned(),
    };
    if font.is_none() && !args.preview {
        bail!(
            "no fonts found in {}; add .ttf or .otf files or use --preview",
            workspace.font_dir.display()
        );
    }

    let border = (!args.no_border).then_some(args.border_color);
    let config = args.captions.into_iter().fold(
        CardConfig::new(font)
            .with_title(args.title)
            .with_description(args.description)
            .with_times(args.times)
            .with_border_color(border)
            .with_background_color(args.background_color)
            .with_text_color(args.text_color),
        |config, caption| config.with_caption(caption),
    );

    let path = if args.preview {
        preview_card(&config, &workspace.output)
    } else {
        create_card(&config, &workspace.output)
    }
    .context("failed to render card")?;
    println!("Card saved as {}", path.display());
    Ok(())
}
