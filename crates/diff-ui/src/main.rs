//! Diff UI - A terminal viewer for line diffs
//!
//! Reads two files, computes their line diff and prints it as a unified or
//! split view. The patch text can also be saved to a file.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use line_diff::{DiffAlgorithm, DiffConfig, DiffDocument, Language, ViewMode, ViewOptions};
use log::{debug, info, LevelFilter};

mod diff_text_view;

use diff_text_view::{DiffTextView, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "diff-ui",
    version,
    about = "Show the line diff between two files"
)]
struct Cli {
    /// The original file
    old: PathBuf,

    /// The modified file
    new: PathBuf,

    /// Layout of the diff (unified, split)
    #[arg(long, default_value = "unified", env = "DIFF_UI_VIEW")]
    view: ViewMode,

    /// How the lines of the two files are matched up (greedy, myers, patience)
    #[arg(long, default_value = "greedy")]
    algorithm: DiffAlgorithm,

    /// Language label shown in the header (text, json, sql, javascript)
    #[arg(long, default_value = "text")]
    language: Language,

    /// Title shown in the header
    #[arg(long, default_value = "Diff Viewer")]
    title: String,

    /// Fold unchanged lines, keeping this many lines around each change
    #[arg(long)]
    context: Option<usize>,

    /// Column width in split view
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Hide line numbers
    #[arg(long)]
    no_line_numbers: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Only print the stats header
    #[arg(long, conflicts_with = "format")]
    stats: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Also write the patch text to this file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl Cli {
    fn view_options(&self) -> ViewOptions {
        let color = match self.color {
            ColorArg::Always => true,
            ColorArg::Never => false,
            ColorArg::Auto => std::io::stdout().is_terminal(),
        };

        let mut options = ViewOptions::new()
            .mode(self.view)
            .language(self.language)
            .title(self.title.clone())
            .column_width(self.width)
            .show_line_numbers(!self.no_line_numbers)
            .color(color);
        if let Some(context) = self.context {
            options = options.context(context);
        }
        options
    }

    fn output_format(&self) -> OutputFormat {
        if self.stats {
            return OutputFormat::Stats;
        }
        match self.format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let config = DiffConfig::new().algorithm(cli.algorithm);
    let document = DiffDocument::from_paths_with_config(&cli.old, &cli.new, config)?;

    let view = DiffTextView::new(document, cli.view_options(), cli.output_format());
    info!(
        "Diffed {} against {}: {}",
        cli.old.display(),
        cli.new.display(),
        view.document().result().stats
    );
    println!("{}", view.render()?);

    if let Some(path) = &cli.output {
        view.write_patch(path)?;
    }

    Ok(())
}
