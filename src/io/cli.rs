//! Command-line interface for converting one image to SVG

use crate::algorithm::pipeline::{ConversionOptions, convert_with_progress};
use crate::analysis::statistics::ConversionStats;
use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::Result;
use crate::io::image::load_grid;
use crate::io::progress::ProgressManager;
use crate::io::svg::write_svg;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pixsvg")]
#[command(
    author,
    version,
    about = "Convert pixel art into an SVG made of merged rectangles"
)]
/// Command-line arguments for the converter
pub struct Cli {
    /// Source image (PNG or any format the decoder supports)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination SVG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the adjacency merge pass
    #[arg(long)]
    pub no_merge: bool,

    /// Print conversion statistics to stderr
    #[arg(short, long)]
    pub stats: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Conversion options selected by the flags
    pub const fn options(&self) -> ConversionOptions {
        ConversionOptions {
            merge: !self.no_merge,
        }
    }
}

/// Parse arguments, returning `Ok(None)` after help or version was printed
///
/// # Errors
///
/// Returns `Usage` when the arguments are invalid, including a wrong number
/// of positional arguments
pub fn parse_args<I, T>(args: I) -> Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if !err.use_stderr() => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Runs one conversion from input image to output SVG
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load, convert and write according to the CLI arguments
    ///
    /// Nothing is written unless the whole conversion succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded or the output cannot
    /// be written
    pub fn process(&mut self) -> Result<ConversionStats> {
        let grid = load_grid(&self.cli.input)?;
        self.warn_on_extension(&self.cli.output);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start(&self.cli.input, grid.height());
        }

        let options = self.cli.options();
        let progress = self.progress_manager.as_ref();
        let conversion = convert_with_progress(&grid, &options, |done, total| {
            if let Some(pm) = progress {
                pm.update(done, total);
            }
        });

        write_svg(&conversion.image, &self.cli.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish(&format!("{} shapes", conversion.stats.merged_shapes));
        }

        if self.cli.stats {
            Self::report_stats(&self.cli.output, &conversion.stats);
        }

        Ok(conversion.stats)
    }

    // Allow print for user feedback on an unusual output name
    #[allow(clippy::print_stderr)]
    fn warn_on_extension(&self, output: &Path) {
        let is_svg = output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
        if !is_svg && !self.cli.quiet {
            eprintln!(
                "Note: writing SVG to '{}' without a .{OUTPUT_EXTENSION} extension",
                output.display()
            );
        }
    }

    // Allow print for the statistics report requested with --stats
    #[allow(clippy::print_stderr)]
    fn report_stats(output: &Path, stats: &ConversionStats) {
        eprintln!("{}: {stats}", output.display());
        eprintln!(
            "  extractions: {} rectangles, {} vertical runs, {} horizontal runs, {} single pixels",
            stats.extractions.rectangles,
            stats.extractions.vertical_runs,
            stats.extractions.horizontal_runs,
            stats.extractions.single_pixels
        );
    }
}
