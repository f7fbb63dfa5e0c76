//! Command-line interface for building a pattern catalog from a PNG sample

use crate::algorithm::precompute::{precompute_offset, verify_legal_sets};
use crate::analysis::patterns::SampleCatalog;
use crate::io::configuration::{
    CatalogConfig, DEFAULT_NEIGHBORHOOD_RADIUS, DEFAULT_PATTERN_EXTENT, DEFAULT_PATTERN_SCALE,
    DEFAULT_SEED, DEFAULT_VERIFY_SAMPLES, MAX_NEIGHBORHOOD_RADIUS, SHEET_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_pattern_sheet, load_png_sample};
use crate::io::progress::PrecomputeProgress;
use crate::spatial::offset::Offset;
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wfc-overlap")]
#[command(
    author,
    version,
    about = "Extract overlapping patterns from a sample and derive their adjacency rules"
)]
/// Command-line arguments for the catalog tool
// Each boolean is an independent opt-out of one pipeline stage, and `verify`
// tells an absent flag apart from a bare one
#[allow(clippy::struct_excessive_bools, clippy::option_option)]
pub struct Cli {
    /// Input PNG sample
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pattern extent per axis, row axis first (e.g. 3,3)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [DEFAULT_PATTERN_EXTENT, DEFAULT_PATTERN_EXTENT]
    )]
    pub pattern_size: Vec<usize>,

    /// Disable reflection and rotation variants
    #[arg(long)]
    pub no_symmetry: bool,

    /// Chebyshev radius of the offset neighborhood to precompute
    #[arg(short, long, default_value_t = DEFAULT_NEIGHBORHOOD_RADIUS)]
    pub radius: usize,

    /// Skip legal-set precomputation
    #[arg(long)]
    pub no_precompute: bool,

    /// Spot-check cached legal sets against exact overlap, optionally with a sample count
    #[arg(long, value_name = "SAMPLES", num_args = 0..=1)]
    pub verify: Option<Option<usize>>,

    /// Random seed for cache verification
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output path of the pattern sheet (defaults to <input>_patterns.png)
    #[arg(long, value_name = "PATH")]
    pub sheet: Option<PathBuf>,

    /// Do not write a pattern sheet
    #[arg(long)]
    pub no_sheet: bool,

    /// Pixels per pattern cell in the sheet
    #[arg(long, default_value_t = DEFAULT_PATTERN_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Extraction settings described by the arguments
    pub fn catalog_config(&self) -> CatalogConfig {
        let config = CatalogConfig::with_shape(&self.pattern_size);
        if self.no_symmetry {
            config.without_symmetries()
        } else {
            config
        }
    }

    /// Number of verification samples, if verification was requested
    pub fn verify_samples(&self) -> Option<usize> {
        self.verify.map(|samples| samples.unwrap_or(DEFAULT_VERIFY_SAMPLES))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the pattern sheet is written, if at all
    pub fn sheet_path(&self) -> Option<PathBuf> {
        if self.no_sheet {
            return None;
        }
        Some(
            self.sheet
                .clone()
                .unwrap_or_else(|| default_sheet_path(&self.target)),
        )
    }
}

/// Start logging to stderr, honouring `RUST_LOG` when set
///
/// # Errors
///
/// Returns an error if the log specification is invalid or a logger is
/// already installed
pub fn init_logging(quiet: bool) -> Result<LoggerHandle> {
    let default_level = if quiet { "warn" } else { "info" };
    Ok(Logger::try_with_env_or_str(default_level)?.start()?)
}

/// Outcome of one catalog run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Number of distinct symbols in the sample
    pub alphabet_size: usize,
    /// Number of unique patterns
    pub pattern_count: usize,
    /// Number of offsets with precomputed legal sets
    pub offsets_cached: usize,
    /// Number of cache answers checked against exact overlap
    pub verified: usize,
    /// Pattern sheet written, if any
    pub sheet: Option<PathBuf>,
}

/// Runs the load, extract, precompute, verify and export pipeline
pub struct CatalogProcessor {
    cli: Cli,
}

impl CatalogProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process the target sample
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the sample cannot be
    /// loaded, extraction fails, the cache fails verification, or the sheet
    /// cannot be written
    pub fn process(&self) -> Result<CatalogSummary> {
        let start_time = Instant::now();
        self.validate()?;

        let sample = load_png_sample(&self.cli.target)?;
        let mut session = SampleCatalog::from_sample(sample.view(), &self.cli.catalog_config())?;

        let offsets_cached = if self.cli.no_precompute {
            0
        } else {
            self.precompute(&mut session)?
        };

        let verified = match self.cli.verify_samples() {
            Some(samples) => {
                let mut rng = StdRng::seed_from_u64(self.cli.seed);
                verify_legal_sets(session.catalog(), samples, &mut rng)?
            }
            None => 0,
        };

        let sheet = self.cli.sheet_path();
        if let Some(ref path) = sheet {
            export_pattern_sheet(&session, path, self.cli.scale)?;
        }

        info!(
            "Processed {} in {:.2?}",
            self.cli.target.display(),
            start_time.elapsed()
        );

        Ok(CatalogSummary {
            alphabet_size: session.symbols().alphabet_size(),
            pattern_count: session.catalog().len(),
            offsets_cached,
            verified,
            sheet,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.cli.target.extension().and_then(|s| s.to_str()) != Some("png") {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a PNG image",
            ));
        }
        if self.cli.radius > MAX_NEIGHBORHOOD_RADIUS {
            return Err(invalid_parameter(
                "radius",
                &self.cli.radius,
                &format!("must be at most {MAX_NEIGHBORHOOD_RADIUS}"),
            ));
        }
        if self.cli.scale == 0 {
            return Err(invalid_parameter("scale", &self.cli.scale, &"must be positive"));
        }
        self.cli.catalog_config().validate()
    }

    fn precompute(&self, session: &mut SampleCatalog<u8>) -> Result<usize> {
        let arity = session.catalog().arity();
        let offsets = Offset::neighborhood(arity, self.cli.radius);
        let progress = PrecomputeProgress::new(offsets.len(), !self.cli.should_show_progress());

        for offset in &offsets {
            progress.start_offset(offset);
            precompute_offset(session.catalog_mut(), offset)?;
            progress.complete_offset();
        }
        progress.finish(session.catalog().len());

        Ok(progress.position() as usize)
    }
}

fn default_sheet_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let sheet_name = format!("{}{SHEET_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(sheet_name)
    } else {
        PathBuf::from(sheet_name)
    }
}
