use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use retro_core::detection::{
    AnnotationPolicy, CentroidRounding, ContourRetrieval, DetectorConfig, TargetDetector,
    ThresholdMode, ThresholdSource,
};
use retro_core::display::ImageDirSink;
use retro_core::io::image_io::load_frame;
use retro_core::{DetectionResult, Frame};
use serde::Serialize;
use tracing::debug;

use crate::summary::print_detect_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Pixels above the threshold are targets (default)
    Binary,
    /// Pixels at or below the threshold are targets
    BinaryInv,
    /// Clamp pixels to the threshold
    Trunc,
    /// Keep pixels above the threshold
    ToZero,
    /// Keep pixels at or below the threshold
    ToZeroInv,
}

impl From<ModeArg> for ThresholdMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Binary => ThresholdMode::Binary,
            ModeArg::BinaryInv => ThresholdMode::BinaryInverted,
            ModeArg::Trunc => ThresholdMode::Truncate,
            ModeArg::ToZero => ThresholdMode::ToZero,
            ModeArg::ToZeroInv => ThresholdMode::ToZeroInverted,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AnnotateArg {
    /// Mark every target
    All,
    /// Mark only the last target found
    Last,
    /// Do not render debug frames
    Off,
}

impl From<AnnotateArg> for AnnotationPolicy {
    fn from(arg: AnnotateArg) -> Self {
        match arg {
            AnnotateArg::All => AnnotationPolicy::AllTargets,
            AnnotateArg::Last => AnnotationPolicy::LastOnly,
            AnnotateArg::Off => AnnotationPolicy::Disabled,
        }
    }
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input image files, processed in order
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Detector config TOML (frame size defaults to the first image otherwise)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Expected frame width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Expected frame height in pixels
    #[arg(long)]
    pub height: Option<i32>,

    /// Binarization threshold in [0, 255]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Threshold mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Pick the threshold per image with Otsu's method
    #[arg(long)]
    pub otsu: bool,

    /// Report outer borders only (no holes)
    #[arg(long)]
    pub external: bool,

    /// Round centroids to the nearest pixel instead of truncating
    #[arg(long)]
    pub round: bool,

    /// Write annotated debug PNGs into this directory
    #[arg(long)]
    pub annotate_dir: Option<PathBuf>,

    /// Which targets to draw on debug frames
    #[arg(long, value_enum)]
    pub annotate: Option<AnnotateArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Path,
    #[serde(flatten)]
    result: &'a DetectionResult,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    // Without a config file the first image sets the frame size; keep it decoded.
    let mut first = match args.config {
        Some(_) => None,
        None => Some(read_frame(&args.images[0])?),
    };
    let config = build_config(args, first.as_ref())?;
    let mut detector =
        TargetDetector::from_config(config.clone()).context("Invalid detector configuration")?;

    if let Some(ref dir) = args.annotate_dir {
        let sink = ImageDirSink::new(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        detector = detector.with_sink(Arc::new(sink));
    }

    print_detect_summary(&config, args.images.len(), args.annotate_dir.as_deref());

    let total = args.images.len();
    let pb = if total > 1 {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("Detecting [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut failures = 0usize;
    for (index, path) in args.images.iter().enumerate() {
        let loaded = match first.take() {
            Some(frame) => Ok(frame),
            None => read_frame(path),
        };
        match loaded.and_then(|frame| detect_frame(&detector, path, frame.with_index(index))) {
            Ok(result) => {
                let report = FileReport {
                    file: path,
                    result: &result,
                };
                let line = if args.pretty {
                    serde_json::to_string_pretty(&report)?
                } else {
                    serde_json::to_string(&report)?
                };
                pb.suspend(|| println!("{line}"));
            }
            Err(e) => {
                failures += 1;
                pb.suspend(|| eprintln!("{}: {e:#}", path.display()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if failures > 0 {
        bail!("{failures} of {total} images failed");
    }
    Ok(())
}

fn read_frame(path: &Path) -> Result<Frame> {
    load_frame(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn detect_frame(detector: &TargetDetector, path: &Path, frame: Frame) -> Result<DetectionResult> {
    let result = detector.find(&frame)?;
    debug!(file = %path.display(), targets = result.len(), "Image processed");
    Ok(result)
}

/// Config file (or defaults sized to the first image), then flag overrides.
fn build_config(args: &DetectArgs, first: Option<&Frame>) -> Result<DetectorConfig> {
    let mut config = match args.config {
        Some(ref path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<DetectorConfig>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => match first {
            Some(frame) => DetectorConfig {
                frame_width: frame.width() as i32,
                frame_height: frame.height() as i32,
                ..DetectorConfig::default()
            },
            None => DetectorConfig::default(),
        },
    };

    if let Some(width) = args.width {
        config.frame_width = width;
    }
    if let Some(height) = args.height {
        config.frame_height = height;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(mode) = args.mode {
        config.threshold_mode = mode.into();
    }
    if args.otsu {
        config.threshold_source = ThresholdSource::Otsu;
    }
    if args.external {
        config.retrieval = ContourRetrieval::External;
    }
    if args.round {
        config.rounding = CentroidRounding::Nearest;
    }
    if let Some(annotate) = args.annotate {
        config.annotation = annotate.into();
    }

    Ok(config)
}
