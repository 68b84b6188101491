//! Command-line interface for generating, animating, analysing and reconstructing kolam patterns

use crate::algorithm::animation::{AnimationFrame, FrameSequence};
use crate::algorithm::generator::GenerationRequest;
use crate::algorithm::kind::PatternKind;
use crate::algorithm::overlay::highlight_symmetry;
use crate::analysis::classifier::PatternClassifier;
use crate::analysis::symmetry::symmetry_of_kind;
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_GRID_SIZE, GIF_FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::FrameProgress;
use crate::io::report::to_json;
use crate::io::svg::write_svg;
use crate::io::visualization::{export_frame_svgs, export_gif};
use crate::spatial::drawing::Point;
use crate::spatial::grid::GridSpec;
use crate::vision::reconstruct::{ReconstructionOutcome, Reconstructor, graph_drawing};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kolam")]
#[command(
    author,
    version,
    about = "Generate, animate, analyse and reconstruct kolam dot-grid patterns"
)]
/// Command-line arguments for the kolam pattern tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Render one complete pattern as SVG and optionally PNG
    Generate(GenerateArgs),
    /// Render a progressive construction as an animated GIF
    Animate(AnimateArgs),
    /// Classify a pattern kind or a coordinate set
    Analyze(AnalyzeArgs),
    /// Detect dots in an image and infer the pattern they form
    Reconstruct(ReconstructArgs),
}

/// Arguments of `generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Grid size; clamped to 3..=15, unparsable values become 7
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE.to_string())]
    pub size: String,

    /// Pattern name; unknown names become `basic`
    #[arg(short, long, default_value = "basic")]
    pub pattern: String,

    /// Leave out the reference grid dots
    #[arg(long)]
    pub no_grid: bool,

    /// SVG output path, `<pattern>_kolam.svg` when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also rasterize to this PNG path
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Overlay the symmetry axes of the pattern kind
    #[arg(long)]
    pub axes: bool,
}

/// Arguments of `animate`
#[derive(Args)]
pub struct AnimateArgs {
    /// Grid size; clamped to 3..=15, unparsable values become 7
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE.to_string())]
    pub size: String,

    /// Pattern name; unknown names become `basic`
    #[arg(short, long, default_value = "basic")]
    pub pattern: String,

    /// Number of frames, at least 1
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// GIF output path, `<pattern>_kolam.gif` when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write every frame as an SVG into this directory
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Leave out the reference grid dots
    #[arg(long)]
    pub no_grid: bool,
}

/// Arguments of `analyze`
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Known pattern name; uses the per-kind tables
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Grid size used for repetition and for the default point set
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE.to_string())]
    pub size: String,

    /// Coordinates as `x,y` pairs separated by whitespace; grid dots when omitted
    #[arg(long)]
    pub points: Option<String>,
}

/// Arguments of `reconstruct`
#[derive(Args)]
pub struct ReconstructArgs {
    /// Image file to analyse
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Write the recovered graph as SVG
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Summary printed after `generate`
#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    /// Pattern actually rendered
    pub pattern: PatternKind,
    /// Grid size actually used
    pub grid_size: usize,
    /// Whether size or pattern were corrected
    pub was_corrected: bool,
    /// Number of primitives in the drawing
    pub primitives: usize,
    /// Written SVG
    pub svg: PathBuf,
    /// Written PNG, if requested
    pub png: Option<PathBuf>,
}

/// Summary printed after `animate`
#[derive(Debug, Serialize)]
pub struct AnimationSummary {
    /// Pattern actually animated
    pub pattern: PatternKind,
    /// Grid size actually used
    pub grid_size: usize,
    /// Frames rendered
    pub frames: usize,
    /// Elements of the complete pattern
    pub total_elements: usize,
    /// Written GIF
    pub gif: PathBuf,
    /// Directory holding per-frame SVGs, if requested
    pub frames_dir: Option<PathBuf>,
}

/// Parse `x,y` pairs separated by whitespace
///
/// # Errors
///
/// Returns an error if a pair is not two comma-separated numbers
pub fn parse_points(raw: &str) -> Result<Vec<Point>> {
    raw.split_whitespace()
        .map(|pair| {
            let parsed = pair
                .split_once(',')
                .and_then(|(x, y)| Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?)));
            parsed.ok_or_else(|| invalid_parameter("points", &pair, &"expected x,y"))
        })
        .collect()
}

fn default_output(kind: PatternKind, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}{OUTPUT_SUFFIX}.{extension}", kind.name()))
}

/// Runs one parsed command and reports its result as flat JSON
pub struct CommandProcessor {
    cli: Cli,
}

impl CommandProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command and print its report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read or an output cannot be written
    pub fn process(&self) -> Result<()> {
        let report = self.execute()?;
        // Reports are the program's output
        #[allow(clippy::print_stdout)]
        {
            println!("{report}");
        }
        Ok(())
    }

    /// Run the command and return its report
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read or an output cannot be written
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Command::Generate(args) => to_json(&Self::generate(args)?),
            Command::Animate(args) => to_json(&self.animate(args)?),
            Command::Analyze(args) => Self::analyze(args),
            Command::Reconstruct(args) => Self::reconstruct(args),
        }
    }

    fn generate(args: &GenerateArgs) -> Result<GenerationSummary> {
        let request = GenerationRequest::from_raw(&args.size, &args.pattern, !args.no_grid);
        let grid = request.grid.value;
        let kind = request.kind.value;

        let mut drawing = request.render();
        if args.axes {
            highlight_symmetry(&mut drawing, grid, symmetry_of_kind(kind));
        }

        let svg = args
            .output
            .clone()
            .unwrap_or_else(|| default_output(kind, "svg"));
        write_svg(&drawing, &svg)?;
        if let Some(png) = &args.png {
            export_png(&drawing, png)?;
        }

        Ok(GenerationSummary {
            pattern: kind,
            grid_size: grid.size(),
            was_corrected: request.was_corrected(),
            primitives: drawing.len(),
            svg,
            png: args.png.clone(),
        })
    }

    fn animate(&self, args: &AnimateArgs) -> Result<AnimationSummary> {
        let frame_count = NonZeroUsize::new(args.frames)
            .ok_or_else(|| invalid_parameter("frames", &args.frames, &"must be at least 1"))?;
        let request = GenerationRequest::from_raw(&args.size, &args.pattern, !args.no_grid);
        let grid = request.grid.value;
        let kind = request.kind.value;

        let sequence = FrameSequence::new(grid, kind, frame_count).with_grid_dots(!args.no_grid);
        let total_elements = sequence.total_elements();
        let progress = if self.cli.should_show_progress() {
            FrameProgress::new(kind.name(), frame_count.get())
        } else {
            FrameProgress::hidden(frame_count.get())
        };
        let frames: Vec<AnimationFrame> = sequence
            .inspect(|_| progress.advance())
            .collect();
        progress.finish();

        let gif = args
            .output
            .clone()
            .unwrap_or_else(|| default_output(kind, "gif"));
        export_gif(&frames, &gif, GIF_FRAME_DELAY_MS, GIF_FINAL_FRAME_HOLD)?;
        if let Some(directory) = &args.frames_dir {
            export_frame_svgs(&frames, directory)?;
        }

        Ok(AnimationSummary {
            pattern: kind,
            grid_size: grid.size(),
            frames: frames.len(),
            total_elements,
            gif,
            frames_dir: args.frames_dir.clone(),
        })
    }

    fn analyze(args: &AnalyzeArgs) -> Result<String> {
        let grid = GridSpec::parse(&args.size).value;
        let classifier = PatternClassifier::default();
        let record = match (&args.pattern, &args.points) {
            (Some(pattern), _) => classifier.classify_kind(PatternKind::normalize(pattern).value),
            (None, Some(points)) => classifier.classify_points(&parse_points(points)?, grid.size()),
            (None, None) => classifier.classify_points(&grid.dots(), grid.size()),
        };
        to_json(&record)
    }

    fn reconstruct(args: &ReconstructArgs) -> Result<String> {
        let bytes = read_image(&args.image)?;
        let outcome = Reconstructor::default().reconstruct(&bytes);
        if let (Some(path), ReconstructionOutcome::Success { graph, .. }) = (&args.svg, &outcome) {
            write_svg(&graph_drawing(graph), path)?;
        }
        to_json(&outcome)
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| file_system_error(path, "read image", source))
}
