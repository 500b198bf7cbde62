//! Draw a polar heading log as a scaled trajectory image.
//!
//! Reads a plain-text log of `<heading_deg> <steps>` legs, dead-reckons
//! the path, fits it onto the requested canvas, and writes an SVG or
//! PNG depending on the output extension.

use std::path::{Path, PathBuf};

use clap::Parser;
use kiseki_pipeline::{
    LineSink, PolarSegment, Track, TrajectoryConfig, TrajectoryError, Viewport, draw_trajectory,
    emit_frame,
};
use kiseki_render::{RasterCanvas, SvgCanvas};

/// Draw a polar heading log as a scaled trajectory image.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input heading log path.
    #[arg(default_value = "assets/examples/patrol.log")]
    input: PathBuf,

    /// Output image path; the extension picks the format (.svg or .png).
    #[arg(short, long)]
    output: PathBuf,

    /// Canvas size in pixels.
    #[arg(
        long,
        value_name = "WxH",
        default_value_t = format!("{}x{}", Viewport::DEFAULT_WIDTH, Viewport::DEFAULT_HEIGHT),
    )]
    size: String,

    /// Maximum number of legs accepted from the log.
    #[arg(long, default_value_t = TrajectoryConfig::DEFAULT_MAX_SEGMENTS)]
    max_segments: usize,

    /// Draw the canvas border as a frame around the trajectory.
    #[arg(long)]
    frame: bool,

    /// Document title embedded in SVG output.
    #[arg(long)]
    title: Option<String>,

    /// Also write the fitted device-space track as JSON.
    #[arg(long, value_name = "PATH")]
    dump_track: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

/// Parse `--size "WxH"` into a zero-based viewport.
fn parse_size(s: &str) -> Result<Viewport, String> {
    let (w_str, h_str) = s
        .split_once('x')
        .ok_or_else(|| format!("size must be 'WIDTHxHEIGHT', got: '{s}'"))?;

    let width: i32 = w_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{w_str}': {e}"))?;
    let height: i32 = h_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{h_str}': {e}"))?;
    if width < 1 || height < 1 {
        return Err(format!("size must be at least 1x1, got {width}x{height}"));
    }

    Ok(Viewport::new(0, width - 1, 0, height - 1))
}

/// Output image format, chosen from the output file extension.
enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self, String> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            Some(other) => Err(format!(
                "unsupported output extension '{other}' (use .svg or .png)"
            )),
            None => Err("output path needs a .svg or .png extension".to_owned()),
        }
    }
}

// ---------------------------------------------------------------------------
// Heading log parsing
// ---------------------------------------------------------------------------

/// Parse a heading log: one `<heading_deg> <steps>` pair per line.
///
/// Blank lines and lines starting with `#` are skipped. Error messages
/// carry 1-based line numbers.
fn parse_log(text: &str) -> Result<Vec<PolarSegment>, String> {
    let mut segments = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = index + 1;

        let mut parts = line.split_whitespace();
        let (Some(heading_str), Some(steps_str), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!(
                "line {lineno}: expected '<heading_deg> <steps>', got: '{line}'"
            ));
        };

        let heading_deg: f64 = heading_str
            .parse()
            .map_err(|e| format!("line {lineno}: invalid heading '{heading_str}': {e}"))?;
        let steps: i32 = steps_str
            .parse()
            .map_err(|e| format!("line {lineno}: invalid steps '{steps_str}': {e}"))?;
        segments.push(PolarSegment::new(heading_deg, steps));
    }
    Ok(segments)
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

/// Run the pipeline onto `sink`, optionally framing the viewport border.
fn draw_onto<S: LineSink>(
    segments: &[PolarSegment],
    config: &TrajectoryConfig,
    frame: bool,
    sink: &mut S,
) -> Result<Track, TrajectoryError> {
    let track = draw_trajectory(segments, config, sink)?;
    if frame {
        emit_frame(config.viewport, sink);
    }
    Ok(track)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let format = OutputFormat::from_path(&args.output).map_err(|e| format!("--output: {e}"))?;
    let viewport = parse_size(&args.size).map_err(|e| format!("--size: {e}"))?;
    let config = TrajectoryConfig {
        viewport,
        max_segments: args.max_segments,
    };

    eprintln!("Reading heading log from {}", args.input.display());
    let text = std::fs::read_to_string(&args.input)?;
    let segments = parse_log(&text).map_err(|e| format!("{}: {e}", args.input.display()))?;
    eprintln!(
        "Parsed {} legs, canvas {}x{}",
        segments.len(),
        viewport.x_max + 1,
        viewport.y_max + 1,
    );

    let track = match format {
        OutputFormat::Svg => {
            let mut canvas = SvgCanvas::new(viewport);
            if let Some(title) = &args.title {
                canvas = canvas.with_title(title.as_str());
            }
            let track = draw_onto(&segments, &config, args.frame, &mut canvas)?;
            eprintln!("Writing SVG to {}", args.output.display());
            std::fs::write(&args.output, canvas.to_svg())?;
            track
        }
        OutputFormat::Png => {
            let mut canvas = RasterCanvas::new(viewport)?;
            let track = draw_onto(&segments, &config, args.frame, &mut canvas)?;
            eprintln!("Writing PNG to {}", args.output.display());
            canvas.into_image().save(&args.output)?;
            track
        }
    };

    if let Some(path) = &args.dump_track {
        eprintln!("Writing fitted track to {}", path.display());
        std::fs::write(path, serde_json::to_string_pretty(&track)?)?;
    }

    eprintln!("Drew {} points", track.len());
    Ok(())
}
