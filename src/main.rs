// FormCheck CLI binary

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use formcheck_lib::constants::{MAX_UPLOAD_BYTES, VIDEO_EXTENSIONS};
use formcheck_lib::{assess_video, tools, AssessmentOptions, SportCategory, SUPPORTED_SPORTS};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(about = "FormCheck - sport performance video assessment", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a sport performance video
    Assess {
        /// Video file to assess
        video: PathBuf,
        /// Sport category selected by the athlete
        #[arg(short, long, value_enum)]
        sport: SportCategory,
        /// Number of frames to sample
        #[arg(long, default_value_t = formcheck_lib::constants::DEFAULT_SAMPLE_FRAMES)]
        frames: usize,
        /// Stub pose-detection probability
        #[arg(long, default_value_t = formcheck_lib::constants::DEFAULT_DETECTION_PROBABILITY)]
        detection_probability: f64,
        /// Fixed RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported sport categories
    Sports,

    /// Check that ffmpeg/ffprobe are available
    Tools,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            video,
            sport,
            frames,
            detection_probability,
            seed,
            json,
        } => cmd_assess(video, sport, frames, detection_probability, seed, json),
        Commands::Sports => cmd_sports(),
        Commands::Tools => cmd_tools(),
    }
}

fn cmd_assess(
    video: PathBuf,
    sport: SportCategory,
    frames: usize,
    detection_probability: f64,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // Upload-layer checks: format and size, before the pipeline runs
    let extension = video
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        anyhow::bail!(
            "Unsupported file format '{}'. Please use MP4, AVI, MOV, or MKV.",
            extension
        );
    }

    let size = std::fs::metadata(&video)
        .map_err(|_| anyhow::anyhow!("Video file not found: {}", video.display()))?
        .len();
    if size > MAX_UPLOAD_BYTES {
        anyhow::bail!("File too large. Maximum size is 100MB.");
    }

    let options = AssessmentOptions {
        sample_frames: frames,
        detection_probability,
        seed,
    };

    let result = assess_video(&video, sport, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Assessment: {}", result.sport);
    println!();
    println!("Rating:          {:.1}", result.rating);
    println!("Frames sampled:  {}", result.frames_sampled);
    println!("Predicted sport: {} (informational)", result.predicted_sport);
    println!("Processed at:    {}", result.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("Metrics:");
    for (key, value) in &result.metrics {
        println!("  {:<28} {:>8.3}", key, value);
    }

    Ok(())
}

fn cmd_sports() -> Result<()> {
    println!("Supported sport categories:");
    println!();
    for sport in SUPPORTED_SPORTS {
        println!("  {:<16} {}", cli_name(sport), sport.label());
    }
    println!();
    println!("Use the left-hand name with --sport.");
    Ok(())
}

fn cmd_tools() -> Result<()> {
    for tool in ["ffmpeg", "ffprobe"] {
        let status = if tools::is_tool_available(tool) {
            "ok"
        } else {
            "MISSING"
        };
        println!("{:<10} {}", tool, status);
    }
    Ok(())
}

/// clap's kebab-case value name for a sport
fn cli_name(sport: SportCategory) -> &'static str {
    match sport {
        SportCategory::JavelinThrow => "javelin-throw",
        SportCategory::TableTennis => "table-tennis",
        SportCategory::Archery => "archery",
        SportCategory::PushUps => "push-ups",
        SportCategory::DiscusThrow => "discus-throw",
        SportCategory::HighJump => "high-jump",
        SportCategory::Other => "other",
    }
}
