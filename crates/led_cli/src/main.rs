use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use led_render::{
    encode_gif, BoardConfig, BoardRenderer, FrameSequence, Playback, Scene, ScenePlaylist,
    TileStyle,
};

const PLAYBACK_TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(author, version, about = "Render simulated LED board scenes to stills and animations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the first scene to a PNG preview
    Preview(PreviewArgs),
    /// Step through the scenes in real time, re-writing the preview image
    Play(PlayArgs),
    /// Export all scenes as a looping GIF animation
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Scene text file; blank lines separate scenes, each scene is up to 4 lines
    input: PathBuf,
    /// Output image path
    #[arg(short, long, default_value = "led_board.png")]
    output: PathBuf,
    /// Target display width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,
    #[command(flatten)]
    board: BoardSettings,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Scene text file; blank lines separate scenes, each scene is up to 4 lines
    input: PathBuf,
    /// Image path re-written for every scene shown
    #[arg(short, long, default_value = "led_frame.png")]
    output: PathBuf,
    /// Seconds each scene stays on the board
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=10))]
    seconds: u64,
    /// Target display width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Only play the first scene
    #[arg(long, default_value_t = false)]
    single: bool,
    #[command(flatten)]
    board: BoardSettings,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Scene text file; blank lines separate scenes, each scene is up to 4 lines
    input: PathBuf,
    /// Output GIF path
    #[arg(short, long, default_value = "led_board.gif")]
    output: PathBuf,
    /// Seconds each scene is displayed in the animation
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..=10))]
    seconds: u64,
    /// Only export the first scene
    #[arg(long, default_value_t = false)]
    single: bool,
    #[command(flatten)]
    board: BoardSettings,
}

#[derive(Parser, Debug, Clone)]
struct BoardSettings {
    /// Tile style of the simulated board
    #[arg(long, value_enum, default_value = "bordered")]
    style: StyleChoice,
    /// Dot diameter in pixels
    #[arg(long, default_value_t = 10)]
    dot_size: u32,
    /// Spacing between dots within a tile
    #[arg(long, default_value_t = 4)]
    dot_gap: u32,
    /// Inner tile padding (bordered style only)
    #[arg(long, default_value_t = 6)]
    tile_pad: u32,
    /// Gap between tiles (bordered style only)
    #[arg(long, default_value_t = 6)]
    tile_gap: u32,
    /// Outer padding around the whole board
    #[arg(long, default_value_t = 10)]
    outer_pad: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StyleChoice {
    Bordered,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Play(args) => play(args),
        Commands::Export(args) => export(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let playlist = load_playlist(&args.input, false)?;
    let renderer = BoardRenderer::new(args.board.to_config());

    let first = playlist.first().context("scene file contained no scenes")?;
    let frame = scale_to_width(&renderer.render_scene(first), args.width);
    frame.save(&args.output).with_context(|| format!("failed to write {:?}", args.output))?;

    println!("wrote preview to {}", args.output.display());
    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    let playlist = load_playlist(&args.input, args.single)?;
    let renderer = BoardRenderer::new(args.board.to_config());
    let sequence =
        FrameSequence::new(playlist.render_all(&renderer), Duration::from_secs(args.seconds));

    let progress = ProgressBar::new(sequence.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scenes",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut playback = Playback::new(&sequence);
    playback.start(Instant::now());
    show_current(&playback, &sequence, &args.output, args.width, &progress)?;

    while playback.is_playing() {
        std::thread::sleep(PLAYBACK_TICK);
        if playback.update(Instant::now()) {
            show_current(&playback, &sequence, &args.output, args.width, &progress)?;
        }
    }

    progress.finish_with_message(format!("played {} scene(s)", sequence.len()));
    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let playlist = load_playlist(&args.input, args.single)?;
    let renderer = BoardRenderer::new(args.board.to_config());

    let progress = ProgressBar::new(playlist.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut frames = Vec::with_capacity(playlist.len());
    for scene in playlist.scenes() {
        frames.push(renderer.render_scene(scene));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let sequence = FrameSequence::new(frames, Duration::from_secs(args.seconds));
    let bytes = encode_gif(&sequence).context("failed to encode animation")?;
    fs::write(&args.output, &bytes)
        .with_context(|| format!("failed to write {:?}", args.output))?;

    println!(
        "wrote {} frame(s) at {}s per scene to {}",
        sequence.len(),
        args.seconds,
        args.output.display()
    );
    Ok(())
}

fn show_current(
    playback: &Playback,
    sequence: &FrameSequence,
    output: &Path,
    width: u32,
    progress: &ProgressBar,
) -> Result<()> {
    let Some(index) = playback.current_frame() else {
        return Ok(());
    };
    let frame = sequence.frame(index).context("playback frame out of range")?;
    scale_to_width(frame, width)
        .save(output)
        .with_context(|| format!("failed to write {:?}", output))?;
    progress.set_position(index as u64 + 1);
    Ok(())
}

/// Read scenes from a text file: blank lines separate scenes, every scene is
/// at most 4 lines. An empty file yields one blank scene.
fn load_playlist(path: &Path, single: bool) -> Result<ScenePlaylist> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {:?}", path))?;

    let mut playlist = ScenePlaylist::new();
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                playlist.push(Scene::new(block.drain(..)));
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        playlist.push(Scene::new(block));
    }

    if playlist.is_empty() {
        playlist.push(Scene::blank());
    }
    if single {
        playlist.truncate_to_first();
    }
    Ok(playlist)
}

impl BoardSettings {
    fn to_config(&self) -> BoardConfig {
        let mut config = BoardConfig::default();
        config.style = self.style.to_style();
        config.dot_size = self.dot_size;
        config.dot_gap = self.dot_gap;
        config.tile_pad = self.tile_pad;
        config.tile_gap = self.tile_gap;
        config.outer_pad = self.outer_pad;
        config
    }
}

impl StyleChoice {
    fn to_style(self) -> TileStyle {
        match self {
            StyleChoice::Bordered => TileStyle::Bordered,
            StyleChoice::Compact => TileStyle::Compact,
        }
    }
}

/// Nearest-neighbor scale to the target display width so the dots stay crisp.
fn scale_to_width(frame: &RgbImage, width: u32) -> RgbImage {
    if width == 0 || frame.width() == 0 || frame.width() == width {
        return frame.clone();
    }
    let height =
        ((frame.height() as u64 * width as u64) / frame.width() as u64).max(1) as u32;
    image::imageops::resize(frame, width, height, image::imageops::FilterType::Nearest)
}
