// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Headless host: open an image, replay pointer/wheel events, save the crop.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;

use happy_crop::app::script::parse_script;
use happy_crop::config::{AppConfig, load_config};
use happy_crop::constant::{CROPPED_SUFFIX, DEFAULT_SAVE_EXT};
use happy_crop::{CropMessage, CropSession, Outcome};

/// Crop a region out of an image by replaying a rubber-band drag.
#[derive(Debug, Clone, Parser)]
#[command(name = "happy-crop", version, about, long_about = None)]
pub struct Args {
    /// Image to crop.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the crop; the extension picks the format.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Press point on the visible canvas.
    #[arg(long, value_name = "X,Y", value_parser = parse_point,
          requires = "to", required_unless_present = "events")]
    pub from: Option<(f32, f32)>,

    /// Release point on the visible canvas.
    #[arg(long, value_name = "X,Y", value_parser = parse_point, requires = "from")]
    pub to: Option<(f32, f32)>,

    /// Scroll offset applied before the drag.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub scroll: Option<(f32, f32)>,

    /// Event script to replay instead of --from/--to.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["from", "to"])]
    pub events: Option<PathBuf>,

    /// Explicit config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_point(value: &str) -> Result<(f32, f32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x '{x}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y '{y}'"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let handle = load_config(args.config.as_deref());
    for warning in &handle.warnings {
        log::warn!("Config: {warning}");
    }
    if let Some(source) = &handle.source {
        log::debug!("Using config {}", source.display());
    }
    let config = handle.config;

    let mut session = CropSession::open(&args.file, &config)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    let mut messages = build_messages(&args)?;
    if let Some(target) = final_save_target(&args, &config, &messages)? {
        messages.push(CropMessage::Save(target));
    }

    for message in messages {
        match session.update(message) {
            Ok(Outcome::Saved(path)) => println!("{}", path.display()),
            Ok(Outcome::Cropped(image)) => {
                log::info!("Cropped {}x{}", image.width(), image.height());
            }
            Ok(Outcome::Updated) => {}
            Err(err) => return Err(err).context("crop failed"),
        }
    }

    Ok(())
}

fn build_messages(args: &Args) -> anyhow::Result<Vec<CropMessage>> {
    let mut messages = Vec::new();

    if let Some((x, y)) = args.scroll {
        messages.push(CropMessage::ScrollTo { x, y });
    }

    if let Some(path) = &args.events {
        let script = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        messages.extend(
            parse_script(&script).with_context(|| format!("in {}", path.display()))?,
        );
        return Ok(messages);
    }

    let (Some((x0, y0)), Some((x1, y1))) = (args.from, args.to) else {
        bail!("either --events or both --from and --to are required");
    };
    messages.extend([
        CropMessage::Press { x: x0, y: y0 },
        CropMessage::Drag { x: x1, y: y1 },
        CropMessage::Release,
    ]);

    Ok(messages)
}

/// Where to save once all events are replayed, `None` when the event
/// script already saves. A script `save` and `--output` are exclusive.
fn final_save_target(
    args: &Args,
    config: &AppConfig,
    messages: &[CropMessage],
) -> anyhow::Result<Option<PathBuf>> {
    let script_saves = messages.iter().any(|m| matches!(m, CropMessage::Save(_)));

    match (&args.output, script_saves) {
        (Some(output), true) => bail!(
            "--output {} conflicts with the 'save' command in the event script",
            output.display()
        ),
        (None, true) => Ok(None),
        (Some(output), false) => Ok(Some(output.clone())),
        (None, false) => Ok(Some(default_output_path(&args.file, config))),
    }
}

/// `<dir>/<stem>_cropped.png`, where `dir` is the configured output
/// directory when it exists and the input's directory otherwise.
fn default_output_path(input: &Path, config: &AppConfig) -> PathBuf {
    let dir = config
        .default_output_dir
        .as_ref()
        .filter(|dir| dir.is_dir())
        .cloned()
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());

    dir.join(format!("{stem}{CROPPED_SUFFIX}.{DEFAULT_SAVE_EXT}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("20,30"), Ok((20.0, 30.0)));
        assert_eq!(parse_point(" -5.5 , 7 "), Ok((-5.5, 7.0)));
        assert!(parse_point("20").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn from_to_become_a_drag() {
        let args = Args::parse_from(["happy-crop", "in.png", "--from", "1,2", "--to", "3,4"]);
        assert_eq!(
            build_messages(&args).unwrap(),
            vec![
                CropMessage::Press { x: 1.0, y: 2.0 },
                CropMessage::Drag { x: 3.0, y: 4.0 },
                CropMessage::Release,
            ]
        );
    }

    #[test]
    fn events_and_points_conflict() {
        let parsed = Args::try_parse_from([
            "happy-crop",
            "in.png",
            "--events",
            "e.txt",
            "--from",
            "1,2",
            "--to",
            "3,4",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_flag_conflicts_with_script_save() {
        let args = Args::parse_from(["happy-crop", "in.png", "--events", "e.txt", "-o", "b.png"]);
        let messages = [
            CropMessage::Press { x: 1.0, y: 1.0 },
            CropMessage::Release,
            CropMessage::Save(PathBuf::from("a.png")),
        ];

        let err = final_save_target(&args, &AppConfig::default(), &messages).unwrap_err();
        assert!(err.to_string().contains("b.png"));
    }

    #[test]
    fn final_save_target_prefers_output_then_default() {
        let config = AppConfig::default();
        let drag = [CropMessage::Press { x: 1.0, y: 1.0 }, CropMessage::Release];

        let args = Args::parse_from(["happy-crop", "/data/in.png", "--events", "e.txt"]);
        assert_eq!(
            final_save_target(&args, &config, &drag).unwrap(),
            Some(PathBuf::from("/data/in_cropped.png"))
        );
        let saving = [CropMessage::Save(PathBuf::from("a.png"))];
        assert_eq!(final_save_target(&args, &config, &saving).unwrap(), None);

        let args = Args::parse_from(["happy-crop", "in.png", "--events", "e.txt", "-o", "b.png"]);
        assert_eq!(
            final_save_target(&args, &config, &drag).unwrap(),
            Some(PathBuf::from("b.png"))
        );
    }

    #[test]
    fn default_output_falls_back_to_input_dir() {
        let config = AppConfig {
            default_output_dir: Some(PathBuf::from("/nonexistent/happy-crop")),
            ..AppConfig::default()
        };
        assert_eq!(
            default_output_path(Path::new("/data/scan.jpg"), &config),
            PathBuf::from("/data/scan_cropped.png")
        );
    }
}
