// ============================================================================
// uvbake CLI: drive the editor headlessly from command-line arguments
// ============================================================================
//
// Usage examples:
//   uvbake --topology shirt-uv.json --image logo.png --output shirt.png
//   uvbake -t shirt-uv.json -i logo.png --mode scale --drag 100,100:100,140
//   uvbake -t shirt-uv.json -i logo.png --wheel up --wheel up --preview preview.png
//
// Drags run first (in order, all in --mode), then wheel steps, then a final
// apply. Every publish overwrites --output; the final texture is written
// again and any failure to write it is an error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::config::EditorConfig;
use crate::domain::{DragMode, Point, Viewport, WheelDirection};
use crate::publish::{BakedTexture, FilePublisher};
use crate::session::{Editor, EditorStatus};
use crate::session::loader::{read_image_file, read_topology_file};

/// Headless UV texture projection.
///
/// Loads a UV layout and a design image, applies the given edits, and writes
/// the 1024x1024 baked texture as PNG.
#[derive(Parser, Debug)]
#[command(name = "uvbake", about = "Bake a design image onto a model's UV layout")]
pub struct CliArgs {
    /// UV topology JSON: {"coordinates": [{"u":..,"v":..}], "triangles": [[i,j,k]]}
    #[arg(short, long, value_name = "FILE.json")]
    pub topology: PathBuf,

    /// Design image to place (PNG or JPEG)
    #[arg(short, long, value_name = "FILE")]
    pub image: PathBuf,

    /// Baked texture output path. Defaults to a timestamped name.
    #[arg(short, long, value_name = "FILE.png")]
    pub output: Option<PathBuf>,

    /// Also write the interactive preview (wireframe + overlay)
    #[arg(long, value_name = "FILE.png")]
    pub preview: Option<PathBuf>,

    /// Interactive viewport size, e.g. 1024x1024. Overrides the config file.
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Drag mode used by every --drag
    #[arg(short, long, default_value = "move")]
    pub mode: DragMode,

    /// Pointer drag from x0,y0 to x1,y1 in surface pixels. Repeatable.
    #[arg(long, value_name = "X0,Y0:X1,Y1", value_parser = parse_drag)]
    pub drag: Vec<(Point, Point)>,

    /// Wheel step: up (zoom in) or down (zoom out). Repeatable.
    #[arg(long, value_parser = parse_wheel)]
    pub wheel: Vec<WheelDirection>,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "FILE.json")]
    pub config: Option<PathBuf>,

    /// Store the effective settings (including --viewport) as the user config
    #[arg(long)]
    pub save_config: bool,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Viewport::new(w, h).map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_drag(s: &str) -> Result<(Point, Point), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected X0,Y0:X1,Y1, got '{s}'"))?;
    Ok((parse_point(from)?, parse_point(to)?))
}

fn parse_wheel(s: &str) -> Result<WheelDirection, String> {
    match s.to_ascii_lowercase().as_str() {
        "up" | "in" => Ok(WheelDirection::Up),
        "down" | "out" => Ok(WheelDirection::Down),
        other => Err(format!("expected up or down, got '{other}'")),
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(
        chrono::Local::now()
            .format("Texture_%Y-%m-%d_%H-%M-%S.png")
            .to_string(),
    )
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load_from(path),
        None => Ok(EditorConfig::load()),
    }
}

// ============================================================================
// Public entry point
// ============================================================================

/// Run the CLI and return an OS exit code
pub fn run(args: CliArgs) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: could not start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run_inner(&args)) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_inner(args: &CliArgs) -> anyhow::Result<PathBuf> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(viewport) = args.viewport {
        config.viewport_width = viewport.width();
        config.viewport_height = viewport.height();
    }
    if args.save_config {
        config.save();
    }

    let output = args.output.clone().unwrap_or_else(default_output_path);
    let mut editor = Editor::new(&config, FilePublisher::new(&output))?;
    let viewport = editor.viewport();

    let ticket = editor.begin_model_load();
    let topology = read_topology_file(&args.topology).await;
    editor.finish_model_load(ticket, topology.map_err(|e| format!("{e:#}")))?;
    if let EditorStatus::Failed(message) = editor.status() {
        anyhow::bail!("model load failed: {message}");
    }

    let ticket = editor.begin_image_load();
    let bytes = read_image_file(&args.image).await?;
    editor
        .finish_image_load(ticket, &bytes)
        .with_context(|| format!("Failed to load image: {}", args.image.display()))?;

    editor.set_mode(args.mode);
    for (from, to) in &args.drag {
        editor.pointer_down(viewport.invert_pointer(from.x, from.y));
        editor.pointer_move(viewport.invert_pointer(to.x, to.y))?;
        editor.pointer_up()?;
    }
    for &direction in &args.wheel {
        editor.wheel(direction)?;
    }
    let texture = editor
        .apply()?
        .context("No overlay image to bake")?;
    texture
        .save(&output)
        .with_context(|| format!("Failed to write texture: {}", output.display()))?;
    log::info!("{}", editor.summary());

    if let Some(path) = &args.preview {
        BakedTexture::encode(editor.preview())?
            .save(path)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        let vp = parse_viewport("2048x800").unwrap();
        assert_eq!((vp.width(), vp.height()), (2048, 800));
        assert!(parse_viewport("0x10").is_err());
        assert!(parse_viewport("1024").is_err());
    }

    #[test]
    fn test_parse_drag() {
        let (from, to) = parse_drag("100,100:150,120").unwrap();
        assert_eq!(from, Point::new(100.0, 100.0));
        assert_eq!(to, Point::new(150.0, 120.0));
        assert!(parse_drag("100,100").is_err());
    }

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "uvbake", "-t", "uv.json", "-i", "logo.png", "--mode", "rotate", "--drag",
            "0,0:10,0", "--wheel", "up", "--wheel", "down",
        ])
        .unwrap();
        assert_eq!(args.mode, DragMode::Rotate);
        assert_eq!(args.drag.len(), 1);
        assert_eq!(args.wheel, vec![WheelDirection::Up, WheelDirection::Down]);
        assert!(!args.save_config);
    }

    #[tokio::test]
    async fn test_run_writes_texture_and_preview() {
        let dir = tempfile::tempdir().unwrap();
        let topology = dir.path().join("uv.json");
        std::fs::write(
            &topology,
            r#"{"coordinates": [{"u": 0, "v": 0}, {"u": 1, "v": 0}, {"u": 0, "v": 1}],
                "triangles": [[0, 1, 2]]}"#,
        )
        .unwrap();
        let image_path = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(20, 20, image::Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .unwrap();
        let config_path = dir.path().join("config.json");
        EditorConfig::default().save_to(&config_path).unwrap();

        let output = dir.path().join("out.png");
        let preview = dir.path().join("preview.png");
        let args = CliArgs {
            topology,
            image: image_path,
            output: Some(output.clone()),
            preview: Some(preview.clone()),
            viewport: Some(Viewport::new(256, 256).unwrap()),
            mode: DragMode::Move,
            drag: vec![(Point::new(0.0, 0.0), Point::new(32.0, 0.0))],
            wheel: vec![WheelDirection::Up],
            config: Some(config_path),
            save_config: false,
        };
        assert_eq!(run_inner(&args).await.unwrap(), output);

        let baked = image::open(&output).unwrap();
        assert_eq!((baked.width(), baked.height()), (1024, 1024));
        let preview = image::open(&preview).unwrap();
        assert_eq!((preview.width(), preview.height()), (256, 256));
    }

    #[tokio::test]
    async fn test_run_fails_when_output_cannot_be_written() {
        let dir = tempfile::tempdir().unwrap();
        let topology = dir.path().join("uv.json");
        std::fs::write(&topology, r#"{"coordinates": [], "triangles": []}"#).unwrap();
        let image_path = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]))
            .save(&image_path)
            .unwrap();
        let config_path = dir.path().join("config.json");
        EditorConfig::default().save_to(&config_path).unwrap();

        let output = dir.path().join("missing_dir").join("out.png");
        let args = CliArgs {
            topology,
            image: image_path,
            output: Some(output.clone()),
            preview: None,
            viewport: Some(Viewport::new(64, 64).unwrap()),
            mode: DragMode::Move,
            drag: vec![],
            wheel: vec![],
            config: Some(config_path),
            save_config: false,
        };
        let err = run_inner(&args).await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to write texture"));
        assert!(!output.exists());
    }
}
