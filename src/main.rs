use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use faceted::engine::{Engine, RenderMode};
use faceted::render::BYTES_PER_PIXEL;
use faceted::window::{FrameLimiter, Window, WindowEvent};

/// Render a triangular OBJ model with flat shading.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the OBJ model file
    model: PathBuf,

    /// Framebuffer and window width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Framebuffer and window height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Draw triangle outlines instead of filled faces
    #[arg(long)]
    wireframe: bool,

    /// Render a single frame to this PNG file and exit without opening
    /// a window
    #[arg(long, value_name = "PATH")]
    screenshot: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut engine = Engine::new(args.width, args.height);
    if args.wireframe {
        engine.set_render_mode(RenderMode::Wireframe);
    }
    if let Err(err) = engine.load_model(&args.model) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    let result = match args.screenshot {
        Some(path) => screenshot(&mut engine, &path),
        None => run(&mut engine, &args.model),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// The interactive frame loop: render, present, poll, until quit.
fn run(engine: &mut Engine, model_path: &std::path::Path) -> Result<(), String> {
    let title = format!("faceted - {}", model_path.display());
    let mut window = Window::new(&title, engine.width(), engine.height())?;
    let mut limiter = FrameLimiter::new();
    let mut pixels =
        vec![0u8; engine.width() as usize * engine.height() as usize * BYTES_PER_PIXEL];

    loop {
        if window.poll_events() == WindowEvent::Quit {
            return Ok(());
        }

        engine.render(&mut pixels);
        window.present(&pixels)?;
        limiter.wait();
    }
}

/// Render one frame headlessly and save it as a PNG.
fn screenshot(engine: &mut Engine, path: &std::path::Path) -> Result<(), String> {
    let (width, height) = (engine.width(), engine.height());
    let mut pixels = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
    engine.render(&mut pixels);

    // Framebuffer bytes are B,G,R,A; the PNG encoder wants R,G,B,A.
    for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.swap(0, 2);
    }

    let image = image::RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| "framebuffer size mismatch".to_string())?;
    image.save(path).map_err(|e| e.to_string())
}
