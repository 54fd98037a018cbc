//! snapshot.rs - one-shot CLI that renders a frame of the built-in
//! courtyard scene and writes it out as a binary PPM (P6).
//!
//! USAGE:
//! ```bash
//! cargo run --release --bin snapshot -- \
//!     --width 960 --height 600 --yaw 45 --output shot.ppm
//! ```

use clap::Parser;
use std::{fs, io::Write as _, path::PathBuf};

use gridcast::{demo, Renderer, Screen, Software};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Output image width in pixels
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Output image height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Render quality in (0, 1]: scales the internal resolution
    #[arg(long, default_value_t = 1.0)]
    quality: f32,

    /// Camera heading in degrees (0 = +x, counter-clockwise)
    #[arg(long, default_value_t = 38.7)]
    yaw: f32,

    /// Vertical view shift in render pixels (positive looks up)
    #[arg(long, default_value_t = 0)]
    pitch: i32,

    /// Eye height in cell units
    #[arg(long, default_value_t = 0.5)]
    eye: f32,

    /// File receiving the P6 image
    #[arg(long, value_name = "FILE", default_value = "snapshot.ppm")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let (scene, mut camera) = demo::courtyard();
    let yaw = opts.yaw.to_radians();
    camera.set_direction(glam::Vec2::new(yaw.cos(), yaw.sin()))?;
    camera.pitch = opts.pitch;
    camera.pos.z = opts.eye;

    let mut screen = Screen::new(opts.width, opts.height, opts.quality)?;
    let mut renderer = Software::default();

    screen.clear();
    renderer.render(&mut screen, &scene, &camera);

    write_ppm(&screen, &opts.output)?;
    println!(
        "wrote {}x{} image to {}",
        screen.render_width(),
        screen.render_height(),
        opts.output.display()
    );
    Ok(())
}

/// Dump the RGBA buffer as P6 (the alpha channel is dropped).
fn write_ppm(screen: &Screen, path: &PathBuf) -> anyhow::Result<()> {
    let (w, h) = (screen.render_width(), screen.render_height());
    let mut out = Vec::with_capacity(32 + w * h * 3);
    write!(out, "P6\n{} {}\n255\n", w, h)?;
    for rgba in screen.pixels().chunks_exact(4) {
        out.extend_from_slice(&rgba[..3]);
    }
    fs::write(path, out)?;
    Ok(())
}
