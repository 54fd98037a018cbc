//! Interactive viewer for the built-in courtyard scene.
//!
//! ```bash
//! cargo run --release --bin explore
//! ```
//!
//! Arrows/WASD move and turn (Alt + ←/→ strafes), R/F tilts the view,
//! Q/E floats the eye up/down, Esc quits.

use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use gridcast::{demo, Renderer, Screen, Software};

const W: usize = 960;
const H: usize = 600;
const QUALITY: f32 = 0.5;

const MOVE_SPEED: f32 = 2.6; // cells / second
const TURN_SPEED: f32 = 2.2; // radians / second
const PITCH_SPEED: f32 = 120.0; // pixels / second

fn main() -> anyhow::Result<()> {
    let (scene, mut camera) = demo::courtyard();

    let mut screen = Screen::new(W, H, QUALITY)?;
    let mut renderer = Software::default();

    // minifb wants packed 0xAARRGGBB words; converted from the RGBA bytes
    // once per frame
    let mut packed = vec![0u32; screen.render_width() * screen.render_height()];

    let mut win = Window::new("gridcast courtyard", W, H, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last
    let mut last_frame = Instant::now();

    let mut pitch = 0.0f32;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_frame.elapsed().as_secs_f32().min(0.1);
        last_frame = Instant::now();

        /* movement --------------------------------------------------------- */
        let mut forward = 0.0;
        let mut strafe = 0.0;
        let mut turn = 0.0;

        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            forward -= 1.0;
        }

        let alt = win.is_key_down(Key::LeftAlt) || win.is_key_down(Key::RightAlt);
        if alt {
            /* Alt + ←/→  = strafe */
            if win.is_key_down(Key::Left) {
                strafe -= 1.0;
            }
            if win.is_key_down(Key::Right) {
                strafe += 1.0;
            }
        } else {
            /* plain ←/→   = turn   */
            if win.is_key_down(Key::Left) {
                turn += 1.0;
            }
            if win.is_key_down(Key::Right) {
                turn -= 1.0;
            }
        }

        /* WASD strafing mirrors arrow-key strafing */
        if win.is_key_down(Key::A) {
            strafe -= 1.0;
        }
        if win.is_key_down(Key::D) {
            strafe += 1.0;
        }

        camera.turn(turn * TURN_SPEED * dt);
        camera.step(forward * MOVE_SPEED * dt, strafe * MOVE_SPEED * dt);
        // stay inside the courtyard walls
        camera.pos.x = camera.pos.x.clamp(1.2, 10.8);
        camera.pos.y = camera.pos.y.clamp(1.2, 10.8);

        /* view tilt & eye height ------------------------------------------- */
        if win.is_key_down(Key::R) {
            pitch += PITCH_SPEED * dt;
        }
        if win.is_key_down(Key::F) {
            pitch -= PITCH_SPEED * dt;
        }
        pitch = pitch.clamp(-(H as f32) / 2.0, H as f32 / 2.0);
        camera.pitch = (pitch * QUALITY) as i32;

        if win.is_key_down(Key::Q) {
            camera.elevate(MOVE_SPEED * 0.5 * dt);
        }
        if win.is_key_down(Key::E) {
            camera.elevate(-MOVE_SPEED * 0.5 * dt);
        }
        camera.pos.z = camera.pos.z.clamp(0.1, 0.9);

        /* draw */
        let t0 = Instant::now();
        screen.clear();
        renderer.render(&mut screen, &scene, &camera);
        acc_time += t0.elapsed();
        acc_frames += 1;

        screen.present(|pixels, w, h| {
            for (word, rgba) in packed.iter_mut().zip(pixels.chunks_exact(4)) {
                *word = 0xFF00_0000
                    | (rgba[0] as u32) << 16
                    | (rgba[1] as u32) << 8
                    | rgba[2] as u32;
            }
            win.update_with_buffer(&packed, w, h).unwrap();
        });

        // ─────────── accumulate & report every ~3 s ────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
