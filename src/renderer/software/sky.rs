use glam::Vec2;

use crate::{
    renderer::software::{light::shade, Software},
    renderer::Screen,
    world::{Appearance, Camera, Scene, Side},
};

impl Software {
    /// Skybox pass. Runs first and writes **pixels only** — the depth
    /// buffer stays at `+∞`, so every later pass overdraws the sky
    /// wherever there is geometry.
    ///
    /// A textured sky is a horizontally repeating band: each column
    /// fires the wall-pass ray direction from the cell center (0.5, 0.5)
    /// and samples the texture column where the ray first leaves that
    /// cell, which makes the band's horizontal origin a pure function of
    /// the camera yaw.
    pub(crate) fn draw_sky(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera) {
        let Some(appearance) = scene.skybox else {
            return;
        };
        let w = screen.render_width();
        let h = screen.render_height() as i32;
        let horizon = Self::horizon(screen, camera).clamp(0, h);

        // the sky is infinitely far: the falloff bottoms out on ambient
        let lit = shade(scene, camera, f32::INFINITY, Side::X);

        let tex = match appearance {
            Appearance::Color(c) => {
                fill_band(screen, w, horizon, lit.apply(c));
                return;
            }
            Appearance::Texture(id) => scene.textures.texture_or_missing(id),
        };
        if !tex.loaded() {
            fill_band(screen, w, horizon, lit.apply(tex.fallback));
            return;
        }

        let dir = camera.direction();
        let plane = camera.plane() * screen.aspect();

        for x in 0..w {
            let camera_x = x as f32 / w as f32 - 0.5;
            let ray_dir = dir + plane * camera_x;
            self.ray.aim(Vec2::new(0.5, 0.5), ray_dir, 1.0);

            // nearer cell edge picks the sampled face, ×2 remaps the
            // half-cell distance into (0, ~1]
            let sd = self.ray.side_dist;
            let (dist, wall_x) = if sd.x < sd.y {
                (sd.x, 0.5 + sd.x * ray_dir.y)
            } else {
                (sd.y, 0.5 + sd.y * ray_dir.x)
            };
            let wall_x = wall_x - wall_x.floor();
            let tex_x = ((wall_x * tex.w as f32) as usize).min(tex.w - 1);

            let perp = dist * 2.0;
            let band_h = tex.h as f32 / perp;
            let y0 = (horizon as f32 - band_h).floor() as i32;

            // textured band up to the horizon, no depth writes
            let step = perp; // = tex.h / band_h
            let mut tex_pos = if y0 < 0 { -y0 as f32 * step } else { 0.0 };
            for y in y0.max(0)..horizon {
                let tex_y = tex_pos as usize % tex.h;
                tex_pos += step;
                let px = tex.rgba(tex_x, tex_y);
                screen.put(x, y as usize, lit.apply_rgba(px));
            }
        }
    }
}

/// Flat sky: fill everything above the horizon, pixels only.
fn fill_band(screen: &mut Screen, w: usize, horizon: i32, rgba: [u8; 4]) {
    for y in 0..horizon.max(0) as usize {
        for x in 0..w {
            screen.put(x, y, rgba);
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
