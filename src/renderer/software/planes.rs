use glam::Vec2;

use crate::{
    renderer::software::{light::shade, Software},
    renderer::Screen,
    world::{Appearance, Camera, PlaneLayer, Scene, Side, Texture},
};

/// World-space cursor marched across one screen row; one add per pixel.
#[derive(Clone, Copy)]
struct RowCursor {
    world: Vec2,
    step: Vec2,
}

impl RowCursor {
    #[inline(always)]
    fn advance(&mut self) {
        self.world += self.step;
    }
}

impl Software {
    /// Floor/ceiling pass: horizontal rows below/above the horizon,
    /// reverse-projected into world space and sampled per pixel.
    ///
    /// Runs last; the `row_dist < stored` test means it only fills
    /// pixels everything else left empty or farther away.
    pub(crate) fn draw_planes(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera) {
        let w = screen.render_width();
        let h = screen.render_height() as i32;
        let hf = h as f32;
        let horizon = Self::horizon(screen, camera);

        let row_start = if scene.ceiling.is_some() {
            0
        } else {
            horizon.clamp(0, h)
        };
        let row_end = if scene.floor.is_some() {
            h
        } else {
            horizon.clamp(0, h)
        };

        // screen-edge ray directions; everything in between is linear
        let half_plane = camera.plane() * (screen.aspect() * 0.5);
        let dir_l = camera.direction() - half_plane;
        let dir_r = camera.direction() + half_plane;
        let origin = camera.pos.truncate();

        for y in row_start..row_end {
            let is_floor = y > horizon;
            let Some(layer) = (if is_floor { scene.floor } else { scene.ceiling }) else {
                continue;
            };

            // vertical distance (in pixels) from the eye to this plane
            let pos_z = if is_floor {
                camera.pos.z * hf
            } else {
                hf * (layer.height - camera.pos.z)
            };

            let mut row_dist = (pos_z / (y - horizon) as f32).abs();
            if !row_dist.is_finite() {
                row_dist = 1e3;
            }

            let mut cursor = RowCursor {
                world: origin + dir_l * row_dist,
                step: (dir_r - dir_l) * (row_dist / w as f32),
            };
            let lit = shade(scene, camera, row_dist, Side::X);
            let row = y as usize;

            // branch on the appearance once per row, not per pixel
            match layer.appearance {
                Appearance::Color(c) => {
                    let rgba = lit.apply(c);
                    for x in 0..w {
                        screen.put_tested(x, row, row_dist, rgba);
                        cursor.advance();
                    }
                }
                Appearance::Texture(id) if scene.textures.texture_or_missing(id).loaded() => {
                    let tex = scene.textures.texture_or_missing(id);
                    for x in 0..w {
                        let px = sample(tex, &layer, cursor.world);
                        screen.put_tested(x, row, row_dist, lit.apply_rgba(px));
                        cursor.advance();
                    }
                }
                Appearance::Texture(id) => {
                    let rgba = lit.apply(scene.textures.texture_or_missing(id).fallback);
                    for x in 0..w {
                        screen.put_tested(x, row, row_dist, rgba);
                        cursor.advance();
                    }
                }
            }
        }
    }
}

/// Tile-sample a plane texture at world point `p`: `|fmod| / cell` maps
/// each coordinate into [0, 1) of the tiling period.
#[inline(always)]
fn sample(tex: &Texture, layer: &PlaneLayer, p: Vec2) -> [u8; 4] {
    let tx = (tex.w as f32 * ((p.x % layer.cell_w) / layer.cell_w).abs()) as usize;
    let ty = (tex.h as f32 * ((p.y % layer.cell_h) / layer.cell_h).abs()) as usize;
    // rounding must not escape the last texel
    tex.rgba(tx.min(tex.w - 1), ty.min(tex.h - 1))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
