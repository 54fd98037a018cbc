use crate::{
    renderer::software::{
        column,
        light::{shade, Shade},
        Software,
    },
    renderer::Screen,
    world::{Appearance, Camera, Scene, Side, SpriteFlags},
};

impl Software {
    /// Sprite pass: inverse camera transform per entity, then one
    /// depth-tested textured column per covered screen column.
    ///
    /// Runs after the walls so their depths occlude sprite columns; a
    /// sprite in front wins the per-pixel test with its own (smaller)
    /// `transform_y`. Texels below the opacity threshold fall through
    /// without touching depth.
    pub(crate) fn draw_sprites(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera) {
        let w = screen.render_width();
        let wf = w as f32;
        let hf = screen.render_height() as f32;
        let aspect = screen.aspect();

        // camera basis, inverted once for all sprites
        let d = camera.direction();
        let p = camera.plane() * (aspect * 0.5);
        let inv_det = 1.0 / (p.x * d.y - d.x * p.y);

        for spr in &scene.sprites {
            let delta = spr.pos.truncate() - camera.pos.truncate();

            // lateral offset and depth in camera space
            let transform_x = inv_det * (d.y * delta.x - d.x * delta.y);
            let transform_y = inv_det * (-p.y * delta.x + p.x * delta.y);
            if transform_y <= 0.0 {
                continue; // behind the camera
            }

            let sx = (transform_x / transform_y + 1.0) / 2.0 * wf;
            let sy = (hf / 2.0 + camera.pitch as f32)
                - (spr.pos.z + (spr.size.y - 1.0) / 2.0 - (camera.pos.z - 0.5)) / transform_y * hf;

            let sp_h = spr.size.y / transform_y * hf;
            let sp_w = spr.size.x / transform_y * wf / aspect;

            // saturating float→int keeps blown-up near rects finite; the
            // loops clamp to the screen
            let y0 = (sy - sp_h / 2.0).floor() as i32;
            let y1 = (sy + sp_h / 2.0).floor() as i32;
            let x0 = (sx - sp_w / 2.0).floor() as i32;
            let x1 = (sx + sp_w / 2.0).floor() as i32;
            if x1 <= x0 || x1 < 0 || x0 >= w as i32 {
                continue;
            }

            let span = (x1 as i64 - x0 as i64) as f32;
            let extent = (y1 as i64 - y0 as i64).max(1) as f32;

            let mut lit = if spr.flags.contains(SpriteFlags::FULLBRIGHT) {
                Shade::NONE
            } else {
                shade(scene, camera, transform_y, Side::X)
            };
            if let Some(t) = spr.tint {
                lit = lit.tinted(t);
            }

            match spr.appearance {
                Appearance::Texture(id) if scene.textures.texture_or_missing(id).loaded() => {
                    let tex = scene.textures.texture_or_missing(id);
                    for x in x0.max(0)..x1.min(w as i32) {
                        // texture x maps over the unclamped span
                        let mut tex_x = (((x as i64 - x0 as i64) as f32 / span * tex.w as f32)
                            as usize)
                            .min(tex.w - 1);
                        if spr.flags.contains(SpriteFlags::FLIP_X) {
                            tex_x = tex.w - tex_x - 1;
                        }
                        column::textured(
                            screen, x as usize, tex, tex_x, transform_y, y0, y1, extent, lit,
                        );
                    }
                }
                _ => {
                    let color = match spr.appearance {
                        Appearance::Color(c) => c,
                        Appearance::Texture(id) => scene.textures.texture_or_missing(id).fallback,
                    };
                    for x in x0.max(0)..x1.min(w as i32) {
                        column::solid(screen, x as usize, color, transform_y, y0, y1, lit);
                    }
                }
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
