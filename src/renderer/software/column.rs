//! Vertical column drawing primitives shared by the wall, sprite and
//! skybox passes. All clipping against the screen happens here; texture
//! stepping always uses the caller's *unclipped* line height so spans
//! truncated by the screen edge or an occluder never stretch.

use crate::renderer::software::light::Shade;
use crate::renderer::Screen;
use crate::world::{Color, Texture};

/// Fill rows `[y0, y1)` of column `x` with one shaded color, depth-tested
/// per pixel.
pub(crate) fn solid(
    screen: &mut Screen,
    x: usize,
    color: Color,
    depth: f32,
    y0: i32,
    y1: i32,
    shade: Shade,
) {
    let h = screen.render_height() as i32;
    let rgba = shade.apply(color);
    for y in y0.max(0)..y1.min(h) {
        screen.put_tested(x, y as usize, depth, rgba);
    }
}

/// Textured column over rows `[y0, y1)`.
///
/// `line_height` is the full projected extent the texture maps onto;
/// the starting texture cursor only compensates for rows lost above the
/// screen. Texels whose alpha is not 255 are skipped and leave the
/// depth entry untouched. The vertical texture coordinate wraps modulo
/// the texture height, so a span that runs past the nominal wall bottom
/// (occluder-truncated draw ranges, float accumulation on the last row)
/// keeps sampling in bounds.
#[allow(clippy::too_many_arguments)]
pub(crate) fn textured(
    screen: &mut Screen,
    x: usize,
    tex: &Texture,
    tex_x: usize,
    depth: f32,
    y0: i32,
    y1: i32,
    line_height: f32,
    shade: Shade,
) {
    let h = screen.render_height() as i32;
    let step = tex.h as f32 / line_height;
    let mut tex_pos = if y0 < 0 { -y0 as f32 * step } else { 0.0 };

    for y in y0.max(0)..y1.min(h) {
        let tex_y = tex_pos as usize % tex.h;
        tex_pos += step;

        let px = tex.rgba(tex_x, tex_y);
        if px[3] == 255 {
            screen.put_tested(x, y as usize, depth, shade.apply_rgba(px));
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn screen_4x4() -> Screen {
        let mut s = Screen::new(4, 4, 1.0).unwrap();
        s.clear();
        s
    }

    /// 1×4 texture: rows red, green, blue, transparent.
    fn stripe_tex() -> Texture {
        Texture::new(
            "STRIPE",
            1,
            4,
            vec![
                255, 0, 0, 255, //
                0, 255, 0, 255, //
                0, 0, 255, 255, //
                9, 9, 9, 0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn solid_clips_to_screen() {
        let mut s = screen_4x4();
        solid(&mut s, 1, Color::RED, 2.0, -5, 99, Shade::NONE);
        for y in 0..4 {
            assert_eq!(s.pixel_at(1, y), [255, 0, 0, 255]);
            assert_eq!(s.depth_at(1, y), 2.0);
        }
        // neighbours untouched
        assert_eq!(s.pixel_at(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn solid_respects_depth() {
        let mut s = screen_4x4();
        solid(&mut s, 0, Color::RED, 1.0, 0, 4, Shade::NONE);
        solid(&mut s, 0, Color::GREEN, 3.0, 0, 4, Shade::NONE);
        assert_eq!(s.pixel_at(0, 2), [255, 0, 0, 255]);
    }

    #[test]
    fn textured_maps_rows_one_to_one_at_full_height() {
        let mut s = screen_4x4();
        let tex = stripe_tex();
        textured(&mut s, 2, &tex, 0, 1.0, 0, 4, 4.0, Shade::NONE);
        assert_eq!(s.pixel_at(2, 0), [255, 0, 0, 255]);
        assert_eq!(s.pixel_at(2, 1), [0, 255, 0, 255]);
        assert_eq!(s.pixel_at(2, 2), [0, 0, 255, 255]);
    }

    #[test]
    fn transparent_texel_skipped_and_depth_preserved() {
        let mut s = screen_4x4();
        let tex = stripe_tex();
        textured(&mut s, 2, &tex, 0, 1.0, 0, 4, 4.0, Shade::NONE);
        // row 3 maps to the transparent texel: pixel and depth untouched
        assert_eq!(s.pixel_at(2, 3), [0, 0, 0, 0]);
        assert_eq!(s.depth_at(2, 3), f32::INFINITY);
    }

    #[test]
    fn offscreen_top_advances_texture_cursor() {
        let mut s = screen_4x4();
        let tex = stripe_tex();
        // full extent 8 rows, top half off-screen: step 0.5, cursor
        // starts at row −(−4)·0.5 = texel 2 (blue)
        textured(&mut s, 0, &tex, 0, 1.0, -4, 4, 8.0, Shade::NONE);
        assert_eq!(s.pixel_at(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn overlong_span_wraps_vertically() {
        let mut s = screen_4x4();
        let tex = stripe_tex();
        // line height 2 over 4 rows: texture repeats top-to-bottom
        textured(&mut s, 3, &tex, 0, 1.0, 0, 4, 2.0, Shade::NONE);
        assert_eq!(s.pixel_at(3, 0), [255, 0, 0, 255]); // texel 0
        assert_eq!(s.pixel_at(3, 1), [0, 0, 255, 255]); // texel 2
        assert_eq!(s.pixel_at(3, 2), [255, 0, 0, 255]); // texel 4 → 0
    }
}
