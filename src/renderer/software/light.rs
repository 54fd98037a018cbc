use crate::world::{Camera, Color, Scene, Side};

/// Per-channel multipliers applied as a pixel is written.
///
/// Application saturates into `[0, 255]` (Rust's float→int casts clamp),
/// which covers both `max_brightness > 1` and a side-shaded scalar that
/// dipped below zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Shade {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Shade {
    /// Identity shade: lighting branch disabled.
    pub const NONE: Shade = Shade {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Shade a solid color; output is always opaque.
    #[inline(always)]
    pub fn apply(&self, c: Color) -> [u8; 4] {
        [
            (c.r as f32 * self.r) as u8,
            (c.g as f32 * self.g) as u8,
            (c.b as f32 * self.b) as u8,
            255,
        ]
    }

    /// Shade a sampled texel; the written alpha is forced opaque (the
    /// threshold test happened before this call).
    #[inline(always)]
    pub fn apply_rgba(&self, px: [u8; 4]) -> [u8; 4] {
        [
            (px[0] as f32 * self.r) as u8,
            (px[1] as f32 * self.g) as u8,
            (px[2] as f32 * self.b) as u8,
            255,
        ]
    }

    /// Fold a sprite tint into the shade.
    pub fn tinted(self, t: Color) -> Shade {
        Shade {
            r: self.r * t.r as f32 / 255.0,
            g: self.g * t.g as f32 / 255.0,
            b: self.b * t.b as f32 / 255.0,
        }
    }
}

/// Lighting scalar for a surface at perpendicular distance `depth`.
///
/// Distance falloff `brightness / depth`, capped by `max_brightness`,
/// floored by the scene ambient. Side faces (`Side::Y`, wall pass only)
/// lose `side_shade` *after* the ambient floor — the contrast is
/// intentional and never reclamped.
pub(crate) fn shade(scene: &Scene, camera: &Camera, depth: f32, side: Side) -> Shade {
    if !scene.lighting.enabled() {
        return Shade::NONE;
    }

    let light = &camera.light;
    let mut l = (light.brightness / depth)
        .min(light.max_brightness)
        .max(scene.lighting.ambient);
    if side == Side::Y {
        l -= scene.lighting.side_shade;
    }

    Shade {
        r: l * light.color.r as f32 / 255.0,
        g: l * light.color.g as f32 / 255.0,
        b: l * light.color.b as f32 / 255.0,
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
