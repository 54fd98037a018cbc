use std::collections::HashMap;

use bitflags::bitflags;
use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::world::{Appearance, Color, TextureBank};

/// Runtime snapshot of the grid world (immutable during a render).
///
/// Cell ids are `u16`; **0 = empty**. Nonzero ids index
/// [`Scene::cell_info`]; an id with no entry there is *empty-but-opaque*:
/// rays pass through it and no wall column is produced.
#[derive(Clone, Debug)]
pub struct WorldMap {
    w: usize,
    h: usize,
    data: Vec<u16>,
}

/// Rejected scene parameters.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// `data.len()` must equal `width · height`.
    #[error("map data length {len} does not match {w}x{h}")]
    BadMapSize { w: usize, h: usize, len: usize },
}

impl WorldMap {
    pub fn new(w: usize, h: usize, data: Vec<u16>) -> Result<Self, SceneError> {
        if data.len() != w * h {
            return Err(SceneError::BadMapSize {
                w,
                h,
                len: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Cell id at (x, y). Callers check bounds first (the DDA does).
    #[inline(always)]
    pub fn cell(&self, x: i32, y: i32) -> u16 {
        self.data[x as usize + y as usize * self.w]
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// How a nonzero cell id renders: wall height in cell units (1 = the
/// classic flat-wall raycaster extent) and its face appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellInfo {
    pub height: f32,
    pub appearance: Appearance,
}

impl CellInfo {
    pub fn new(height: f32, appearance: Appearance) -> Self {
        Self { height, appearance }
    }
}

/// One horizontal plane (floor or ceiling).
///
/// `cell_w`/`cell_h` give the world-space tiling period of a textured
/// plane; `height` is the plane's vertical position in cell units and is
/// only consulted for the ceiling (the floor sits at 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneLayer {
    pub appearance: Appearance,
    pub cell_w: f32,
    pub cell_h: f32,
    pub height: f32,
}

impl PlaneLayer {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            cell_w: 1.0,
            cell_h: 1.0,
            height: 1.0,
        }
    }
}

bitflags! {
    /// Per-sprite render switches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpriteFlags: u8 {
        /// Mirror the sampled texture columns left-to-right.
        const FLIP_X     = 0x01;
        /// Exempt the sprite from the lighting scalar.
        const FULLBRIGHT = 0x02;
    }
}

/// A billboarded world object, drawn after the walls.
///
/// `pos.z` is the sprite center height in cell units; `size` is its
/// world extent (x = width, y = height).
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Vec3,
    pub size: Vec2,
    pub appearance: Appearance,
    pub tint: Option<Color>,
    pub flags: SpriteFlags,
}

impl Sprite {
    pub fn new(pos: Vec3, size: Vec2, appearance: Appearance) -> Self {
        Self {
            pos,
            size,
            appearance,
            tint: None,
            flags: SpriteFlags::empty(),
        }
    }
}

/// Scene-wide lighting parameters.
///
/// The whole lighting branch is considered *off* while both fields hold
/// their neutral values, so a default scene renders textures verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    /// Minimum lighting scalar applied regardless of distance, in [0, 1].
    pub ambient: f32,
    /// Subtracted from the scalar on horizontal-grid-line wall faces.
    pub side_shade: f32,
}

impl Lighting {
    #[inline]
    pub fn enabled(&self) -> bool {
        self.side_shade != 0.0 || self.ambient != 1.0
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 1.0,
            side_shade: 0.0,
        }
    }
}

/// Everything the renderer reads: grid map + cell descriptors, the two
/// optional planes, skybox, sprite list, lighting, and the texture bank
/// all appearances index into.
///
/// `Option` *is* the enabled flag for floor/ceiling/skybox. The scene is
/// plain data; authoring and validation beyond structural checks belong
/// to the host.
pub struct Scene {
    pub map: WorldMap,
    pub cell_info: HashMap<u16, CellInfo>,
    pub floor: Option<PlaneLayer>,
    pub ceiling: Option<PlaneLayer>,
    pub skybox: Option<Appearance>,
    pub sprites: Vec<Sprite>,
    pub lighting: Lighting,
    pub textures: TextureBank,
}

impl Scene {
    /// An empty scene over `map`: no planes, no sky, no sprites, lighting
    /// off, a bank holding only the checkerboard.
    pub fn new(map: WorldMap) -> Self {
        Self {
            map,
            cell_info: HashMap::new(),
            floor: None,
            ceiling: None,
            skybox: None,
            sprites: Vec::new(),
            lighting: Lighting::default(),
            textures: TextureBank::default_with_checker(),
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_size_validated() {
        assert!(WorldMap::new(2, 2, vec![0; 4]).is_ok());
        assert_eq!(
            WorldMap::new(3, 2, vec![0; 4]).unwrap_err(),
            SceneError::BadMapSize { w: 3, h: 2, len: 4 }
        );
    }

    #[test]
    fn cell_lookup_is_row_major() {
        let map = WorldMap::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map.cell(0, 0), 0);
        assert_eq!(map.cell(2, 0), 2);
        assert_eq!(map.cell(0, 1), 3);
        assert!(map.contains(2, 1));
        assert!(!map.contains(3, 1));
        assert!(!map.contains(-1, 0));
    }

    #[test]
    fn lighting_enabled_is_derived() {
        assert!(!Lighting::default().enabled());
        assert!(Lighting {
            ambient: 0.4,
            side_shade: 0.0
        }
        .enabled());
        assert!(Lighting {
            ambient: 1.0,
            side_shade: 0.1
        }
        .enabled());
    }

    #[test]
    fn fresh_scene_has_neutral_defaults() {
        let scene = Scene::new(WorldMap::new(1, 1, vec![0]).unwrap());
        assert!(scene.floor.is_none());
        assert!(scene.ceiling.is_none());
        assert!(scene.skybox.is_none());
        assert!(scene.sprites.is_empty());
        assert!(!scene.lighting.enabled());
        assert_eq!(scene.textures.len(), 1);
    }
}
