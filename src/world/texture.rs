// Format-agnostic repository of textures decoded by the asset loader.
// The renderer and world logic interact through `TextureId` only.

use std::collections::HashMap;

use thiserror::Error;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// Loud magenta used as the default stand-in for missing pixel data.
    pub const FALLBACK: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Where a texture is in its (host-driven) loading lifecycle.
///
/// `Pending → Ready` happens at most once; `Pending → Failed` is final.
/// The renderer only distinguishes `Ready` from everything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// CPU-side texture storage: row-major RGBA bytes, top-left origin.
///
/// Immutable once `Ready`. While still `Pending` (the host decodes
/// asynchronously) the renderer substitutes `fallback` for every sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub source: String,
    pub w: usize,
    pub h: usize,
    pixels: Vec<u8>,
    state: LoadState,
    pub fallback: Color,
}

/// Things that can go wrong when building or banking textures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    /// `pixels.len()` must equal `4·w·h` with both dimensions nonzero.
    #[error("texture `{name}`: {w}x{h} does not match {len} pixel bytes")]
    BadDimensions {
        name: String,
        w: usize,
        h: usize,
        len: usize,
    },

    /// A texture completes (or fails) at most once.
    #[error("texture `{0}` already finished loading")]
    AlreadyLoaded(String),

    /// Attempted to insert a second texture with an existing source name.
    #[error("texture source `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),
}

impl Texture {
    /// A fully loaded texture. Validates dimensions against the byte count.
    pub fn new<S: Into<String>>(
        source: S,
        w: usize,
        h: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, TextureError> {
        let source = source.into();
        if w == 0 || h == 0 || pixels.len() != 4 * w * h {
            return Err(TextureError::BadDimensions {
                name: source,
                w,
                h,
                len: pixels.len(),
            });
        }
        Ok(Self {
            source,
            w,
            h,
            pixels,
            state: LoadState::Ready,
            fallback: Color::FALLBACK,
        })
    }

    /// A texture whose pixels have not arrived yet. Renders as `fallback`.
    pub fn pending<S: Into<String>>(source: S, fallback: Color) -> Self {
        Self {
            source: source.into(),
            w: 0,
            h: 0,
            pixels: Vec::new(),
            state: LoadState::Pending,
            fallback,
        }
    }

    /// Publish the decoded pixels. The `Pending → Ready` transition is the
    /// only mutation a texture ever sees.
    pub fn complete(&mut self, w: usize, h: usize, pixels: Vec<u8>) -> Result<(), TextureError> {
        if self.state != LoadState::Pending {
            return Err(TextureError::AlreadyLoaded(self.source.clone()));
        }
        if w == 0 || h == 0 || pixels.len() != 4 * w * h {
            return Err(TextureError::BadDimensions {
                name: self.source.clone(),
                w,
                h,
                len: pixels.len(),
            });
        }
        self.w = w;
        self.h = h;
        self.pixels = pixels;
        self.state = LoadState::Ready;
        Ok(())
    }

    /// Record a decode failure; the texture keeps rendering as `fallback`.
    pub fn fail(&mut self) -> Result<(), TextureError> {
        if self.state != LoadState::Pending {
            return Err(TextureError::AlreadyLoaded(self.source.clone()));
        }
        self.state = LoadState::Failed;
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    pub fn loaded(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// RGBA texel at (x, y). Callers guarantee `x < w && y < h`.
    #[inline(always)]
    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.w + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Convenience checkerboard 8×8 (dark/light grey).
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: [u8; 4] = [0xB0, 0xB0, 0xB0, 0xFF];
        const DARK: [u8; 4] = [0x40, 0x40, 0x40, 0xFF];
        let mut pix = Vec::with_capacity(8 * 8 * 4);
        for y in 0..8 {
            for x in 0..8 {
                pix.extend_from_slice(if (x ^ y) & 1 == 0 { &LIGHT } else { &DARK });
            }
        }
        Texture::new("CHECKER", 8, 8, pix).unwrap()
    }
}

/// How a wall cell, sprite or plane presents itself: a flat color, or a
/// banked texture (which may still be loading and thus renders as its
/// fallback color). Passes branch on this once per column or row, never
/// per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Appearance {
    Color(Color),
    Texture(TextureId),
}

/// A format-agnostic cache of textures, owned by the [`Scene`].
///
/// * Does **not** know about PNG, GPU uploads, file systems — that’s the
///   host’s job.
/// * Stores exactly one copy of every source name.
/// * ID **0** is always the “missing” checkerboard, so render-time
///   lookups never fail.
///
/// **Thread-safety:** access `TextureBank` from a single thread or wrap it
/// in `RwLock`; the struct itself is not `Sync`.
///
/// [`Scene`]: crate::world::Scene
pub struct TextureBank {
    by_source: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create a bank with a mandatory *missing* texture used as fallback.
    /// It is inserted under the fixed name `"MISSING"` with handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_source = HashMap::new();
        by_source.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_source,
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored (including the “missing” one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a banked texture by source name.
    pub fn id(&self, source: &str) -> Option<TextureId> {
        self.by_source.get(source).copied()
    }

    /// Fallback-safe query: unknown names resolve to the checkerboard id.
    pub fn id_or_missing(&self, source: &str) -> TextureId {
        self.id(source).unwrap_or(NO_TEXTURE)
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Render-time lookup: an out-of-range id resolves to the checker.
    #[inline]
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.data.get(id as usize).unwrap_or(&self.data[0])
    }

    /// Mutable borrow, e.g. for the host to `complete()` a pending load.
    pub fn texture_mut(&mut self, id: TextureId) -> Result<&mut Texture, TextureError> {
        self.data
            .get_mut(id as usize)
            .ok_or(TextureError::BadId(id))
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under its source name.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the source already exists (`Duplicate`).
    pub fn insert(&mut self, tex: Texture) -> Result<TextureId, TextureError> {
        if self.by_source.contains_key(&tex.source) {
            return Err(TextureError::Duplicate(tex.source.clone()));
        }
        let id = self.data.len() as TextureId;
        self.by_source.insert(tex.source.clone(), id);
        self.data.push(tex);
        Ok(id)
    }
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::default_with_checker()
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn solid_tex(name: &str, byte: u8) -> Texture {
        Texture::new(name, 2, 2, vec![byte; 16]).unwrap()
    }

    #[test]
    fn new_validates_dimensions() {
        assert!(matches!(
            Texture::new("BAD", 2, 2, vec![0; 15]),
            Err(TextureError::BadDimensions { .. })
        ));
        assert!(matches!(
            Texture::new("ZERO", 0, 4, vec![]),
            Err(TextureError::BadDimensions { .. })
        ));
    }

    #[test]
    fn pending_completes_exactly_once() {
        let mut tex = Texture::pending("WALL", Color::RED);
        assert!(!tex.loaded());

        tex.complete(1, 1, vec![1, 2, 3, 255]).unwrap();
        assert!(tex.loaded());
        assert_eq!(tex.rgba(0, 0), [1, 2, 3, 255]);

        let err = tex.complete(1, 1, vec![0; 4]).unwrap_err();
        assert_eq!(err, TextureError::AlreadyLoaded("WALL".into()));
    }

    #[test]
    fn failed_load_keeps_fallback() {
        let mut tex = Texture::pending("SKY", Color::BLUE);
        tex.fail().unwrap();
        assert_eq!(tex.state(), LoadState::Failed);
        assert!(!tex.loaded());
        assert_eq!(tex.fallback, Color::BLUE);
        // terminal: cannot complete afterwards
        assert!(tex.complete(1, 1, vec![0; 4]).is_err());
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default_with_checker();
        let red = bank.insert(solid_tex("RED", 0x00)).unwrap();
        let blue = bank.insert(solid_tex("BLUE", 0xFF)).unwrap();

        assert_ne!(red, NO_TEXTURE);
        assert_ne!(blue, red);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("BLUE"), Some(blue));
        assert_eq!(bank.id("NOPE"), None);

        assert_eq!(bank.texture(red).unwrap().rgba(0, 0)[0], 0x00);
        assert_eq!(bank.texture(blue).unwrap().rgba(0, 0)[0], 0xFF);
    }

    #[test]
    fn duplicate_source_rejected() {
        let mut bank = TextureBank::default_with_checker();
        bank.insert(solid_tex("WOOD", 1)).unwrap();
        let err = bank.insert(solid_tex("WOOD", 2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        // texture count still 2 (checker + first WOOD)
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bad_id_resolves_to_checker() {
        let bank = TextureBank::default_with_checker();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(bad).source, "CHECKER");
    }
}
