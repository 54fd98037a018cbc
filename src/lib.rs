//! gridcast — a software raycasting renderer.
//!
//! Projects a 2D grid world into a pseudo-3D image one vertical column at
//! a time, Wolfenstein-style: a per-column DDA walk over the grid finds
//! wall hits, and four sequential passes (skybox → walls → sprites →
//! floor/ceiling) fill an RGBA pixel buffer arbitrated by a shared depth
//! buffer of perpendicular camera distances.
//!
//! The crate is a pure library: it knows nothing about windows, input or
//! asset decoding. The caller owns a [`Screen`], a [`Scene`] and a
//! [`Camera`], clears the screen, calls [`Renderer::render`], and hands
//! the pixel buffer to whatever presents it (see `src/bin/explore.rs`
//! for a minifb front-end).
//!
//! ```no_run
//! use gridcast::{demo, Renderer, Screen, Software};
//!
//! let (scene, camera) = demo::courtyard();
//! let mut screen = Screen::new(640, 400, 1.0).unwrap();
//! let mut renderer = Software::default();
//!
//! screen.clear();
//! renderer.render(&mut screen, &scene, &camera);
//! screen.present(|_rgba, _w, _h| { /* blit into the window */ });
//! ```

pub mod demo;
pub mod renderer;
pub mod world;

pub use renderer::{Dummy, Renderer, Screen, ScreenError, Software};
pub use world::{
    Appearance, Camera, CameraError, CameraLight, CellInfo, Color, Lighting, LoadState,
    PlaneLayer, Ray, Scene, SceneError, Side, Sprite, SpriteFlags, Texture, TextureBank,
    TextureError, TextureId, WorldMap, NO_TEXTURE,
};
