//! Rendering abstraction layer.
//!
//! *The rest of the crate never touches a pixel buffer directly.*
//! A backend receives the read-only world ([`Scene`], [`Camera`]) and a
//! [`Screen`] to fill; passes cooperate only through the screen's pixel
//! and depth buffers.
//!
//! * You can plug multiple back-ends (`renderer::software` today, a SIMD
//!   or GPU variant later) without changing world code.
//! * [`Dummy`] is a do-nothing backend, handy for headless call sites.
//!
//! Callers are responsible for [`Screen::clear`] between frames.

use crate::world::{Camera, Scene};

mod screen;
pub mod software;

pub use screen::{Screen, ScreenError};
pub use software::Software;

/// Backend-agnostic rendering interface.
///
/// A render call is synchronous and owns the screen for its duration;
/// it fills pixels for every enabled pass in the fixed order
/// skybox → walls → sprites → floor/ceiling.
pub trait Renderer {
    fn render(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera);
}

/// Stub backend that does nothing – handy for headless tests.
#[derive(Default)]
pub struct Dummy;

impl Renderer for Dummy {
    fn render(&mut self, _screen: &mut Screen, _scene: &Scene, _camera: &Camera) {}
}
