use glam::{Vec2, Vec3};

use thiserror::Error;

use crate::world::Color;

/// Distance-falloff light carried by the viewer.
///
/// `brightness / depth` gives the raw scalar; `max_brightness` caps it
/// near the camera and `color` tints every lit pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraLight {
    pub brightness: f32,
    pub max_brightness: f32,
    pub color: Color,
}

impl Default for CameraLight {
    fn default() -> Self {
        Self {
            brightness: 3.0,
            max_brightness: 1.0,
            color: Color::WHITE,
        }
    }
}

/// Rejected camera parameters.
#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    /// Direction must be a finite, nonzero 2D vector.
    #[error("camera direction {0:?} is zero or not finite")]
    BadDirection(Vec2),

    /// Focal length must be finite and positive.
    #[error("focal length {0} is not positive and finite")]
    BadFocal(f32),
}

/// Player view-point in world space.
///
/// * `pos.x/.y` in grid cells; `pos.z` is eye height in cell units
///   (0.5 = halfway up a height-1 wall).
/// * The heading is stored as a **unit** `forward` vector; the scaled
///   ray direction and the camera plane are derived, so the plane is
///   perpendicular to the direction by construction no matter how the
///   camera is turned.
/// * `pitch` tilts the view by shifting the horizon a whole number of
///   render pixels (the classic y-shear trick, not a real rotation).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec3,
    forward: Vec2, // unit
    focal: f32,
    pub pitch: i32,
    pub light: CameraLight,
}

impl Camera {
    /// Create a camera at `pos` heading along `dir` (normalized here)
    /// with the given focal length.
    pub fn new(pos: Vec3, dir: Vec2, focal: f32) -> Result<Self, CameraError> {
        if !dir.is_finite() || dir == Vec2::ZERO {
            return Err(CameraError::BadDirection(dir));
        }
        if !focal.is_finite() || focal <= 0.0 {
            return Err(CameraError::BadFocal(focal));
        }
        Ok(Self {
            pos,
            forward: dir.normalize(),
            focal,
            pitch: 0,
            light: CameraLight::default(),
        })
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks on the X-Y plane.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        self.forward
    }

    /// Ray direction through the screen center: `forward · focal`.
    #[inline(always)]
    pub fn direction(&self) -> Vec2 {
        self.forward * self.focal
    }

    /// Camera plane: perpendicular to the heading, base length 1.
    /// Scaled by the screen aspect at render time.
    #[inline(always)]
    pub fn plane(&self) -> Vec2 {
        self.forward.perp()
    }

    #[inline(always)]
    pub fn focal_length(&self) -> f32 {
        self.focal
    }

    /// Re-aim the camera; the new direction is normalized.
    pub fn set_direction(&mut self, dir: Vec2) -> Result<(), CameraError> {
        if !dir.is_finite() || dir == Vec2::ZERO {
            return Err(CameraError::BadDirection(dir));
        }
        self.forward = dir.normalize();
        Ok(())
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units and `side` (strafe), preserving eye height.
    pub fn step(&mut self, forward: f32, side: f32) {
        let f = self.forward;
        let r = -self.forward.perp(); // to the camera's right
        self.pos.x += f.x * forward + r.x * side;
        self.pos.y += f.y * forward + r.y * side;
    }

    /// Rotate around the Z-axis (positive = turn counter-clockwise).
    pub fn turn(&mut self, delta_yaw: f32) {
        self.forward = Vec2::from_angle(delta_yaw).rotate(self.forward);
    }

    /// Raise or lower the eye, in cell units.
    pub fn elevate(&mut self, dz: f32) {
        self.pos.z += dz;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
