use glam::Vec2;

use crate::world::WorldMap;

/// Which family of grid lines the ray crossed at its last step:
/// `X` = a vertical line (face normal along ±x), `Y` = a horizontal one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    X,
    Y,
}

/// Grid-aligned DDA traversal state.
///
/// One `Ray` value is owned by the renderer and re-aimed per screen
/// column; [`cast`](Ray::cast) may be called repeatedly on the same state
/// to continue the scan strictly beyond the previous hit (the wall pass
/// does this for walls of varying heights).
///
/// When aimed with length 1 and `dir = direction + plane·aspect·cameraX`,
/// `distance` after a hit is the *perpendicular* camera-plane distance —
/// no square root, no fish-eye.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    map_x: i32,
    map_y: i32,
    delta: Vec2,
    step_x: i32,
    step_y: i32,
    pub(crate) side_dist: Vec2,
    pub side: Side,
    pub hit: u16,
    pub distance: f32,
}

impl Ray {
    /// Reset the traversal to start at `start` along `dir` with ray
    /// length `len`.
    ///
    /// A zero direction component yields an infinite per-axis delta, so
    /// that axis is never selected by [`cast`](Ray::cast).
    pub fn aim(&mut self, start: Vec2, dir: Vec2, len: f32) {
        self.map_x = start.x.floor() as i32;
        self.map_y = start.y.floor() as i32;
        self.delta = Vec2::new((len / dir.x).abs(), (len / dir.y).abs());

        if dir.x < 0.0 {
            self.step_x = -1;
            self.side_dist.x = (start.x - self.map_x as f32) * self.delta.x;
        } else {
            self.step_x = 1;
            self.side_dist.x = (self.map_x as f32 + 1.0 - start.x) * self.delta.x;
        }
        if dir.y < 0.0 {
            self.step_y = -1;
            self.side_dist.y = (start.y - self.map_y as f32) * self.delta.y;
        } else {
            self.step_y = 1;
            self.side_dist.y = (self.map_y as f32 + 1.0 - start.y) * self.delta.y;
        }

        self.hit = 0;
        self.side = Side::X;
        self.distance = 0.0;
    }

    /// Advance to the next nonzero cell or off the map.
    ///
    /// Returns the hit cell id (0 = the ray left the map). `distance` is
    /// updated on every termination; the starting cell is never sampled.
    pub fn cast(&mut self, map: &WorldMap) -> u16 {
        self.hit = 0;
        loop {
            // step across whichever grid line is nearer
            if self.side_dist.x > self.side_dist.y {
                self.map_y += self.step_y;
                self.side_dist.y += self.delta.y;
                self.side = Side::Y;
            } else {
                self.map_x += self.step_x;
                self.side_dist.x += self.delta.x;
                self.side = Side::X;
            }

            if !map.contains(self.map_x, self.map_y) {
                break;
            }
            self.hit = map.cell(self.map_x, self.map_y);
            if self.hit != 0 {
                break;
            }
        }

        self.distance = match self.side {
            Side::X => self.side_dist.x - self.delta.x,
            Side::Y => self.side_dist.y - self.delta.y,
        };
        self.hit
    }

    /// Grid cell the traversal currently stands in.
    #[inline]
    pub fn cell_pos(&self) -> (i32, i32) {
        (self.map_x, self.map_y)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
