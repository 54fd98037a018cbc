//! ---------------------------------------------------------------------------
//! Classic software (CPU) raycasting renderer
//!
//! * One work item per screen pixel: a per-column DDA walk finds wall
//!   hits, then sprites and floor/ceiling rows fill in around them.
//! * Passes run in a fixed order — skybox, walls, sprites, planes — and
//!   cooperate only through the [`Screen`]'s pixel and depth buffers:
//!   every depth-tested write stores the perpendicular camera distance,
//!   so later passes overdraw exactly where they are nearer.
//! * The skybox writes pixels but never depth; it stays infinitely far.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{Renderer, Screen},
    world::{Camera, Ray, Scene},
};

mod column;
mod light;
mod planes;
mod sky;
mod sprites;
mod walls;

/// Column renderer over a grid world.
#[derive(Default)]
pub struct Software {
    /// Traversal state, re-aimed per column (no per-column allocation).
    ray: Ray,
}

impl Renderer for Software {
    fn render(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera) {
        if scene.skybox.is_some() {
            self.draw_sky(screen, scene, camera);
        }
        if !scene.map.is_empty() && !scene.cell_info.is_empty() {
            self.draw_walls(screen, scene, camera);
        }
        if !scene.sprites.is_empty() {
            self.draw_sprites(screen, scene, camera);
        }
        if scene.floor.is_some() || scene.ceiling.is_some() {
            self.draw_planes(screen, scene, camera);
        }
    }
}

impl Software {
    /// Screen row where floor meets ceiling: `⌊H/2⌋ + pitch`.
    #[inline]
    fn horizon(screen: &Screen, camera: &Camera) -> i32 {
        screen.render_height() as i32 / 2 + camera.pitch
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{
        Appearance, CellInfo, Color, PlaneLayer, Sprite, WorldMap,
    };
    use glam::{Vec2, Vec3};

    fn walled_scene() -> Scene {
        // 3×3, solid red center cell
        let map = WorldMap::new(3, 3, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Color(Color::RED)));
        scene
    }

    fn camera_facing_wall() -> Camera {
        Camera::new(Vec3::new(1.5, 0.5, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap()
    }

    #[test]
    fn passes_run_in_depth_consistent_order() {
        // sky behind wall behind sprite: the center column must end up
        // sprite-colored with the sprite's depth, the sky only above the
        // wall extents (here: nowhere, the wall fills the column)
        let mut scene = walled_scene();
        scene.skybox = Some(Appearance::Color(Color::BLUE));
        scene.sprites.push(Sprite::new(
            Vec3::new(1.5, 0.7, 0.0),
            Vec2::new(1.0, 1.0),
            Appearance::Color(Color::GREEN),
        ));

        let mut screen = Screen::new(8, 8, 1.0).unwrap();
        let camera = camera_facing_wall();
        let mut sw = Software::default();
        screen.clear();
        sw.render(&mut screen, &scene, &camera);

        let cx = 4;
        assert_eq!(screen.pixel_at(cx, 4), [0, 255, 0, 255]);
        assert!((screen.depth_at(cx, 4) - 0.2).abs() < 1e-4);
    }

    #[test]
    fn planes_only_fill_pixels_walls_left_open() {
        let mut scene = walled_scene();
        scene.floor = Some(PlaneLayer::new(Appearance::Color(Color::BLUE)));

        let mut screen = Screen::new(8, 8, 1.0).unwrap();
        let camera = camera_facing_wall();
        let mut sw = Software::default();
        screen.clear();
        sw.render(&mut screen, &scene, &camera);

        // wall is nearer than any floor row in its column
        assert_eq!(screen.pixel_at(4, 7), [255, 0, 0, 255]);
        assert!((screen.depth_at(4, 7) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn dummy_renderer_touches_nothing() {
        let scene = walled_scene();
        let camera = camera_facing_wall();
        let mut screen = Screen::new(4, 4, 1.0).unwrap();
        screen.clear();
        crate::renderer::Dummy.render(&mut screen, &scene, &camera);
        assert!(screen.pixels().iter().all(|&b| b == 0));
    }
}
