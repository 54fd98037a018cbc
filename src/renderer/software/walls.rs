use crate::{
    renderer::software::{
        column,
        light::shade,
        Software,
    },
    renderer::Screen,
    world::{Appearance, Camera, Scene, Side},
};

impl Software {
    /// Wall pass: one DDA walk per screen column, continued past each
    /// hit so taller walls behind shorter ones still show above them.
    ///
    /// Per column the spans drawn move monotonically upward — a hit is
    /// only drawn when its projected top is at or above everything drawn
    /// so far, and then only down to the previous top.
    pub(crate) fn draw_walls(&mut self, screen: &mut Screen, scene: &Scene, camera: &Camera) {
        let w = screen.render_width();
        let h = screen.render_height() as f32;
        let dir = camera.direction();
        let plane = camera.plane() * screen.aspect();
        let origin = camera.pos.truncate();
        let center_base = h / 2.0 + camera.pitch as f32;

        for x in 0..w {
            let camera_x = x as f32 / w as f32 - 0.5;
            let ray_dir = dir + plane * camera_x;
            self.ray.aim(origin, ray_dir, 1.0);

            // top row drawn so far in this column; None until a hit lands
            let mut top: Option<i32> = None;

            while self.ray.cast(&scene.map) != 0 {
                let Some(info) = scene.cell_info.get(&self.ray.hit) else {
                    // id without a descriptor: empty-but-opaque, keep going
                    continue;
                };

                let dist = self.ray.distance;
                let line_height = h / dist;
                let center = center_base + h * (camera.pos.z - 0.5) / dist;
                let draw_start =
                    (center - (line_height * info.height - line_height * 0.5)).floor() as i32;
                let draw_end = (center + line_height * 0.5).floor() as i32;

                if let Some(t) = top {
                    if draw_start > t {
                        continue; // hidden behind a taller nearer wall
                    }
                }
                let true_end = top.unwrap_or(draw_end);
                top = Some(draw_start);

                let lit = shade(scene, camera, dist, self.ray.side);

                match info.appearance {
                    Appearance::Texture(id) if scene.textures.texture_or_missing(id).loaded() => {
                        let tex = scene.textures.texture_or_missing(id);

                        let wall_x = match self.ray.side {
                            Side::X => origin.y + dist * ray_dir.y,
                            Side::Y => origin.x + dist * ray_dir.x,
                        };
                        let wall_x = wall_x - wall_x.floor();
                        // rounding must not escape the last texel
                        let mut tex_x = ((wall_x * tex.w as f32) as usize).min(tex.w - 1);
                        // faces seen from behind sample mirrored
                        if (self.ray.side == Side::X && ray_dir.x > 0.0)
                            || (self.ray.side == Side::Y && ray_dir.y < 0.0)
                        {
                            tex_x = tex.w - tex_x - 1;
                        }

                        // clip to the previous top, step over the full extent
                        let extent = (draw_end as i64 - draw_start as i64).max(1) as f32;
                        column::textured(
                            screen, x, tex, tex_x, dist, draw_start, true_end, extent, lit,
                        );
                    }
                    Appearance::Texture(id) => {
                        let fallback = scene.textures.texture_or_missing(id).fallback;
                        column::solid(screen, x, fallback, dist, draw_start, draw_end, lit);
                    }
                    Appearance::Color(c) => {
                        column::solid(screen, x, c, dist, draw_start, draw_end, lit);
                    }
                }
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use crate::renderer::{Renderer, Screen, Software};
    use crate::world::{
        Appearance, Camera, CellInfo, Color, Scene, Texture, WorldMap,
    };
    use glam::{Vec2, Vec3};

    fn render(scene: &Scene, camera: &Camera, size: usize) -> Screen {
        let mut screen = Screen::new(size, size, 1.0).unwrap();
        screen.clear();
        Software::default().render(&mut screen, scene, camera);
        screen
    }

    /// Single red wall dead ahead at perpendicular distance 1: the
    /// projected column spans exactly the full screen height.
    #[test]
    fn unit_wall_at_unit_distance_fills_column() {
        let map = WorldMap::new(3, 3, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Color(Color::RED)));
        // camera on the map edge so the south face is exactly 1 away
        let camera = Camera::new(Vec3::new(1.5, 0.0, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap();

        let screen = render(&scene, &camera, 8);
        let cx = 4;
        for y in 0..8 {
            assert_eq!(screen.pixel_at(cx, y), [255, 0, 0, 255]);
            assert!((screen.depth_at(cx, y) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn descriptorless_cells_are_empty_but_opaque() {
        // id 7 has no cell info: the ray must pass through and find the
        // red wall behind it
        let map = WorldMap::new(3, 4, vec![0, 0, 0, 0, 7, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Color(Color::RED)));
        let camera = Camera::new(Vec3::new(1.5, 0.0, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap();

        let screen = render(&scene, &camera, 8);
        assert_eq!(screen.pixel_at(4, 4), [255, 0, 0, 255]);
        assert!((screen.depth_at(4, 4) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn taller_wall_behind_shows_above_near_wall() {
        // near wall height 1 at distance 1, tall wall height 2 one cell
        // behind: the tall wall's upper half must appear above the near
        // wall's top, at its own (larger) depth
        let map = WorldMap::new(3, 4, vec![0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Color(Color::RED)));
        scene
            .cell_info
            .insert(2, CellInfo::new(2.0, Appearance::Color(Color::BLUE)));
        let camera = Camera::new(Vec3::new(1.5, 0.0, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap();

        let h = 16;
        let screen = render(&scene, &camera, h);
        let cx = h / 2;

        // near wall: distance 1, spans the whole screen [0, H)
        assert_eq!(screen.pixel_at(cx, h - 1), [255, 0, 0, 255]);
        assert!((screen.depth_at(cx, h - 1) - 1.0).abs() < 1e-5);

        // tall wall at distance 2: lineHeight = H/2 = 8, center = 8,
        // drawStart = 8 − (16 − 4) = −4, clipped to the near wall's top 0
        // → nothing visible below row 0, so row 0 belongs to the *near*
        // wall (drawn first, depth 1 < 2)
        assert_eq!(screen.pixel_at(cx, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn short_near_wall_reveals_far_wall_above() {
        // near wall height 0.5 only rises to mid-screen; the full-height
        // wall behind it must fill the rows above
        let map = WorldMap::new(3, 4, vec![0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        scene
            .cell_info
            .insert(1, CellInfo::new(0.5, Appearance::Color(Color::RED)));
        scene
            .cell_info
            .insert(2, CellInfo::new(1.0, Appearance::Color(Color::BLUE)));
        let camera = Camera::new(Vec3::new(1.5, 0.0, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap();

        let h = 16;
        let screen = render(&scene, &camera, h);
        let cx = h / 2;

        // near wall (dist 1): lineHeight 16, drawStart = 8 − (8 − 8) = 8
        assert_eq!(screen.pixel_at(cx, 8), [255, 0, 0, 255]);
        assert!((screen.depth_at(cx, 8) - 1.0).abs() < 1e-5);
        // far wall (dist 2): lineHeight 8, drawStart = 8 − 4 = 4, drawn
        // from row 4 down to the near wall's top (row 8)
        assert_eq!(screen.pixel_at(cx, 4), [0, 0, 255, 255]);
        assert!((screen.depth_at(cx, 4) - 2.0).abs() < 1e-5);
        // above both walls: untouched
        assert_eq!(screen.pixel_at(cx, 0), [0, 0, 0, 0]);
    }

    /// Opposite faces of the same wall sample mirrored texture columns.
    #[test]
    fn east_and_west_faces_flip_texture_x() {
        // 2-texel horizontal stripe: A = red | B = blue
        let stripe = Texture::new(
            "AB",
            2,
            1,
            vec![255, 0, 0, 255, 0, 0, 255, 255],
        )
        .unwrap();

        let map = WorldMap::new(5, 3, vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        let id = scene.textures.insert(stripe).unwrap();
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Texture(id)));

        // looking east at the wall's west face: side = X, rayDirX > 0 →
        // flip. wallX = 0.5 + 1·0 = 0.5 → texX flips 1 → 0 → red
        let cam_east =
            Camera::new(Vec3::new(0.5, 1.5, 0.5), Vec2::new(1.0, 0.0), 1.0).unwrap();
        let screen = render(&scene, &cam_east, 8);
        assert_eq!(screen.pixel_at(4, 4), [255, 0, 0, 255]);

        // looking west at the east face from the other side: same
        // fractional wallX, no flip → texX 1 → blue
        let cam_west =
            Camera::new(Vec3::new(4.5, 1.5, 0.5), Vec2::new(-1.0, 0.0), 1.0).unwrap();
        let screen = render(&scene, &cam_west, 8);
        assert_eq!(screen.pixel_at(4, 4), [0, 0, 255, 255]);
    }

    #[test]
    fn pending_texture_renders_fallback_color() {
        let map = WorldMap::new(3, 3, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let mut scene = Scene::new(map);
        let id = scene
            .textures
            .insert(Texture::pending("LATER", Color::new(10, 20, 30)))
            .unwrap();
        scene
            .cell_info
            .insert(1, CellInfo::new(1.0, Appearance::Texture(id)));
        let camera = Camera::new(Vec3::new(1.5, 0.0, 0.5), Vec2::new(0.0, 1.0), 1.0).unwrap();

        let screen = render(&scene, &camera, 8);
        assert_eq!(screen.pixel_at(4, 4), [10, 20, 30, 255]);
    }
}
