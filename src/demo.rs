//! Ready-made demo content: procedurally generated textures and a small
//! walled courtyard scene. Used by the `explore` and `snapshot` binaries
//! and handy for kicking the tires without an asset pipeline.

use glam::{Vec2, Vec3};
use once_cell::sync::Lazy;

use crate::world::{
    Appearance, Camera, CellInfo, Color, Lighting, PlaneLayer, Scene, Sprite, SpriteFlags,
    Texture, WorldMap,
};

/// 32×32 running-bond brick wall.
static BRICK: Lazy<Texture> = Lazy::new(|| {
    const W: usize = 32;
    const H: usize = 32;
    let mut pix = Vec::with_capacity(W * H * 4);
    for y in 0..H {
        let course = y / 8;
        for x in 0..W {
            let offset = if course % 2 == 0 { 0 } else { 8 };
            let mortar_h = y % 8 == 0;
            let mortar_v = (x + offset) % 16 == 0;
            let c = if mortar_h || mortar_v {
                [0x9a, 0x93, 0x8b, 0xff]
            } else {
                // vary the brick tone a little per course
                let t = 0x10 * (course as u8 % 3);
                [0xa8 - t, 0x44, 0x38, 0xff]
            };
            pix.extend_from_slice(&c);
        }
    }
    Texture::new("BRICK", W, H, pix).unwrap()
});

/// 32×32 grey flagstone checker for the floor.
static FLAGSTONE: Lazy<Texture> = Lazy::new(|| {
    const W: usize = 32;
    const H: usize = 32;
    let mut pix = Vec::with_capacity(W * H * 4);
    for y in 0..H {
        for x in 0..W {
            let dark = ((x / 16) ^ (y / 16)) & 1 == 1;
            let edge = x % 16 == 0 || y % 16 == 0;
            let c = if edge {
                [0x2e, 0x2e, 0x30, 0xff]
            } else if dark {
                [0x55, 0x57, 0x5b, 0xff]
            } else {
                [0x74, 0x76, 0x7a, 0xff]
            };
            pix.extend_from_slice(&c);
        }
    }
    Texture::new("FLAGSTONE", W, H, pix).unwrap()
});

/// 64×32 dusk gradient with a scatter of fixed stars.
static SKYBAND: Lazy<Texture> = Lazy::new(|| {
    const W: usize = 64;
    const H: usize = 32;
    // deterministic pseudo-random star positions
    let star = |x: usize, y: usize| (x * 7 + y * 13) % 97 == 0 && y < H / 2;
    let mut pix = Vec::with_capacity(W * H * 4);
    for y in 0..H {
        let t = y as f32 / H as f32;
        let r = (0x18 as f32 + 0x50 as f32 * t) as u8;
        let g = (0x10 as f32 + 0x30 as f32 * t) as u8;
        let b = (0x30 as f32 + 0x58 as f32 * t) as u8;
        for x in 0..W {
            if star(x, y) {
                pix.extend_from_slice(&[0xec, 0xec, 0xd8, 0xff]);
            } else {
                pix.extend_from_slice(&[r, g, b, 0xff]);
            }
        }
    }
    Texture::new("SKYBAND", W, H, pix).unwrap()
});

/// 16×16 orb sprite: opaque disc on a transparent field.
static ORB: Lazy<Texture> = Lazy::new(|| {
    const S: usize = 16;
    let mut pix = Vec::with_capacity(S * S * 4);
    for y in 0..S {
        for x in 0..S {
            let dx = x as i32 - 8;
            let dy = y as i32 - 8;
            if dx * dx + dy * dy <= 36 {
                let rim = dx * dx + dy * dy > 25;
                pix.extend_from_slice(if rim {
                    &[0x20, 0x70, 0x40, 0xff]
                } else {
                    &[0x48, 0xd8, 0x80, 0xff]
                });
            } else {
                pix.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    Texture::new("ORB", S, S, pix).unwrap()
});

/// 12×12 courtyard: brick perimeter, a few inner pillars of varying
/// height, flagstone floor, dusk sky, two orb sprites. Camera starts
/// near the south-west corner looking into the yard.
pub fn courtyard() -> (Scene, Camera) {
    const W: usize = 12;
    const H: usize = 12;

    let mut data = vec![0u16; W * H];
    for x in 0..W {
        data[x] = 1; // south wall
        data[x + (H - 1) * W] = 1; // north wall
    }
    for y in 0..H {
        data[y * W] = 1; // west wall
        data[W - 1 + y * W] = 1; // east wall
    }
    // inner pillars: tall brick (2) and low color blocks (3)
    for (x, y, id) in [
        (3, 4, 2u16),
        (8, 4, 2),
        (3, 8, 2),
        (8, 8, 2),
        (5, 6, 3),
        (6, 6, 3),
    ] {
        data[x + y * W] = id;
    }

    let map = WorldMap::new(W, H, data).unwrap();
    let mut scene = Scene::new(map);

    let brick = scene.textures.insert(BRICK.clone()).unwrap();
    let flagstone = scene.textures.insert(FLAGSTONE.clone()).unwrap();
    let skyband = scene.textures.insert(SKYBAND.clone()).unwrap();
    let orb = scene.textures.insert(ORB.clone()).unwrap();

    scene
        .cell_info
        .insert(1, CellInfo::new(1.0, Appearance::Texture(brick)));
    scene
        .cell_info
        .insert(2, CellInfo::new(2.0, Appearance::Texture(brick)));
    scene.cell_info.insert(
        3,
        CellInfo::new(0.5, Appearance::Color(Color::new(0x3a, 0x5a, 0x8a))),
    );

    scene.floor = Some(PlaneLayer::new(Appearance::Texture(flagstone)));
    scene.skybox = Some(Appearance::Texture(skyband));

    scene.lighting = Lighting {
        ambient: 0.25,
        side_shade: 0.12,
    };

    let mut orb_a = Sprite::new(
        Vec3::new(4.5, 6.5, 0.0),
        Vec2::new(0.5, 0.5),
        Appearance::Texture(orb),
    );
    orb_a.flags |= SpriteFlags::FULLBRIGHT;
    scene.sprites.push(orb_a);

    let mut orb_b = Sprite::new(
        Vec3::new(7.5, 5.5, 0.25),
        Vec2::new(0.5, 0.5),
        Appearance::Texture(orb),
    );
    orb_b.tint = Some(Color::new(255, 160, 160));
    scene.sprites.push(orb_b);

    let mut camera = Camera::new(
        Vec3::new(2.0, 2.0, 0.5),
        Vec2::new(1.0, 0.8).normalize(),
        1.0,
    )
    .unwrap();
    camera.light.brightness = 2.0;

    (scene, camera)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
