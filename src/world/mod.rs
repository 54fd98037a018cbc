mod camera;
mod ray;
mod scene;
mod texture;

pub use scene::{
    CellInfo, Lighting, PlaneLayer, Scene, SceneError, Sprite, SpriteFlags, WorldMap,
};

pub use camera::{Camera, CameraError, CameraLight};

pub use ray::{Ray, Side};

pub use texture::{
    Appearance, Color, LoadState, NO_TEXTURE, Texture, TextureBank, TextureError, TextureId,
};
