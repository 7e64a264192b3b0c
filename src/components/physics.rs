use glam::Vec2;

/// Feet position in world space.
pub struct Position(pub Vec2);

/// One-way horizontal platform spanning `[left, right]` at height `y`.
#[derive(Clone, Copy, Debug)]
pub struct Platform {
    pub left: f32,
    pub right: f32,
    pub y: f32,
}

impl Platform {
    pub fn spans(&self, x: f32) -> bool {
        (self.left..=self.right).contains(&x)
    }
}

/// Solid vertical segment at `x` covering `[bottom, top]`.
#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub x: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Wall {
    pub fn covers(&self, y: f32) -> bool {
        (self.bottom..=self.top).contains(&y)
    }
}
