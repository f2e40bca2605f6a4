//! Movement input state
//!
//! The windowing layer owns key and mouse events; it reports held movement
//! keys and look deltas here, and the movement resolver reads this state
//! once per simulation step.

use std::collections::HashSet;

use crate::core::types::DVec3;

/// Pitch limit just short of straight up/down
pub const MAX_PITCH: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

/// Movement actions the resolver understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Jump,
}

/// Held movement keys plus view orientation
#[derive(Clone, Debug, Default)]
pub struct InputState {
    /// Currently held keys
    held: HashSet<MoveKey>,
    /// Rotation around the Y axis in radians
    yaw: f64,
    /// Rotation around the X axis in radians
    pitch: f64,
}

impl InputState {
    /// Create new input state with nothing held, looking down -Z
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held
    pub fn press(&mut self, key: MoveKey) {
        self.held.insert(key);
    }

    /// Mark a key as released
    pub fn release(&mut self, key: MoveKey) {
        self.held.remove(&key);
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Builder-style press, handy for scripted input
    pub fn with_key(mut self, key: MoveKey) -> Self {
        self.press(key);
        self
    }

    /// Check if key is currently held
    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held.contains(&key)
    }

    /// Apply a mouse delta (in pixels) scaled by `sensitivity` radians/pixel
    pub fn look(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Set orientation directly (radians); pitch is clamped
    pub fn set_orientation(&mut self, yaw: f64, pitch: f64) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Get current yaw
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Get current pitch
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Unit view direction: -Z rotated by pitch then yaw
    pub fn look_direction(&self) -> DVec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        DVec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Horizontal forward vector derived from yaw only
    pub fn forward(&self) -> DVec3 {
        let (sy, cy) = self.yaw.sin_cos();
        DVec3::new(-sy, 0.0, -cy)
    }

    /// Horizontal right vector derived from yaw only
    pub fn right(&self) -> DVec3 {
        let (sy, cy) = self.yaw.sin_cos();
        DVec3::new(cy, 0.0, -sy)
    }

    /// Unnormalized horizontal wish direction from held keys
    pub fn wish_direction(&self) -> DVec3 {
        let forward = self.forward();
        let right = self.right();

        let mut wish = DVec3::ZERO;
        if self.is_held(MoveKey::Forward) {
            wish += forward;
        }
        if self.is_held(MoveKey::Back) {
            wish -= forward;
        }
        if self.is_held(MoveKey::Left) {
            wish -= right;
        }
        if self.is_held(MoveKey::Right) {
            wish += right;
        }
        wish
    }
}
