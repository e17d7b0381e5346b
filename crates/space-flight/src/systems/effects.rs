//! Short-lived red point lights marking where the ship was struck.
//!
//! Flashes are cosmetic records with an expiry time on the frame clock.
//! The driver expires them before each render; the simulation never reads
//! them.

use glam::Vec3;

/// A point light that disappears at `expires_at`.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, radius]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitFlash {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Falloff distance in world units.
    pub radius: f32,
    /// Clock time (seconds) after which the flash is gone.
    pub expires_at: f64,
}

impl HitFlash {
    pub const FLOATS: usize = 8;

    /// Pure red, unit intensity, unit radius.
    pub fn new(position: Vec3, expires_at: f64) -> Self {
        Self {
            position,
            color: [1.0, 0.0, 0.0],
            intensity: 1.0,
            radius: 1.0,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }

    /// Flatten to the wire format.
    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.color[0],
            self.color[1],
            self.color[2],
            self.intensity,
            self.radius,
        ]
    }
}

/// Active hit flashes.
#[derive(Debug, Default)]
pub struct FlashQueue {
    flashes: Vec<HitFlash>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flash at `position` lasting `duration` seconds from `now`.
    pub fn spawn(&mut self, position: Vec3, now: f64, duration: f32) -> HitFlash {
        let flash = HitFlash::new(position, now + duration as f64);
        self.flashes.push(flash);
        flash
    }

    /// Drop flashes whose time is up. Returns how many were removed.
    pub fn expire(&mut self, now: f64) -> usize {
        let before = self.flashes.len();
        self.flashes.retain(|f| !f.is_expired(now));
        before - self.flashes.len()
    }

    pub fn active(&self) -> &[HitFlash] {
        &self.flashes
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}
