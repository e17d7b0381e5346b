//! Collision primitives: axis-aligned boxes and bounding spheres.
//!
//! Colliders are stored in their owner's local frame. Tests take the
//! owner's world translation as an explicit offset instead of moving the
//! box, so a collider can never be left displaced after a test.

use glam::Vec3;

/// Axis-aligned box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing a sphere.
    pub fn around_sphere(center: Vec3, radius: f32) -> Self {
        Self {
            min: center - Vec3::splat(radius),
            max: center + Vec3::splat(radius),
        }
    }

    /// Grow the box so it also encloses `other`.
    pub fn union(self, other: Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Copy of this box moved by `offset`.
    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Sphere centered on the box that touches all eight corners.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.size().length() * 0.5)
    }
}

/// A sphere used as a cheap stand-in for an irregular shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Test a local-frame box, placed at `offset` in world space, against a
/// world-space sphere. Touching counts as intersecting.
#[inline]
pub fn box_intersects_sphere(aabb: &Aabb, offset: Vec3, sphere: &BoundingSphere) -> bool {
    let closest = sphere.center.clamp(aabb.min + offset, aabb.max + offset);
    closest.distance_squared(sphere.center) <= sphere.radius * sphere.radius
}
