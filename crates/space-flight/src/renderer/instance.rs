use bytemuck::{Pod, Zeroable};

/// Object kinds in the instance buffer.
pub mod object_kind {
    pub const SHIP: f32 = 0.0;
    pub const ASTEROID: f32 = 1.0;
}

/// Per-object transform written to linear memory for the JavaScript renderer.
/// Must match the JS reader: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// `EntityId` of the object.
    pub id: f32,
    /// One of [`object_kind`].
    pub kind: f32,
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation in radians per axis.
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Transforms of every visible object, rebuilt each frame.
pub struct RenderBuffer {
    /// The ship is always first, asteroids follow.
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(65)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances as one flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from JS memory views.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
