use crate::api::types::EntityId;
use crate::renderer::instance::{object_kind, RenderBuffer, RenderInstance};
use crate::renderer::FrameView;

/// Rebuild the instance buffer from a frame snapshot.
/// The ship goes first, then every live asteroid in storage order.
pub fn build_render_buffer(frame: &FrameView<'_>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let ship = frame.ship;
    buffer.push(RenderInstance {
        id: EntityId::SHIP.0 as f32,
        kind: object_kind::SHIP,
        x: ship.position.x,
        y: ship.position.y,
        z: ship.position.z,
        rx: ship.rotation.x,
        ry: ship.rotation.y,
        rz: ship.rotation.z,
    });

    for asteroid in frame.asteroids {
        buffer.push(RenderInstance {
            id: asteroid.id.0 as f32,
            kind: object_kind::ASTEROID,
            x: asteroid.position.x,
            y: asteroid.position.y,
            z: asteroid.position.z,
            rx: asteroid.rotation.x,
            ry: asteroid.rotation.y,
            rz: asteroid.rotation.z,
        });
    }
}
