//! WASM exports for the Space Flight simulation.
//!
//! JS calls `game_init` once, then `game_tick(dt)` from its
//! `requestAnimationFrame` callback until it returns `false`. After each
//! tick it reads the flat buffers through the pointer/count accessors and
//! drains scene changes with the `take_*` functions.

pub mod runner;

pub use runner::{BufferBackend, GameRunner, SpawnRecord};

use std::cell::RefCell;

use space_flight::{Direction, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| {
            log::warn!("game_init() was not called; starting with default config");
            GameRunner::from_json(None)
        });
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = GameRunner::from_json(config_json.as_deref());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("space-flight: initialized");
}

/// Advance one frame. Returns `false` once the game is over and the host
/// should stop scheduling frames.
#[wasm_bindgen]
pub fn game_tick(dt: f32) -> bool {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

/// Key press by `KeyboardEvent.key` name, e.g. `"ArrowLeft"`.
#[wasm_bindgen]
pub fn game_key(name: &str) {
    if let Some(direction) = Direction::from_key_name(name) {
        game_key_down(direction.key_code());
    }
}

// ---- HUD ----

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.hud().score)
}

#[wasm_bindgen]
pub fn get_hits() -> u32 {
    with_runner(|r| r.hud().hits)
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    with_runner(|r| r.hud().game_over)
}

#[wasm_bindgen]
pub fn get_hud_json() -> String {
    with_runner(|r| r.hud_json())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles().as_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| (r.particles().len() / 3) as u32)
}

/// World-space emitter position as `[x, y, z]`.
#[wasm_bindgen]
pub fn get_particle_origin() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(&r.particle_origin()[..]))
}

#[wasm_bindgen]
pub fn get_flashes_ptr() -> *const f32 {
    with_runner(|r| r.flashes().as_ptr())
}

#[wasm_bindgen]
pub fn get_flash_count() -> u32 {
    with_runner(|r| (r.flashes().len() / space_flight::HitFlash::FLOATS) as u32)
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.events().as_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.events().len() as u32)
}

// ---- Scene changes ----

/// Asteroids spawned since the last call, as a JSON array of spawn records.
#[wasm_bindgen]
pub fn take_spawned_json() -> String {
    with_runner(|r| r.take_spawned_json())
}

/// Ids of objects removed since the last call.
#[wasm_bindgen]
pub fn take_removed_ids() -> js_sys::Uint32Array {
    with_runner(|r| js_sys::Uint32Array::from(&r.take_removed()[..]))
}

/// Hit flashes started since the last call, `HitFlash::FLOATS` floats each.
#[wasm_bindgen]
pub fn take_flashes() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(&r.take_new_flashes()[..]))
}
