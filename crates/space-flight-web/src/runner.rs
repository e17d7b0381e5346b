use serde::Serialize;
use space_flight::{
    build_render_buffer, Asteroid, AsteroidShape, EntityId, FrameDriver, FrameStatus, FrameView,
    GameConfig, HitFlash, Hud, InputEvent, RenderBackend, RenderBuffer, WireEvent,
};

/// A freshly spawned asteroid as the JS renderer needs it to build meshes.
#[derive(Debug, Clone, Serialize)]
pub struct SpawnRecord {
    pub id: EntityId,
    pub position: [f32; 3],
    pub radius: f32,
    pub shape: AsteroidShape,
}

/// Render backend that stages everything in flat buffers for JS to read
/// after each `game_tick`.
#[derive(Default)]
pub struct BufferBackend {
    render_buffer: RenderBuffer,
    /// Emitter-relative particle positions, 3 floats each.
    particles: Vec<f32>,
    particle_origin: [f32; 3],
    /// Active hit flashes, `HitFlash::FLOATS` each.
    flashes: Vec<f32>,
    /// Scene changes accumulated until JS takes them.
    spawned: Vec<SpawnRecord>,
    removed: Vec<u32>,
    new_flashes: Vec<f32>,
    hud: Hud,
}

impl RenderBackend for BufferBackend {
    fn add_asteroid(&mut self, asteroid: &Asteroid) {
        self.spawned.push(SpawnRecord {
            id: asteroid.id,
            position: asteroid.position.to_array(),
            radius: asteroid.radius,
            shape: asteroid.shape.clone(),
        });
    }

    fn remove_object(&mut self, id: EntityId) {
        // Spawned and removed before JS ever saw it: cancel both
        if let Some(idx) = self.spawned.iter().position(|s| s.id == id) {
            self.spawned.remove(idx);
            return;
        }
        self.removed.push(id.0);
    }

    fn add_flash(&mut self, flash: &HitFlash) {
        self.new_flashes.extend_from_slice(&flash.to_floats());
    }

    fn update_hud(&mut self, hud: &Hud) {
        self.hud = *hud;
    }

    fn game_over(&mut self, hud: &Hud) {
        log::info!("Game Over! score {}, hits {}", hud.score, hud.hits);
    }

    fn render_frame(&mut self, frame: &FrameView<'_>) {
        build_render_buffer(frame, &mut self.render_buffer);

        self.particles.clear();
        self.particles.extend_from_slice(frame.particles.as_floats());
        self.particle_origin = frame.particles.origin().to_array();

        self.flashes.clear();
        for flash in frame.flashes {
            self.flashes.extend_from_slice(&flash.to_floats());
        }
    }
}

/// Owns the frame driver for the page.
///
/// wasm-bindgen cannot export generic structs, so `lib.rs` keeps one of
/// these in a `thread_local!` and exposes free functions.
pub struct GameRunner {
    driver: FrameDriver<BufferBackend>,
    /// Events of the latest tick in wire format.
    events: Vec<WireEvent>,
    running: bool,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self {
            driver: FrameDriver::new(config, BufferBackend::default()),
            events: Vec::new(),
            running: true,
        }
    }

    /// Build from an optional JSON override. Bad config is logged and the
    /// defaults are used instead.
    pub fn from_json(json: Option<&str>) -> Self {
        let config = match json {
            Some(json) => GameConfig::from_json(json).unwrap_or_else(|err| {
                log::error!("{}; falling back to default config", err);
                GameConfig::default()
            }),
            None => GameConfig::default(),
        };
        Self::new(config)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.driver.push_input(event);
    }

    /// Run one frame. Returns false once the host should stop its loop.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.events.clear();
        if !self.running {
            return false;
        }
        let status = self.driver.tick(dt);
        self.events
            .extend(self.driver.events().iter().copied().map(WireEvent::from));
        self.running = status == FrameStatus::Continue;
        self.running
    }

    pub fn hud(&self) -> Hud {
        self.driver.renderer().hud
    }

    pub fn hud_json(&self) -> String {
        serde_json::to_string(&self.hud()).unwrap_or_default()
    }

    // ---- Buffer accessors ----

    pub fn instances(&self) -> &[f32] {
        self.driver.renderer().render_buffer.as_floats()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.driver.renderer().render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.driver.renderer().render_buffer.instance_count()
    }

    pub fn particles(&self) -> &[f32] {
        &self.driver.renderer().particles
    }

    pub fn particle_origin(&self) -> [f32; 3] {
        self.driver.renderer().particle_origin
    }

    pub fn flashes(&self) -> &[f32] {
        &self.driver.renderer().flashes
    }

    pub fn events(&self) -> &[f32] {
        bytemuck::cast_slice(&self.events)
    }

    // ---- Scene changes, drained by JS ----

    pub fn take_spawned_json(&mut self) -> String {
        let spawned = std::mem::take(&mut self.driver.renderer_mut().spawned);
        serde_json::to_string(&spawned).unwrap_or_else(|err| {
            log::error!("spawn records not serializable: {}", err);
            "[]".to_string()
        })
    }

    pub fn take_removed(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.driver.renderer_mut().removed)
    }

    pub fn take_new_flashes(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.driver.renderer_mut().new_flashes)
    }
}
