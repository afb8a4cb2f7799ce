//! Headless frame loop driving the scene buffer encoder.
//!
//! Encodes a small scene (two spinning cubes over a checkerboard floor, lit
//! by two lights) for a fixed number of frames, uploads each frame into a
//! host-side staging buffer and logs what the shaders would see.

use bindless_scene::bindless::{
    Result, Error, SceneBuffer, SceneBufferConfig, FrameBudget, UploadTarget,
};
use bindless_scene::bindless::camera::{FlyCamera, reverse_z_perspective};
use bindless_scene::bindless::geometry::{Mesh, MeshInstance, CheckerboardDesc, make_checkerboard_plane};
use bindless_scene::bindless::light::Light;
use bindless_scene::bindless::log::{self, DefaultLogger, LogSeverity};
use bindless_scene::scene_info;
use glam::{Quat, Vec3, Vec4};
use std::sync::Mutex;

const SOURCE: &str = "demo";

const RENDER_WIDTH: f32 = 480.0;
const RENDER_HEIGHT: f32 = 320.0;
const FOV_Y_DEGREES: f32 = 70.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 200.0;

const FRAME_COUNT: u32 = 4;
const FRAME_TIME: f32 = 1.0 / 60.0;

// ===== STAGING BUFFER =====

/// Host-visible copy of the GPU scene buffer
struct StagingBuffer {
    bytes: Mutex<Vec<u8>>,
}

impl StagingBuffer {
    fn new(size: usize) -> Self {
        Self { bytes: Mutex::new(vec![0; size]) }
    }
}

impl UploadTarget for StagingBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let mut bytes = self.bytes.lock()
            .map_err(|_| Error::UploadFailed("staging buffer lock poisoned".to_string()))?;

        let start = offset as usize;
        let end = start + data.len();
        if end > bytes.len() {
            return Err(Error::UploadFailed(format!(
                "write [{}, {}) exceeds staging buffer size {}", start, end, bytes.len()
            )));
        }
        bytes[start..end].copy_from_slice(data);
        Ok(())
    }
}

// ===== SCENE =====

struct Scene {
    cube: Mesh,
    plane: Mesh,
    floor: Vec<MeshInstance>,
    camera: FlyCamera,
}

impl Scene {
    fn new() -> Self {
        let plane = Mesh::plane();

        let even = MeshInstance::covering(&plane).with_color_blend(Vec4::new(1.0, 1.0, 1.0, 0.5));
        let odd = MeshInstance::covering(&plane).with_color_blend(Vec4::new(0.0, 0.0, 0.0, 0.5));
        let floor = make_checkerboard_plane(
            &CheckerboardDesc {
                origin: Vec3::new(0.0, -0.8, -0.5),
                tile_spacing: 1.25,
                tile_scale: 0.75,
                columns: 5,
                rows: 5,
            },
            &even,
            &odd,
        );

        Self {
            cube: Mesh::cube(),
            plane,
            floor,
            camera: FlyCamera::new(Vec3::new(0.0, 0.5, 3.0), -0.15, 0.0),
        }
    }

    fn budget(&self, light_count: usize) -> FrameBudget {
        let mut budget = FrameBudget::new();
        budget
            .add_mesh(&self.cube)
            .add_mesh(&self.plane)
            .add_batch(2)
            .add_batch(self.floor.len())
            .add_lights(light_count);
        budget
    }

    fn cubes(&self, time: f32) -> [MeshInstance; 2] {
        let spin = Quat::from_rotation_y(time) * Quat::from_rotation_x(time * 0.5);
        [
            MeshInstance::covering(&self.cube)
                .with_position(Vec3::new(-1.0, 0.0, -1.5))
                .with_rotation(spin),
            MeshInstance::covering(&self.cube)
                .with_position(Vec3::new(1.0, 0.0, -1.5))
                .with_rotation(spin.inverse())
                .with_color_blend(Vec4::new(0.8, 0.2, 0.2, 0.3)),
        ]
    }

    fn encode(&self, buffer: &mut SceneBuffer, time: f32) -> Result<()> {
        buffer.reset();
        buffer.set_camera(&self.camera);

        let cube = buffer.push_mesh(&self.cube)?;
        let plane = buffer.push_mesh(&self.plane)?;
        buffer.push_indices()?;

        buffer.push_instances_of(cube, &self.cubes(time))?;
        buffer.push_instances_of(plane, &self.floor)?;
        buffer.push_properties()
    }
}

fn run() -> Result<()> {
    log::set_logger(DefaultLogger::with_min_severity(LogSeverity::Debug));

    let mut scene = Scene::new();
    let projection = reverse_z_perspective(
        FOV_Y_DEGREES.to_radians(),
        RENDER_WIDTH / RENDER_HEIGHT,
        NEAR_PLANE,
        FAR_PLANE,
    );
    let lights = [
        Light::looking_at(Vec3::new(3.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, projection),
        Light::looking_at(Vec3::new(-3.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, projection),
    ];

    let config = SceneBufferConfig::for_budget(&scene.budget(lights.len()));
    let mut buffer = SceneBuffer::new(config)?;
    buffer.set_proj_matrix(projection);
    for light in lights {
        buffer.lights_mut().insert(light)?;
    }

    let staging = StagingBuffer::new(buffer.capacity());

    for frame in 0..FRAME_COUNT {
        let time = frame as f32 * FRAME_TIME * 30.0;
        scene.camera.translate_local(Vec3::new(0.0, 0.0, -0.05));

        scene.encode(&mut buffer, time)?;
        buffer.upload(&staging)?;

        let bindings = buffer.draw_bindings()?;
        scene_info!(SOURCE,
            "frame {}: {} bytes, {} vertices, {} indices @{}, {} commands @{}, {} instances @{}, {} lights @{}",
            frame,
            buffer.len(),
            bindings.vertex_count,
            bindings.index_count,
            bindings.index_offset,
            bindings.command_count,
            bindings.command_offset,
            bindings.property_count,
            bindings.property_offset,
            bindings.light_count,
            bindings.light_offset,
        );
    }

    scene_info!(SOURCE,
        "camera ended at {:?}, buffer capacity {} bytes",
        buffer.camera_position(),
        buffer.capacity(),
    );
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        log::log(LogSeverity::Error, SOURCE, error.to_string());
        std::process::exit(1);
    }
}
