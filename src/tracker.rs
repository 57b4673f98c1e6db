//! Keeps a fixed-size window of chunks centered on a moving camera.
//!
//! Each tick the camera moves, and if its chunk lies on an edge of the window
//! the window slides one chunk that way: the new edge is materialized and the
//! far edge is dropped. Only one slide happens per tick, and a diagonal can
//! owe a second slide to the next tick, so the camera must travel less than
//! half a chunk per tick (see `ViewerConfig::validate`).

use glam::{IVec2, Vec2};
use log::{debug, info, warn};

use crate::camera::{Camera, Projection};
use crate::camera_controller::MovementInput;
use crate::chunk::{Chunk, ChunkDims, ChunkGrid};
use crate::scene::{Color, Scene, SceneSurface};
use crate::window::{ChunkRect, Edge};

const INITIAL_RADIUS: i32 = 1;

const CHUNK_LIGHT: Color = [0.32, 0.45, 0.28];
const CHUNK_DARK: Color = [0.26, 0.38, 0.23];
const BORDER_COLOR: Color = [0.95, 0.85, 0.2];
const BORDER_THICKNESS: f32 = 2.0;
const CAMERA_COLOR: Color = [64.0 / 255.0, 157.0 / 255.0, 74.0 / 255.0];

/// What a single [`ViewportTracker::tick`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub slid: Option<Edge>,
    pub removed: usize,
}

/// Answer to a pointer query at a window pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerCoords {
    pub world: Vec2,
    pub screen: Vec2,
    pub chunk: Vec2,
}

pub struct ViewportTracker {
    camera: Camera,
    projection: Projection,
    grid: ChunkGrid,
    window: ChunkRect,
    desynced: bool,
}

impl ViewportTracker {
    pub fn new(camera: Camera, dims: ChunkDims, screen_width: u32, screen_height: u32) -> Self {
        let window = ChunkRect::around(IVec2::ZERO, INITIAL_RADIUS);
        let mut grid = ChunkGrid::new(dims);
        grid.create_range(window);

        let mut tracker = Self {
            camera,
            projection: Projection::new(screen_width, screen_height),
            grid,
            window,
            desynced: false,
        };
        tracker.refresh_highlight();
        tracker
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    pub fn window(&self) -> ChunkRect {
        self.window
    }

    /// True while the camera's chunk lies outside the window.
    pub fn is_desynced(&self) -> bool {
        self.desynced
    }

    /// Teleports the camera. The window follows on the next ticks, one slide at a time.
    pub fn set_camera_position(&mut self, position: Vec2) {
        self.camera.position = position;
    }

    pub fn world_to_chunk(&self, world: Vec2) -> Vec2 {
        let size = self.grid.dims().world_size();
        (world + size / 2.0) / size
    }

    /// Fractional chunk-space position of the camera center.
    pub fn camera_chunk_coords(&self) -> Vec2 {
        self.world_to_chunk(self.camera.position)
    }

    /// The chunk the camera center sits in.
    pub fn current_chunk_coord(&self) -> IVec2 {
        self.camera_chunk_coords().floor().as_ivec2()
    }

    /// Move, maybe slide, clean up, then refresh highlight flags.
    pub fn tick(&mut self, elapsed: f32, input: &MovementInput) -> TickReport {
        if input.any() {
            self.camera.displace(input, elapsed);
        }

        let mut report = TickReport {
            slid: self.check_boundaries(),
            removed: 0,
        };
        if report.slid.is_some() {
            report.removed = self.cleanup();
        }
        self.refresh_highlight();

        debug_assert!(
            self.grid.covers_exactly(self.window),
            "chunk set out of sync with window {:?}",
            self.window
        );
        report
    }

    /// Slides the window once if the camera's chunk is on one of its edges.
    pub fn check_boundaries(&mut self) -> Option<Edge> {
        let current = self.current_chunk_coord();
        let outside = !self.window.contains(current);
        if outside && !self.desynced {
            warn!(
                "camera chunk {current} left window {:?}; the window can only slide one chunk per tick",
                self.window
            );
        } else if !outside && self.desynced {
            info!("camera chunk {current} back inside window {:?}", self.window);
        }
        self.desynced = outside;

        let edge = self.window.edge_reached(current)?;
        let strip = self.window.extend(edge);
        self.grid.create_range(strip);
        self.window.retract(edge.opposite());
        debug!("window slid {edge:?} to {:?} (camera chunk {current})", self.window);
        Some(edge)
    }

    fn cleanup(&mut self) -> usize {
        let removed = self.grid.remove_outside(self.window);
        debug!("dropped {removed} chunks outside {:?}", self.window);
        removed
    }

    fn refresh_highlight(&mut self) {
        let coords = self.camera_chunk_coords();
        self.grid.highlight_at(coords);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    pub fn pointer_query(&self, pixel: Vec2) -> PointerCoords {
        let world = self.projection.world_coords(&self.camera, pixel);
        PointerCoords {
            world,
            screen: self.projection.screen_coords(pixel),
            chunk: self.world_to_chunk(world),
        }
    }

    /// Window-pixel position of the chunk's top-left corner.
    pub fn chunk_draw_origin(&self, chunk: &Chunk) -> Vec2 {
        let size = chunk.dims().world_size();
        let screen_offset = self.projection.half_extent() - size / 2.0;
        chunk.coord().as_vec2() * size + screen_offset - self.camera.position
    }

    pub fn status_lines(&self) -> Vec<String> {
        let position = self.camera.position;
        let chunk = self.camera_chunk_coords();
        let current = self.current_chunk_coord();
        vec![
            format!("Camera (world): {:.2}, {:.2}", position.x, position.y),
            "Camera (screen): 0, 0".to_string(),
            format!("Camera (chunk): {:.3}, {:.3}", chunk.x, chunk.y),
            format!("Chunk: {}, {}", current.x, current.y),
        ]
    }
}

impl Scene for ViewportTracker {
    fn update(&mut self, elapsed: f32, input: &MovementInput) {
        self.tick(elapsed, input);
    }

    fn render(&self, surface: &mut dyn SceneSurface) {
        let size = self.grid.dims().world_size();
        for chunk in self.grid.iter() {
            let origin = self.chunk_draw_origin(chunk);
            let shade = if (chunk.column() + chunk.row()).rem_euclid(2) == 0 {
                CHUNK_LIGHT
            } else {
                CHUNK_DARK
            };
            surface.fill_rect(origin, size, shade);
            if chunk.highlighted {
                surface.outline_rect(origin, size, BORDER_THICKNESS, BORDER_COLOR);
            }
        }
        surface.fill_circle(self.projection.half_extent(), self.camera.radius, CAMERA_COLOR);
    }

    fn overlay_lines(&self) -> Vec<String> {
        self.status_lines()
    }

    fn resize(&mut self, width: u32, height: u32) {
        ViewportTracker::resize(self, width, height);
    }
}
