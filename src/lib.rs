pub mod camera;
pub mod camera_controller;
pub mod chunk;
pub mod config;
pub mod renderer;
pub mod scene;
pub mod tracker;
pub mod window;

pub use camera::{Camera, Projection};
pub use camera_controller::MovementInput;
pub use chunk::{Chunk, ChunkDims, ChunkGrid};
pub use config::ViewerConfig;
pub use scene::{Scene, SceneSurface};
pub use tracker::{PointerCoords, TickReport, ViewportTracker};
pub use window::{ChunkRect, Edge};
