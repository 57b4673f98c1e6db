use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

use crate::chunk::ChunkDims;

pub const DEFAULT_CONFIG_PATH: &str = "viewer.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub chunk: ChunkConfig,
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Terrain Viewer".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// World units per second.
    pub speed: f32,
    pub radius: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 1000.0,
            radius: 25.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChunkConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        let dims = ChunkDims::default();
        Self {
            width: dims.width,
            height: dims.height,
            scale: dims.scale,
        }
    }
}

impl ChunkConfig {
    pub fn dims(&self) -> ChunkDims {
        ChunkDims::new(self.width, self.height, self.scale)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound on the elapsed time fed into one update.
    pub max_frame_seconds: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_frame_seconds: 0.1,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(text).context("invalid viewer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("loading config {}", path.display()))
    }

    /// Explicit path if given, else `viewer.toml` when it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            Self::from_path(fallback)
        } else {
            log::info!("no {DEFAULT_CONFIG_PATH} found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let chunk = &self.chunk;
        ensure!(
            chunk.width > 0 && chunk.height > 0 && chunk.scale > 0,
            "chunk width, height and scale must be non-zero"
        );
        ensure!(self.camera.speed > 0.0, "camera speed must be positive");
        ensure!(
            self.simulation.max_frame_seconds > 0.0,
            "max_frame_seconds must be positive"
        );

        ensure!(
            chunk.width.checked_mul(chunk.scale).is_some()
                && chunk.height.checked_mul(chunk.scale).is_some(),
            "chunk size {}x{} at scale {} overflows world units",
            chunk.width,
            chunk.height,
            chunk.scale
        );

        // A diagonal can reach a column and a row edge on the same frame; the
        // second slide lands a frame later, so two frames of travel must fit
        // inside one chunk.
        let extent = chunk.dims().world_size().min_element();
        let step = self.camera.speed * self.simulation.max_frame_seconds;
        ensure!(
            2.0 * step < extent,
            "camera can move {step} units per frame but chunks are only {extent} wide; \
             the window slides one chunk per frame and needs two frames per chunk"
        );
        Ok(())
    }

    /// Clamps a measured frame time to the validated bound.
    pub fn frame_seconds(&self, measured: f32) -> f32 {
        measured.min(self.simulation.max_frame_seconds)
    }
}
