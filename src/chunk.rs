use glam::{IVec2, Vec2};
use std::collections::HashSet;

use crate::window::ChunkRect;

/// Size of a chunk in cells and the world units per cell. Shared by every chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkDims {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl ChunkDims {
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        Self { width, height, scale }
    }

    /// World-space extent of one chunk.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.scale as f32
    }
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self::new(64, 64, 4)
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    coord: IVec2,
    dims: ChunkDims,
    pub highlighted: bool,
}

impl Chunk {
    pub fn new(column: i32, row: i32, dims: ChunkDims) -> Self {
        Self {
            coord: IVec2::new(column, row),
            dims,
            highlighted: false,
        }
    }

    pub fn column(&self) -> i32 {
        self.coord.x
    }

    pub fn row(&self) -> i32 {
        self.coord.y
    }

    pub fn coord(&self) -> IVec2 {
        self.coord
    }

    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Half-open unit cell test in chunk space: `column <= x < column + 1`, same for rows.
    pub fn contains_point(&self, chunk_space: Vec2) -> bool {
        let min = self.coord.as_vec2();
        let max = min + Vec2::ONE;
        chunk_space.x >= min.x
            && chunk_space.x < max.x
            && chunk_space.y >= min.y
            && chunk_space.y < max.y
    }
}

/// The set of materialized chunks.
pub struct ChunkGrid {
    dims: ChunkDims,
    chunks: Vec<Chunk>,
}

impl ChunkGrid {
    pub fn new(dims: ChunkDims) -> Self {
        Self {
            dims,
            chunks: Vec::new(),
        }
    }

    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// Materializes every chunk in `range`, rows outer and columns inner.
    ///
    /// Existing chunks are not consulted; the caller must hand in a range that
    /// does not overlap what is already present.
    pub fn create_range(&mut self, range: ChunkRect) {
        for row in range.min_row..=range.max_row {
            for column in range.min_column..=range.max_column {
                debug_assert!(
                    self.get(IVec2::new(column, row)).is_none(),
                    "chunk ({column}, {row}) materialized twice"
                );
                self.chunks.push(Chunk::new(column, row, self.dims));
            }
        }
    }

    /// Drops every chunk outside `range` and returns how many were dropped.
    pub fn remove_outside(&mut self, range: ChunkRect) -> usize {
        let before = self.chunks.len();
        self.chunks.retain(|chunk| range.contains(chunk.coord()));
        before - self.chunks.len()
    }

    /// Flags the chunk whose cell holds `chunk_space` and clears every other flag.
    pub fn highlight_at(&mut self, chunk_space: Vec2) {
        for chunk in &mut self.chunks {
            chunk.highlighted = chunk.contains_point(chunk_space);
        }
    }

    pub fn get(&self, coord: IVec2) -> Option<&Chunk> {
        self.chunks.iter().find(|chunk| chunk.coord() == coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// True when the grid holds exactly the lattice points of `range`, each once.
    pub fn covers_exactly(&self, range: ChunkRect) -> bool {
        let mut seen = HashSet::with_capacity(self.chunks.len());
        for chunk in &self.chunks {
            if !range.contains(chunk.coord()) || !seen.insert(chunk.coord()) {
                return false;
            }
        }
        seen.len() == range.area()
    }
}
