//! The rectangle of chunk coordinates that must be materialized.

use glam::IVec2;

/// Window edge, listed in the order edges are checked each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const PRIORITY: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }
}

/// Closed range `[min_column, max_column] x [min_row, max_row]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkRect {
    pub min_column: i32,
    pub max_column: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl ChunkRect {
    pub fn new(min_column: i32, max_column: i32, min_row: i32, max_row: i32) -> Self {
        debug_assert!(min_column <= max_column && min_row <= max_row);
        Self {
            min_column,
            max_column,
            min_row,
            max_row,
        }
    }

    /// Square window of `radius` chunks on each side of `center`.
    pub fn around(center: IVec2, radius: i32) -> Self {
        Self::new(
            center.x - radius,
            center.x + radius,
            center.y - radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> i32 {
        self.max_column - self.min_column + 1
    }

    pub fn height(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    pub fn area(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= self.min_column
            && coord.x <= self.max_column
            && coord.y >= self.min_row
            && coord.y <= self.max_row
    }

    /// Lattice points in row-major order.
    pub fn lattice(&self) -> impl Iterator<Item = IVec2> + use<> {
        let columns = self.min_column..=self.max_column;
        (self.min_row..=self.max_row)
            .flat_map(move |row| columns.clone().map(move |column| IVec2::new(column, row)))
    }

    /// First edge in [`Edge::PRIORITY`] order whose column or row equals `coord`'s.
    pub fn edge_reached(&self, coord: IVec2) -> Option<Edge> {
        Edge::PRIORITY.into_iter().find(|edge| match edge {
            Edge::Left => coord.x == self.min_column,
            Edge::Right => coord.x == self.max_column,
            Edge::Top => coord.y == self.min_row,
            Edge::Bottom => coord.y == self.max_row,
        })
    }

    /// Pushes `edge` one unit outward and returns the strip that was added,
    /// spanning the full perpendicular extent.
    pub fn extend(&mut self, edge: Edge) -> ChunkRect {
        match edge {
            Edge::Left => {
                self.min_column -= 1;
                ChunkRect::new(self.min_column, self.min_column, self.min_row, self.max_row)
            }
            Edge::Right => {
                self.max_column += 1;
                ChunkRect::new(self.max_column, self.max_column, self.min_row, self.max_row)
            }
            Edge::Top => {
                self.min_row -= 1;
                ChunkRect::new(self.min_column, self.max_column, self.min_row, self.min_row)
            }
            Edge::Bottom => {
                self.max_row += 1;
                ChunkRect::new(self.min_column, self.max_column, self.max_row, self.max_row)
            }
        }
    }

    /// Pulls `edge` one unit inward.
    pub fn retract(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.min_column += 1,
            Edge::Right => self.max_column -= 1,
            Edge::Top => self.min_row += 1,
            Edge::Bottom => self.max_row -= 1,
        }
        debug_assert!(self.min_column <= self.max_column && self.min_row <= self.max_row);
    }
}
