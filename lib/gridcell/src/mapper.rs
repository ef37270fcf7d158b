//! Grid ↔ world space conversion.
//!
//! A `Mapper` scales discrete cell coordinates onto the XZ plane and integer
//! elevation levels onto Y. Conversion is bidirectional: a world point maps
//! back to the cell whose footprint contains its XZ projection.

use glam::Vec3;

use crate::cell::Cell;

/// Trait for bidirectional coordinate conversion
pub trait Convert<T, U> {
    /// Convert from type T to type U
    fn convert(&self, it: T) -> U;
}

/// Converts grid cells to world positions and back.
///
/// # Fields
///
/// - `tile_size`: edge length of one square tile in world units
/// - `elevation_unit`: world height of one elevation level
#[derive(Clone, Copy, Debug)]
pub struct Mapper {
    tile_size: f32,
    elevation_unit: f32,
}

impl Mapper {
    pub fn new(tile_size: f32, elevation_unit: f32) -> Self {
        Self { tile_size, elevation_unit }
    }

    pub fn tile_size(&self) -> f32 { self.tile_size }
    pub fn elevation_unit(&self) -> f32 { self.elevation_unit }

    /// World height of `levels` elevation levels.
    pub fn rise(&self, levels: i32) -> f32 {
        levels as f32 * self.elevation_unit
    }

    /// XZ extents of a cell's footprint as `(min, max)`; Y is not meaningful.
    pub fn bounds(&self, cell: Cell) -> (Vec3, Vec3) {
        let center: Vec3 = self.convert((cell, 0));
        let half = self.tile_size / 2.;
        (
            Vec3 { x: center.x - half, y: 0., z: center.z - half },
            Vec3 { x: center.x + half, y: 0., z: center.z + half },
        )
    }

    /// Whether a world point's XZ projection lies on `cell`'s footprint.
    pub fn contains(&self, cell: Cell, point: Vec3) -> bool {
        let (min, max) = self.bounds(cell);
        point.x >= min.x && point.x <= max.x && point.z >= min.z && point.z <= max.z
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(1.0, 0.25)
    }
}

impl Convert<(Cell, i32), Vec3> for Mapper {
    fn convert(&self, (cell, level): (Cell, i32)) -> Vec3 {
        Vec3 {
            x: cell.x as f32 * self.tile_size,
            y: level as f32 * self.elevation_unit,
            z: cell.y as f32 * self.tile_size,
        }
    }
}

impl Convert<Vec3, Cell> for Mapper {
    fn convert(&self, world: Vec3) -> Cell {
        Cell {
            x: (world.x / self.tile_size).round() as i32,
            y: (world.z / self.tile_size).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_cell_world_cell() {
        let mapper = Mapper::new(1.0, 0.25);
        let cell = Cell::new(7, -3);
        let world: Vec3 = mapper.convert((cell, 5));
        let back: Cell = mapper.convert(world);
        assert_eq!(cell, back);
    }

    #[test]
    fn test_elevation_maps_to_y() {
        let mapper = Mapper::new(2.0, 0.5);
        let world: Vec3 = mapper.convert((Cell::new(0, 0), 4));
        assert_eq!(world.y, 2.0);
    }

    #[test]
    fn test_offset_point_maps_to_nearest_cell() {
        let mapper = Mapper::new(1.0, 0.25);
        let near_edge = Vec3 { x: 2.4, y: 0., z: -1.4 };
        let cell: Cell = mapper.convert(near_edge);
        assert_eq!(cell, Cell::new(2, -1));
    }

    #[test]
    fn test_bounds_centered_on_cell() {
        let mapper = Mapper::new(1.0, 0.25);
        let (min, max) = mapper.bounds(Cell::new(3, 3));
        assert!((min.x - 2.5).abs() < 1e-6);
        assert!((max.x - 3.5).abs() < 1e-6);
        assert!(mapper.contains(Cell::new(3, 3), Vec3 { x: 3.2, y: 0., z: 2.9 }));
        assert!(!mapper.contains(Cell::new(3, 3), Vec3 { x: 4.2, y: 0., z: 2.9 }));
    }
}
