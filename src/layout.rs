use super::SQRT_3;
use thiserror::Error;

/// Describes how the band between the inner and outer hexagon is split into rows of cells.
///
/// The cell size is anchored to the inner ring so that the first row holds the requested
/// number of cells, every row further out holds proportionally more cells of the same size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// The radius of the outer hexagon
    outer_radius: f64,
    /// The radius of the inner hexagon
    inner_radius: f64,
    /// The number of cells requested on the first row
    first_row_count: u32,
    /// The width of a single row
    cell_size: f64,
    /// The number of rows between the inner and outer hexagon
    row_count: usize,
}

impl GridLayout {
    /// Creates a new layout
    ///
    /// # Parameters
    ///
    /// outer_radius: The radius of the outer hexagon
    ///
    /// inner_radius: The radius of the inner hexagon, must be smaller than outer_radius
    ///
    /// first_row_count: The number of cells on the innermost row, must be at least 1
    ///
    /// # Errors
    ///
    /// See InvalidLayoutError for the possible errors
    pub fn new(outer_radius: f64, inner_radius: f64, first_row_count: u32) -> Result<Self, InvalidLayoutError> {
        if first_row_count == 0 {
            return Err(InvalidLayoutError::FirstRowCount);
        }

        // Written so that NaN radii are rejected as well
        if !outer_radius.is_finite() || !inner_radius.is_finite() || !(outer_radius > inner_radius) {
            return Err(InvalidLayoutError::Radii { outer: outer_radius, inner: inner_radius });
        }

        let cell_size = (inner_radius * 2.0 * SQRT_3 / (first_row_count as f64)).floor();
        if !(cell_size > 0.0) || !cell_size.is_finite() {
            return Err(InvalidLayoutError::CellSize(cell_size));
        }

        let row_count = ((outer_radius - inner_radius) / cell_size).floor() as usize;

        log::debug!("Grid layout: outer radius {}, inner radius {}, cell size {}, {} rows", outer_radius, inner_radius, cell_size, row_count);

        Ok(Self {
            outer_radius,
            inner_radius,
            first_row_count,
            cell_size,
            row_count,
        })
    }

    /// Retrieves the radius of the outer hexagon
    pub fn get_outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Retrieves the radius of the inner hexagon
    pub fn get_inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Retrieves the number of cells requested on the first row
    pub fn get_first_row_count(&self) -> u32 {
        self.first_row_count
    }

    /// Retrieves the width of a single row
    pub fn get_cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Retrieves the number of rows
    pub fn get_row_count(&self) -> usize {
        self.row_count
    }

    /// Retrieves the radius at which the given row starts
    ///
    /// # Parameters
    ///
    /// row: The row to get the radius of, row_count gives the radius where the last row ends
    pub fn ring_radius(&self, row: usize) -> f64 {
        self.inner_radius + (row as f64) * self.cell_size
    }

    /// Retrieves the approximate number of cells fitting on a row, this is not rounded.
    ///
    /// Since the cell size is rounded down the first row holds at least first_row_count cells
    /// but less than first_row_count * (cell_size + 1) / cell_size, small cell sizes overshoot.
    ///
    /// # Parameters
    ///
    /// row: The row to count the cells of
    ///
    /// # Panics
    ///
    /// In debug mode it panics if row >= row_count
    pub fn cells_on_row(&self, row: usize) -> f64 {
        if cfg!(debug_assertions) && row >= self.row_count {
            panic!("row must be smaller than {} but received {}", self.row_count, row);
        }

        self.ring_radius(row) * 2.0 * SQRT_3 / self.cell_size
    }

    /// Retrieves the number of cells built on a row, this is cells_on_row rounded to the nearest integer
    ///
    /// # Parameters
    ///
    /// row: The row to count the cells of
    ///
    /// # Panics
    ///
    /// In debug mode it panics if row >= row_count
    pub fn integer_cells_on_row(&self, row: usize) -> usize {
        self.cells_on_row(row).round() as usize
    }
}

/// The error types for when the geometry of a layout is degenerate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidLayoutError {
    /// The first row must hold at least one cell
    #[error("The first row must contain at least 1 cell")]
    FirstRowCount,
    /// The inner hexagon must be strictly inside the outer hexagon
    #[error("The outer radius must be larger than the inner radius but received outer: {outer}, inner: {inner}")]
    Radii { outer: f64, inner: f64 },
    /// The cell size rounded down to nothing
    #[error("The cell size must be larger than 0 but received {:?}", .0)]
    CellSize(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let layout = GridLayout::new(330.0, 49.0, 5).unwrap();
        // 49 * 2 * sqrt(3) / 5 = 33.95
        assert_eq!(layout.get_cell_size(), 33.0);
        assert_eq!(layout.get_row_count(), 8);
    }

    #[test]
    fn inner_larger_than_outer_fails() {
        assert_eq!(
            GridLayout::new(10.0, 20.0, 5),
            Err(InvalidLayoutError::Radii { outer: 10.0, inner: 20.0 }),
        );
    }

    #[test]
    fn equal_radii_fail() {
        assert!(matches!(GridLayout::new(20.0, 20.0, 5), Err(InvalidLayoutError::Radii { .. })));
    }

    #[test]
    fn zero_first_row_fails() {
        assert_eq!(GridLayout::new(330.0, 49.0, 0), Err(InvalidLayoutError::FirstRowCount));
    }

    #[test]
    fn cell_size_rounding_to_zero_fails() {
        // 1 * 2 * sqrt(3) / 5 = 0.69
        assert_eq!(GridLayout::new(100.0, 1.0, 5), Err(InvalidLayoutError::CellSize(0.0)));
        assert!(GridLayout::new(f64::NAN, 1.0, 5).is_err());
    }

    #[test]
    fn infinite_radii_fail() {
        assert!(matches!(GridLayout::new(f64::INFINITY, 10.0, 5), Err(InvalidLayoutError::Radii { .. })));
        assert!(matches!(GridLayout::new(100.0, f64::NEG_INFINITY, 5), Err(InvalidLayoutError::Radii { .. })));
    }

    #[test]
    fn valid_inputs_construct() {
        for (outer, inner, first) in [(330.0, 49.0, 5), (100.0, 99.0, 1), (1000.0, 10.0, 3), (50.0, 20.0, 40)] {
            let layout = GridLayout::new(outer, inner, first).unwrap();
            assert!(layout.get_cell_size() > 0.0);
        }
    }

    #[test]
    fn narrow_band_has_no_rows() {
        let layout = GridLayout::new(50.0, 49.0, 5).unwrap();
        assert_eq!(layout.get_row_count(), 0);
    }

    #[test]
    fn first_row_matches_requested_count() {
        for first in 1..10 {
            let layout = GridLayout::new(400.0, 60.0, first).unwrap();
            assert_eq!(layout.integer_cells_on_row(0), first as usize);
        }
    }

    #[test]
    fn small_cells_overshoot_first_row_within_bound() {
        // 20 * 2 * sqrt(3) / 40 = 1.73 is rounded down to 1
        let layout = GridLayout::new(100.0, 20.0, 40).unwrap();
        assert_eq!(layout.get_cell_size(), 1.0);
        let first = layout.cells_on_row(0);
        assert!(first >= 40.0 && first < 40.0 * 2.0);
        assert_eq!(layout.integer_cells_on_row(0), 69);
    }

    #[test]
    fn cells_grow_outward() {
        let layout = GridLayout::new(330.0, 49.0, 5).unwrap();
        let counts: Vec<f64> = (0..layout.get_row_count())
            .map(|row| layout.cells_on_row(row))
            .collect();
        for w in counts.windows(2) {
            assert!(w[1] >= w[0], "cells_on_row must be non-decreasing");
        }
    }

    #[test]
    fn ring_radius_steps_by_cell_size() {
        let layout = GridLayout::new(330.0, 49.0, 5).unwrap();
        assert_eq!(layout.ring_radius(0), 49.0);
        assert_eq!(layout.ring_radius(2), 49.0 + 66.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn row_out_of_range_panics() {
        let layout = GridLayout::new(330.0, 49.0, 5).unwrap();
        layout.cells_on_row(layout.get_row_count());
    }
}
