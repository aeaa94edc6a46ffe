use super::{
    types::Point,
    hexagon::Hexagon,
    layout::GridLayout,
};

/// A single cell of a section, it is only identified by its position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The index of the section owning the cell
    section: usize,
    /// The row of the cell, 0 is the innermost row
    row: usize,
    /// The position of the cell within its row
    column: usize,
}

impl Cell {
    /// Creates a new cell
    ///
    /// # Parameters
    ///
    /// section: The index of the section owning the cell
    ///
    /// row: The row of the cell
    ///
    /// column: The position of the cell within its row
    pub fn new(section: usize, row: usize, column: usize) -> Self {
        Self {
            section,
            row,
            column,
        }
    }

    /// Retrieves the index of the section
    pub fn get_section(&self) -> usize {
        self.section
    }

    /// Retrieves the row
    pub fn get_row(&self) -> usize {
        self.row
    }

    /// Retrieves the column
    pub fn get_column(&self) -> usize {
        self.column
    }
}

/// Defines the shape of individual cells, used by renderers drawing a section cell by cell
pub trait CellGeometry {
    /// Retrieves the polygon covering a cell
    ///
    /// # Parameters
    ///
    /// section: The section owning the cell
    ///
    /// cell: The cell to get the polygon of, it is always a valid cell of section
    fn cell_polygon(&self, section: &SectionGrid, cell: &Cell) -> Hexagon;
}

/// One of the six angular wedges of the field with its rows of cells
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGrid {
    /// The index of this section within the field
    index: usize,
    /// The central bearing of the section
    angle: f64,
    /// The cells, first index is the row, second index is the column
    rows: Vec<Vec<Cell>>,
}

impl SectionGrid {
    /// Creates a new section and builds all of its cells
    ///
    /// # Parameters
    ///
    /// index: The index of this section within the field
    ///
    /// angle: The central bearing of the section
    ///
    /// layout: The layout deciding the number of rows and cells
    pub fn new(index: usize, angle: f64, layout: &GridLayout) -> Self {
        let rows = (0..layout.get_row_count())
            .map(|row| {
                (0..layout.integer_cells_on_row(row))
                    .map(|column| Cell::new(index, row, column))
                    .collect()
            })
            .collect();

        Self {
            index,
            angle,
            rows,
        }
    }

    /// Retrieves the index of the section
    pub fn get_index(&self) -> usize {
        self.index
    }

    /// Retrieves the central bearing
    pub fn get_angle(&self) -> f64 {
        self.angle
    }

    /// Retrieves all rows of cells
    pub fn get_rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Retrieves a single row of cells
    ///
    /// # Parameters
    ///
    /// row: The row to retrieve
    pub fn get_row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(|cells| cells.as_slice())
    }

    /// Retrieves a single cell
    ///
    /// # Parameters
    ///
    /// row: The row of the cell
    ///
    /// column: The column of the cell
    pub fn get_cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(column)
    }

    /// Retrieves the number of rows
    pub fn get_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Retrieves the total number of cells over all rows
    pub fn get_cell_count(&self) -> usize {
        self.rows.iter().map(|cells| cells.len()).sum()
    }

    /// Retrieves the line from the center of the field to the outer hexagon along the bearing of the section
    ///
    /// # Parameters
    ///
    /// center: The center of the field
    ///
    /// outer_radius: The radius of the outer hexagon
    pub fn outline_vertices(&self, center: &Point, outer_radius: f64) -> (Point, Point) {
        (*center, center + &Point::polar(self.angle, outer_radius))
    }

    /// Retrieves the polygon of a cell as given by geometry, None if the cell does not exist
    ///
    /// # Parameters
    ///
    /// geometry: The definition of the cell shapes
    ///
    /// row: The row of the cell
    ///
    /// column: The column of the cell
    pub fn cell_polygon<G: CellGeometry>(&self, geometry: &G, row: usize, column: usize) -> Option<Hexagon> {
        let cell = self.get_cell(row, column)?;
        Some(geometry.cell_polygon(self, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn example_layout() -> GridLayout {
        GridLayout::new(330.0, 49.0, 5).unwrap()
    }

    /// Places a unit hexagon on the bearing of the section, one unit per row
    struct Spokes;

    impl CellGeometry for Spokes {
        fn cell_polygon(&self, section: &SectionGrid, cell: &Cell) -> Hexagon {
            let offset = Point::polar(section.get_angle(), cell.get_row() as f64);
            Hexagon::new(&offset, 1.0)
        }
    }

    #[test]
    fn rows_follow_layout() {
        let layout = example_layout();
        let section = SectionGrid::new(2, 0.5 * PI, &layout);
        assert_eq!(section.get_row_count(), layout.get_row_count());
        for (row, cells) in section.get_rows().iter().enumerate() {
            assert_eq!(cells.len(), layout.integer_cells_on_row(row));
            for (column, cell) in cells.iter().enumerate() {
                assert_eq!(*cell, Cell::new(2, row, column));
            }
        }
    }

    #[test]
    fn first_row_holds_requested_cells() {
        let section = SectionGrid::new(0, 0.5 * PI, &example_layout());
        assert_eq!(section.get_row(0).map(|cells| cells.len()), Some(5));
    }

    #[test]
    fn cell_count_sums_rows() {
        let layout = example_layout();
        let section = SectionGrid::new(0, 0.5 * PI, &layout);
        let expected: usize = (0..layout.get_row_count()).map(|row| layout.integer_cells_on_row(row)).sum();
        assert_eq!(section.get_cell_count(), expected);
    }

    #[test]
    fn missing_cells_are_none() {
        let section = SectionGrid::new(0, 0.5 * PI, &example_layout());
        assert!(section.get_cell(0, 5).is_none());
        assert!(section.get_cell(100, 0).is_none());
        assert!(section.get_row(8).is_none());
    }

    #[test]
    fn outline_reaches_outer_radius() {
        let center = Point::new(320.0, 240.0);
        let section = SectionGrid::new(0, 0.5 * PI, &example_layout());
        let (start, end) = section.outline_vertices(&center, 200.0);
        assert_eq!(start, center);
        assert!((end.get_x() - 320.0).abs() < EPS);
        assert!((end.get_y() - 40.0).abs() < EPS);
    }

    #[test]
    fn cell_polygon_uses_geometry() {
        let section = SectionGrid::new(1, 0.5 * PI + PI / 3.0, &example_layout());
        let polygon = section.cell_polygon(&Spokes, 3, 1).unwrap();
        assert!((polygon.get_center().distance(&Point::new(0.0, 0.0)) - 3.0).abs() < EPS);
        assert!(section.cell_polygon(&Spokes, 0, 99).is_none());
    }

    #[test]
    fn empty_layout_has_no_cells() {
        let layout = GridLayout::new(50.0, 49.0, 5).unwrap();
        let section = SectionGrid::new(0, 0.5 * PI, &layout);
        assert_eq!(section.get_row_count(), 0);
        assert_eq!(section.get_cell_count(), 0);
    }
}
