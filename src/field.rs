use super::{
    types::{Point, Size},
    hexagon::Hexagon,
    layout::{GridLayout, InvalidLayoutError},
    section::SectionGrid,
    config::FieldConfig,
};
use std::f64::consts::PI;
use thiserror::Error;

/// The number of sections in a field
pub const SECTION_COUNT: usize = 6;

/// What part of the field is being shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// The whole field is shown
    Overview,
    /// A single section is shown
    Section(usize),
}

/// The full hexagon split into six sections around a shared center
#[derive(Clone, Debug, PartialEq)]
pub struct HexField {
    /// The center of all hexagons
    center: Point,
    /// The radius of the outer hexagon
    outer_radius: f64,
    /// The radius of the inner hexagon
    inner_radius: f64,
    /// The layout shared by all sections
    layout: GridLayout,
    /// The sections ordered by angle
    sections: [SectionGrid; SECTION_COUNT],
    /// The selected section, None for the overview
    active_section: Option<usize>,
}

impl HexField {
    /// Creates a new field and builds all sections
    ///
    /// # Parameters
    ///
    /// center: The center of the field
    ///
    /// outer_radius: The radius of the outer hexagon
    ///
    /// config: The ratio of the inner hexagon and the number of cells on the first row
    ///
    /// # Errors
    ///
    /// See InvalidLayoutError for the possible errors
    pub fn new(center: &Point, outer_radius: f64, config: &FieldConfig) -> Result<Self, InvalidLayoutError> {
        let inner_radius = outer_radius * config.center_hexagon_ratio;
        let layout = GridLayout::new(outer_radius, inner_radius, config.first_row_count)?;

        // The first section points up, the rest follow at a sixth of a turn each
        let sections = std::array::from_fn(|index| {
            let angle = 0.5 * PI + (index as f64) * PI / 3.0;
            SectionGrid::new(index, angle, &layout)
        });

        log::info!(
            "Created hex field at ({}, {}) with outer radius {}: {} rows, {} cells per section",
            center.get_x(),
            center.get_y(),
            outer_radius,
            layout.get_row_count(),
            sections[0].get_cell_count(),
        );

        Ok(Self {
            center: *center,
            outer_radius,
            inner_radius,
            layout,
            sections,
            active_section: None,
        })
    }

    /// Creates a new field filling a viewport with the corner at origo
    ///
    /// # Parameters
    ///
    /// size: The size of the viewport, the outer hexagon touches the shortest side
    ///
    /// config: The ratio of the inner hexagon and the number of cells on the first row
    ///
    /// # Errors
    ///
    /// See InvalidLayoutError for the possible errors
    pub fn from_viewport(size: &Size, config: &FieldConfig) -> Result<Self, InvalidLayoutError> {
        Self::new(&size.get_center(), 0.5 * size.get_min(), config)
    }

    /// Retrieves the center
    pub fn get_center(&self) -> &Point {
        &self.center
    }

    /// Retrieves the radius of the outer hexagon
    pub fn get_outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Retrieves the radius of the inner hexagon
    pub fn get_inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Retrieves the layout
    pub fn get_layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Retrieves the outline of the whole field
    pub fn outer_hexagon(&self) -> Hexagon {
        Hexagon::new(&self.center, self.outer_radius)
    }

    /// Retrieves the outline of the center hexagon
    pub fn inner_hexagon(&self) -> Hexagon {
        Hexagon::new(&self.center, self.inner_radius)
    }

    /// Retrieves the inner outline of every row
    pub fn grid_rings(&self) -> Vec<Hexagon> {
        (0..self.layout.get_row_count())
            .map(|row| Hexagon::new(&self.center, self.layout.ring_radius(row)))
            .collect()
    }

    /// Retrieves all sections ordered by angle
    pub fn sections(&self) -> &[SectionGrid; SECTION_COUNT] {
        &self.sections
    }

    /// Retrieves a single section
    ///
    /// # Parameters
    ///
    /// index: The index of the section
    pub fn get_section(&self, index: usize) -> Option<&SectionGrid> {
        self.sections.get(index)
    }

    /// Retrieves the boundary line of every section
    pub fn section_outlines(&self) -> [(Point, Point); SECTION_COUNT] {
        self.sections.each_ref().map(|section| section.outline_vertices(&self.center, self.outer_radius))
    }

    /// Retrieves the selected section, None if the whole field is shown
    pub fn get_active_section(&self) -> Option<usize> {
        self.active_section
    }

    /// Retrieves the selected section if it is shown
    pub fn get_active_section_grid(&self) -> Option<&SectionGrid> {
        self.sections.get(self.active_section?)
    }

    /// Selects a section or returns to the overview
    ///
    /// # Parameters
    ///
    /// active_section: The section to select, None to show the whole field
    ///
    /// # Errors
    ///
    /// Returns SectionIndexError if the index is not a valid section, the selection is then unchanged
    pub fn set_active_section(&mut self, active_section: Option<usize>) -> Result<(), SectionIndexError> {
        if let Some(index) = active_section {
            if index >= SECTION_COUNT {
                return Err(SectionIndexError(index));
            }
        }

        log::debug!("Active section changed from {:?} to {:?}", self.active_section, active_section);
        self.active_section = active_section;
        Ok(())
    }

    /// Retrieves the current view mode
    pub fn get_view_mode(&self) -> ViewMode {
        match self.active_section {
            Some(index) => ViewMode::Section(index),
            None => ViewMode::Overview,
        }
    }
}

/// The error for selecting a section which does not exist
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The section index must be smaller than {} but received {}", SECTION_COUNT, .0)]
pub struct SectionIndexError(pub usize);
