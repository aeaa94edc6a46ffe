use std::io::{self, Write};
use thiserror::Error;
use super::{
    config::{Config, ConfigError},
    field::{HexField, SectionIndexError, ViewMode},
    hexagon::Hexagon,
    layout::InvalidLayoutError,
};

/// Runs the application, the geometry of a single frame is written to stdout
///
/// # Parameters
///
/// config: The configuration of the viewport and field
///
/// section: The section to show, None to show the whole field
///
/// # Errors
///
/// See RunError for the possible errors
pub fn run(config: &Config, section: Option<usize>) -> Result<(), RunError> {
    // Create the field
    let mut field = HexField::from_viewport(&config.viewport.get_size(), &config.field)?;
    field.set_active_section(section)?;

    // Write the frame
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_frame(&field, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Writes everything a renderer needs to draw the current view mode of the field, all points are rounded to pixels
///
/// # Parameters
///
/// field: The field to draw
///
/// out: The location to write to
pub fn write_frame<W: Write>(field: &HexField, out: &mut W) -> io::Result<()> {
    writeln!(out, "mode: {:?}", field.get_view_mode())?;
    writeln!(out, "outer: {}", format_hexagon(&field.outer_hexagon()))?;
    writeln!(out, "inner: {}", format_hexagon(&field.inner_hexagon()))?;

    for (row, ring) in field.grid_rings().iter().enumerate() {
        writeln!(out, "ring {}: {}", row, format_hexagon(ring))?;
    }

    for (index, (start, end)) in field.section_outlines().iter().enumerate() {
        let [x0, y0] = start.to_pixel();
        let [x1, y1] = end.to_pixel();
        writeln!(out, "section {}: ({}, {}) -> ({}, {})", index, x0, y0, x1, y1)?;
    }

    // The detailed section view only lists the cell counts, the cell shapes are up to the renderer
    if let (ViewMode::Section(index), Some(section)) = (field.get_view_mode(), field.get_active_section_grid()) {
        for (row, cells) in section.get_rows().iter().enumerate() {
            writeln!(out, "section {} row {}: {} cells", index, row, cells.len())?;
        }
    }

    Ok(())
}

/// Formats the pixels of a hexagon as a list of points
fn format_hexagon(hexagon: &Hexagon) -> String {
    hexagon
        .to_pixels()
        .iter()
        .map(|[x, y]| format!("({}, {})", x, y))
        .collect::<Vec<String>>()
        .join(" ")
}

/// The error types for when running the application
#[derive(Error, Debug)]
pub enum RunError {
    /// The configuration could not be loaded
    #[error("Unable to load the configuration: {}", .0)]
    Config(#[from] ConfigError),
    /// The field could not be built from the configuration
    #[error("Unable to create the field: {}", .0)]
    Layout(#[from] InvalidLayoutError),
    /// The requested section does not exist
    #[error("Unable to select the section: {}", .0)]
    Section(#[from] SectionIndexError),
    /// The frame could not be written
    #[error("Unable to write the frame: {}", .0)]
    Output(#[from] io::Error),
}
