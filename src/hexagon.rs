use super::types::Point;
use std::f64::consts::PI;

/// A regular hexagon given by its 6 vertices, vertex 0 points up and the rest follow clockwise on the screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexagon {
    /// The center of the hexagon
    center: Point,
    /// The distance from the center to every vertex
    radius: f64,
    /// The vertices in clockwise order
    vertices: [Point; 6],
}

impl Hexagon {
    /// Generates the vertices of a regular hexagon
    ///
    /// # Parameters
    ///
    /// center: The center of the hexagon
    ///
    /// radius: The distance from the center to every vertex, a radius of 0 gives 6 coincident vertices
    ///
    /// # Panics
    ///
    /// In debug mode it panics if radius is negative
    pub fn new(center: &Point, radius: f64) -> Self {
        if cfg!(debug_assertions) && radius < 0.0 {
            panic!("The radius of a hexagon must not be negative but received {}", radius);
        }

        // Walk clockwise from the top, the polar angle decreases for clockwise rotation
        let vertices = std::array::from_fn(|i| {
            let angle = 0.5 * PI - (i as f64) * PI / 3.0;
            center + &Point::polar(angle, radius)
        });

        Self {
            center: *center,
            radius,
            vertices,
        }
    }

    /// Retrieves the center
    pub fn get_center(&self) -> &Point {
        &self.center
    }

    /// Retrieves the radius
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Retrieves the vertices in clockwise order starting from the top
    pub fn get_vertices(&self) -> &[Point; 6] {
        &self.vertices
    }

    /// Rounds all vertices to whole pixels for the renderer
    pub fn to_pixels(&self) -> [[i32; 2]; 6] {
        self.vertices.map(|vertex| vertex.to_pixel())
    }
}
