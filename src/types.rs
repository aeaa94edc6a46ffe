use std::ops::{Add, Sub};

/// A 2D point in screen coordinates, y grows downwards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The x-coordinate
    x: f64,
    /// The y-coordinate
    y: f64,
}

impl Point {
    /// Creates a new point
    ///
    /// # Parameters
    ///
    /// x: The x-coordinate
    ///
    /// y: The y-coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
        }
    }

    /// Creates the offset at the given angle and distance from origo.
    /// The angle is counterclockwise on the screen with 0 pointing right and pi/2 pointing up.
    ///
    /// # Parameters
    ///
    /// angle: The angle of the offset
    ///
    /// distance: The length of the offset
    pub fn polar(angle: f64, distance: f64) -> Self {
        Self {
            x: distance * angle.cos(),
            y: -distance * angle.sin(),
        }
    }

    /// Retrieves the x-coordinate
    pub fn get_x(&self) -> f64 {
        self.x
    }

    /// Retrieves the y-coordinate
    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Calculates the euclidean distance to another point
    ///
    /// # Parameters
    ///
    /// other: The point to measure the distance to
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rounds the point to whole pixels for the renderer
    pub fn to_pixel(&self) -> [i32; 2] {
        [self.x.round() as i32, self.y.round() as i32]
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size of width and height which are both non-negative
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    /// The width
    w: f64,
    /// The height
    h: f64,
}

impl Size {
    /// Creates a new size, if any of width or height are negative their signs are flipped
    ///
    /// # Parameters
    ///
    /// w: The width
    ///
    /// h: The height
    pub fn new(w: f64, h: f64) -> Self {
        Self {
            w: w.abs(),
            h: h.abs(),
        }
    }

    /// Retrieves the width
    pub fn get_w(&self) -> f64 {
        self.w
    }

    /// Retrieves the height
    pub fn get_h(&self) -> f64 {
        self.h
    }

    /// Retrieves the center of a rectangle of this size with its corner at origo
    pub fn get_center(&self) -> Point {
        Point::new(0.5 * self.w, 0.5 * self.h)
    }

    /// Retrieves the length of the shortest side
    pub fn get_min(&self) -> f64 {
        self.w.min(self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn assert_close(a: &Point, b: &Point) {
        assert!(a.distance(b) < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn polar_quarter_turn_points_up() {
        assert_close(&Point::polar(0.5 * PI, 2.0), &Point::new(0.0, -2.0));
        assert_close(&Point::polar(0.0, 2.0), &Point::new(2.0, 0.0));
    }

    #[test]
    fn pixels_are_rounded() {
        assert_eq!(Point::new(1.4, -2.6).to_pixel(), [1, -3]);
        assert_eq!(Point::new(0.5, 2.5).to_pixel(), [1, 3]);
    }

    #[test]
    fn offsets_add_and_subtract() {
        let center = Point::new(3.0, 4.0);
        let moved = &center + &Point::new(1.0, -2.0);
        assert_eq!(moved, Point::new(4.0, 2.0));
        assert_eq!(&moved - &center, Point::new(1.0, -2.0));
    }

    #[test]
    fn size_flips_negative_sides() {
        let size = Size::new(-640.0, 480.0);
        assert_eq!(size.get_w(), 640.0);
        assert_eq!(size.get_h(), 480.0);
        assert_eq!(size.get_min(), 480.0);
        assert_close(&size.get_center(), &Point::new(320.0, 240.0));
    }
}
