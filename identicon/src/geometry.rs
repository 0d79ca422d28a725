//! Point rotation and polygon inclusion for block rendering.

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rotation by a whole number of quarter turns (0..=3), clockwise in
/// image coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const NONE: Rotation = Rotation(0);

    /// Build a rotation from any quarter-turn count, reduced modulo 4.
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    /// The next quarter turn, wrapping 3 back to 0.
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    pub const ALL: [Rotation; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];
}

/// Rotate `p` about `center` by `rotation` quarter turns.
///
/// One quarter turn maps the offset `(dx, dy)` to `(-dy, dx)`, which is a
/// clockwise turn on a y-down raster.
pub fn rotate(p: Point, center: Point, rotation: Rotation) -> Point {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    let (rx, ry) = match rotation.quarter_turns() {
        0 => (dx, dy),
        1 => (-dy, dx),
        2 => (-dx, -dy),
        _ => (dy, -dx),
    };
    Point::new(center.x + rx, center.y + ry)
}

/// Test whether `(x, y)` lies inside the polygon `vertices`.
///
/// Points on an edge count as inside. Everything else uses even-odd
/// crossing parity of a ray cast towards -x. Fewer than 3 vertices never
/// contain anything.
pub fn point_in_polygon(x: f64, y: f64, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];

        if on_segment(x, y, a, b) {
            return true;
        }

        if (a.y > y) != (b.y > y) {
            let cross_x = a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x);
            if cross_x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Collinear with `a`-`b` and within its bounding box.
fn on_segment(x: f64, y: f64, a: Point, b: Point) -> bool {
    const EPSILON: f64 = 1e-9;

    if x < a.x.min(b.x) - EPSILON
        || x > a.x.max(b.x) + EPSILON
        || y < a.y.min(b.y) - EPSILON
        || y > a.y.max(b.y) + EPSILON
    {
        return false;
    }
    let cross = (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x);
    cross.abs() <= EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(5.0, 5.0);

    #[test]
    fn rotation_wraps_modulo_4() {
        assert_eq!(Rotation::new(5), Rotation::new(1));
        assert_eq!(Rotation::new(3).next(), Rotation::NONE);
    }

    #[test]
    fn rotate_zero_is_identity() {
        let p = Point::new(7.0, 2.0);
        assert_eq!(rotate(p, CENTER, Rotation::NONE), p);
    }

    #[test]
    fn rotate_quarter_turn_clockwise() {
        // top-left corner goes to top-right on a y-down raster
        let p = Point::new(0.0, 0.0);
        assert_eq!(rotate(p, CENTER, Rotation::new(1)), Point::new(10.0, 0.0));
        assert_eq!(rotate(p, CENTER, Rotation::new(2)), Point::new(10.0, 10.0));
        assert_eq!(rotate(p, CENTER, Rotation::new(3)), Point::new(0.0, 10.0));
    }

    #[test]
    fn rotate_four_times_returns_original() {
        let p = Point::new(3.5, 8.0);
        let mut q = p;
        for _ in 0..4 {
            q = rotate(q, CENTER, Rotation::new(1));
        }
        assert_eq!(q, p);
    }

    #[test]
    fn point_in_triangle() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(2.0, 2.0, &tri));
        assert!(!point_in_polygon(8.0, 8.0, &tri));
        assert!(!point_in_polygon(-1.0, 5.0, &tri));
    }

    #[test]
    fn edges_and_vertices_are_inside() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(0.0, 0.0, &square));
        assert!(point_in_polygon(4.0, 2.0, &square));
        assert!(point_in_polygon(2.0, 4.0, &square));
        assert!(!point_in_polygon(4.5, 2.0, &square));

        let tri = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        // on the hypotenuse
        assert!(point_in_polygon(5.0, 5.0, &tri));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = [Point::new(0.0, 0.0), Point::new(4.0, 4.0)];
        assert!(!point_in_polygon(2.0, 2.0, &line));
    }
}
