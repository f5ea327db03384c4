use serde::{Deserialize, Serialize};

/// 2D point in track space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sentinel returned by rays that hit nothing.
    pub const fn at_infinity() -> Self {
        Self { x: f64::INFINITY, y: f64::INFINITY }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// Line segment from `a` to `b`. Used for walls, gates, rays and hitbox edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Intersection point with `other`, if both interpolation parameters land in [0, 1].
    ///
    /// Parallel and collinear pairs (zero denominator) never intersect.
    #[inline(always)]
    pub fn intersect(&self, other: &Segment) -> Option<Point> {
        let (x1, y1, x2, y2) = (self.a.x, self.a.y, self.b.x, self.b.y);
        let (x3, y3, x4, y4) = (other.a.x, other.a.y, other.b.x, other.b.y);

        let den = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if den == 0.0 {
            return None;
        }

        let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / den;
        let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / den;

        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            Some(Point::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1)))
        } else {
            None
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersect(other).is_some()
    }

    pub fn min_x(&self) -> f64 { self.a.x.min(self.b.x) }
    pub fn max_x(&self) -> f64 { self.a.x.max(self.b.x) }
    pub fn min_y(&self) -> f64 { self.a.y.min(self.b.y) }
    pub fn max_y(&self) -> f64 { self.a.y.max(self.b.y) }
}

/// Axis-aligned rectangle with inclusive bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + w, y + h),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Top, right, bottom, left.
    pub fn edges(&self) -> [Segment; 4] {
        let tl = self.min;
        let tr = Point::new(self.max.x, self.min.y);
        let br = self.max;
        let bl = Point::new(self.min.x, self.max.y);
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    #[inline]
    pub fn crosses_boundary(&self, seg: &Segment) -> bool {
        self.edges().iter().any(|edge| seg.intersects(edge))
    }

    /// Cheap overlap check against a segment's bounding box.
    #[inline]
    pub fn overlaps_bounds(&self, seg: &Segment) -> bool {
        seg.max_x() >= self.min.x
            && seg.min_x() <= self.max.x
            && seg.max_y() >= self.min.y
            && seg.min_y() <= self.max.y
    }

    /// Endpoint inside (inclusive) or crossing one of the four edges.
    pub fn touches(&self, seg: &Segment) -> bool {
        if !self.overlaps_bounds(seg) {
            return false;
        }
        self.contains(seg.a) || self.contains(seg.b) || self.crosses_boundary(seg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn crossing_segments_meet_in_the_middle() {
        let p = seg(0.0, 0.0, 10.0, 10.0).intersect(&seg(0.0, 10.0, 10.0, 0.0)).unwrap();
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_and_collinear_never_intersect() {
        assert!(seg(0.0, 0.0, 10.0, 0.0).intersect(&seg(0.0, 1.0, 10.0, 1.0)).is_none());
        assert!(seg(0.0, 0.0, 10.0, 0.0).intersect(&seg(5.0, 0.0, 15.0, 0.0)).is_none());
    }

    #[test]
    fn touching_endpoint_counts_as_hit() {
        let p = seg(0.0, 0.0, 5.0, 0.0).intersect(&seg(5.0, -1.0, 5.0, 1.0));
        assert_eq!(p, Some(Point::new(5.0, 0.0)));
    }

    #[test]
    fn short_segment_stops_before_wall() {
        assert!(seg(0.0, 0.0, 4.0, 0.0).intersect(&seg(5.0, -1.0, 5.0, 1.0)).is_none());
    }

    #[test]
    fn rect_touch_covers_pass_through_walls() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // No endpoint inside, but passes straight through.
        assert!(r.touches(&seg(-5.0, 5.0, 15.0, 5.0)));
        assert!(r.touches(&seg(2.0, 2.0, 3.0, 3.0)));
        assert!(!r.touches(&seg(11.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(0.0, 5.0)));
        assert!(!r.contains(Point::new(10.0001, 5.0)));
    }
}
