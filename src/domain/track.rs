use serde::{Deserialize, Serialize};

use super::error::{Ring, TrackError};
use super::geometry::{Point, Segment};

/// Upper bound on chunks in one grid.
pub const MAX_CHUNKS: u64 = 1 << 22;

/// Playfield and grid settings for one track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Top-left corner of the playfield box
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    /// Side length of one chunk
    pub cell_size: f64,
    /// Wall hits send the agent back to checkpoint 0.
    pub reset_on_collision: bool,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: 1200.0,
            height: 800.0,
            cell_size: 100.0,
            reset_on_collision: true,
        }
    }
}

impl TrackConfig {
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        Self { width, height, cell_size, ..Self::default() }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn validate(&self) -> Result<(), TrackError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(TrackError::InvalidCellSize(self.cell_size));
        }
        let box_ok = [self.origin_x, self.origin_y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0;
        if !box_ok {
            return Err(TrackError::InvalidPlayfield { width: self.width, height: self.height });
        }
        self.grid_dimensions().map(|_| ())
    }

    /// Chunk columns and rows, `floor(extent / cell_size) + 1` per axis.
    ///
    /// Counted in `f64` first so oversized grids are rejected before any
    /// integer conversion.
    pub fn grid_dimensions(&self) -> Result<(u32, u32), TrackError> {
        let cols = (self.width / self.cell_size).floor() + 1.0;
        let rows = (self.height / self.cell_size).floor() + 1.0;
        let too_large = TrackError::GridTooLarge { chunks_x: cols, chunks_y: rows, max: MAX_CHUNKS };
        if !(cols.is_finite() && rows.is_finite()) || cols * rows > MAX_CHUNKS as f64 {
            return Err(too_large);
        }
        let (cols, rows) = (cols as u32, rows as u32);
        match cols.checked_mul(rows) {
            Some(total) if u64::from(total) <= MAX_CHUNKS => Ok((cols, rows)),
            _ => Err(too_large),
        }
    }
}

/// Raw track geometry as handed over by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackLayout {
    pub inner: Vec<Point>,
    pub outer: Vec<Point>,
    /// Gate endpoints, consumed in pairs
    pub checkpoints: Vec<Point>,
}

impl TrackLayout {
    pub fn new(inner: Vec<Point>, outer: Vec<Point>, checkpoints: Vec<Point>) -> Self {
        Self { inner, outer, checkpoints }
    }

    /// Build from flat `[x0, y0, x1, y1, ...]` buffers.
    pub fn from_flat(inner: &[f64], outer: &[f64], checkpoints: &[f64]) -> Result<Self, TrackError> {
        Ok(Self {
            inner: points_from_flat("inner wall", inner)?,
            outer: points_from_flat("outer wall", outer)?,
            checkpoints: points_from_flat("checkpoints", checkpoints)?,
        })
    }

    /// Closed wall rings, inner first. Fails on rings with fewer than 2 points.
    pub fn walls(&self) -> Result<Vec<Segment>, TrackError> {
        let mut walls = Vec::with_capacity(self.inner.len() + self.outer.len());
        close_ring(Ring::Inner, &self.inner, &mut walls)?;
        close_ring(Ring::Outer, &self.outer, &mut walls)?;
        Ok(walls)
    }

    pub fn gates(&self) -> Result<Vec<Segment>, TrackError> {
        if self.checkpoints.len() % 2 != 0 {
            return Err(TrackError::UnpairedCheckpoint(self.checkpoints.len()));
        }
        Ok(self
            .checkpoints
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect())
    }
}

fn close_ring(ring: Ring, points: &[Point], out: &mut Vec<Segment>) -> Result<(), TrackError> {
    if points.len() < 2 {
        return Err(TrackError::TooFewPoints { ring, got: points.len() });
    }
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        out.push(Segment::new(a, b));
    }
    Ok(())
}

pub fn points_from_flat(what: &'static str, coords: &[f64]) -> Result<Vec<Point>, TrackError> {
    if coords.len() % 2 != 0 {
        return Err(TrackError::OddCoordinates { what, len: coords.len() });
    }
    Ok(coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// Agent bounding quadrilateral. Edges wrap from the last corner to the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hitbox {
    pub corners: [Point; 4],
}

impl Hitbox {
    pub fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Axis-aligned box centered on `center`.
    pub fn around(center: Point, half_w: f64, half_h: f64) -> Self {
        Self::new([
            Point::new(center.x - half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y + half_h),
            Point::new(center.x - half_w, center.y + half_h),
        ])
    }

    pub fn from_flat(coords: &[f64]) -> Result<Self, TrackError> {
        let points = points_from_flat("hitbox", coords)?;
        let corners: [Point; 4] = points
            .as_slice()
            .try_into()
            .map_err(|_| TrackError::MalformedHitbox(points.len()))?;
        Ok(Self { corners })
    }

    pub fn edges(&self) -> [Segment; 4] {
        let c = &self.corners;
        [
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }
}

/// JSON track bundle: `{ "inner": [[x, y], ..], "outer": [..], "checkpoints": [..], "config": {..} }`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TrackBundle {
    pub inner: Vec<[f64; 2]>,
    pub outer: Vec<[f64; 2]>,
    #[serde(default)]
    pub checkpoints: Vec<[f64; 2]>,
    #[serde(default)]
    pub config: TrackConfig,
}

impl TrackBundle {
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn layout(&self) -> TrackLayout {
        let conv = |v: &[[f64; 2]]| -> Vec<Point> { v.iter().copied().map(Point::from).collect() };
        TrackLayout {
            inner: conv(&self.inner),
            outer: conv(&self.outer),
            checkpoints: conv(&self.checkpoints),
        }
    }
}
