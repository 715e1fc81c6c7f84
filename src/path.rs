use serde::Deserialize;

/// Rule deciding which regions of a self-intersecting path count as inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRule {
    /// Inside when the path winds around the point a non-zero number of
    /// times. Loops drawn twice over the same area stay selected.
    #[default]
    NonZero,
    /// Inside when a ray from the point crosses the path an odd number of
    /// times. Overlapping loops cancel out.
    EvenOdd,
}

/// Freehand lasso path in canvas-local pixels.
///
/// Consecutive points are joined by straight segments and the path is
/// implicitly closed from the last point back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LassoPath {
    points: Vec<(f32, f32)>,
}

impl LassoPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at `point`.
    pub fn starting_at(point: (f32, f32)) -> Self {
        Self { points: vec![point] }
    }

    pub fn push(&mut self, point: (f32, f32)) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path encloses any area at all.
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let (&first, rest) = self.points.split_first()?;
        Some(rest.iter().fold(
            (first.0, first.1, first.0, first.1),
            |(min_x, min_y, max_x, max_y), &(x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            },
        ))
    }

    /// Test whether `point` lies inside the closed path.
    ///
    /// Paths with fewer than three points enclose nothing.
    pub fn contains(&self, point: (f32, f32), rule: FillRule) -> bool {
        if !self.is_polygon() {
            return false;
        }
        match rule {
            FillRule::NonZero => winding_number(&self.points, point) != 0,
            FillRule::EvenOdd => crossings(&self.points, point) % 2 == 1,
        }
    }

    /// Generate SVG path commands for the path.
    ///
    /// `closed` appends a `Z` so a filled shape is drawn; an in-progress
    /// stroke is usually left open.
    ///
    /// # Returns
    /// SVG path command string (e.g., "M 10 20 L 30 40 L 50 20 Z"), empty for
    /// an empty path.
    pub fn to_commands(&self, closed: bool) -> String {
        let mut commands = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let op = if i == 0 { "M" } else { " L" };
            commands.push_str(&format!("{} {} {}", op, x, y));
        }
        if closed && !commands.is_empty() {
            commands.push_str(" Z");
        }
        commands
    }
}

/// Iterate the closed path's edges, last point joining back to the first.
fn edges(points: &[(f32, f32)]) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
    let last = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .map(move |(i, &a)| (a, points[if i == last { 0 } else { i + 1 }]))
}

/// Signed area test: > 0 when `p` is left of the directed edge `a → b`.
fn is_left(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (p.0 - a.0) * (b.1 - a.1)
}

fn winding_number(points: &[(f32, f32)], p: (f32, f32)) -> i32 {
    let mut winding = 0;
    for (a, b) in edges(points) {
        if a.1 <= p.1 {
            if b.1 > p.1 && is_left(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.1 <= p.1 && is_left(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

fn crossings(points: &[(f32, f32)], p: (f32, f32)) -> u32 {
    edges(points)
        .filter(|&(a, b)| {
            (a.1 > p.1) != (b.1 > p.1)
                && p.0 < (b.0 - a.0) * (p.1 - a.1) / (b.1 - a.1) + a.0
        })
        .count() as u32
}
