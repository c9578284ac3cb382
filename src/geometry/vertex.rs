use glam::DVec3;

/// A point in ℝ³, backed by `glam::DVec3`.
///
/// `Vertex::from([x, y, z])` assigns `x, y, z` from indices `0, 1, 2`
/// respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex(pub(crate) DVec3);

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vertex(DVec3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub(crate) fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(coordinates: [f64; 3]) -> Self {
        Vertex::new(coordinates[0], coordinates[1], coordinates[2])
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vertex::new(x, y, z)
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
