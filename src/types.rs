use nalgebra as na;

/// Number of corners of a box.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of a box.
pub const SEGMENT_COUNT: usize = 12;

/// Corner index pairs joined by each edge. Bit 0 of a corner index flips x,
/// bit 1 flips y and bit 2 flips z.
pub(crate) const SEGMENT_CORNERS: [(usize, usize); SEGMENT_COUNT] = [
    (0, 2),
    (2, 6),
    (6, 4),
    (4, 0),
    (1, 3),
    (3, 7),
    (7, 5),
    (5, 1),
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
];

/// A face of an axis-aligned box: the normal axis and which side of the
/// center it lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Face {
    pub axis: usize,
    pub sign: f64,
}

pub(crate) const FACES: [Face; 6] = [
    Face { axis: 0, sign: 1.0 },
    Face { axis: 0, sign: -1.0 },
    Face { axis: 1, sign: 1.0 },
    Face { axis: 1, sign: -1.0 },
    Face { axis: 2, sign: 1.0 },
    Face { axis: 2, sign: -1.0 },
];

impl Face {
    /// The two axes spanning the face, in increasing order.
    pub fn tangent_axes(&self) -> (usize, usize) {
        match self.axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        }
    }
}

/// Sign applied to each half extent for the corner with the given index.
pub(crate) fn corner_signs(index: usize) -> na::Vector3<f64> {
    let sign = |bit: usize| if index & bit != 0 { -1.0 } else { 1.0 };
    na::Vector3::new(sign(1), sign(2), sign(4))
}

/// An edge of a box, as its two end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: na::Point3<f64>,
    pub end: na::Point3<f64>,
}

impl Segment {
    pub fn new(start: na::Point3<f64>, end: na::Point3<f64>) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> na::Vector3<f64> {
        self.end - self.start
    }

    /// The point at parameter `t`, where 0 is `start` and 1 is `end`.
    pub fn point_at(&self, t: f64) -> na::Point3<f64> {
        self.start + self.direction() * t
    }
}
