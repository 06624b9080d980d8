//! Closed axis-aligned regions used by the intersection test.

use crate::types::Face;
use crate::CONTAINMENT_TOLERANCE;
use geo::{coord, Intersects, Rect};
use nalgebra as na;

/// An axis-aligned box centered at the origin, i.e. an oriented box seen from
/// its own frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocalBox {
    half_extents: na::Vector3<f64>,
}

impl LocalBox {
    pub fn new(half_extents: na::Vector3<f64>) -> Self {
        Self {
            half_extents: half_extents.abs(),
        }
    }

    pub fn half_extents(&self) -> &na::Vector3<f64> {
        &self.half_extents
    }

    /// Whether the point lies in the box, boundary included.
    pub fn contains(&self, point: &na::Point3<f64>) -> bool {
        (0..3).all(|axis| point[axis].abs() <= self.half_extents[axis] + CONTAINMENT_TOLERANCE)
    }

    /// The rectangle covered by a face, in the face's two tangent axes.
    pub fn face_rect(&self, face: &Face) -> Rect<f64> {
        let (u, v) = face.tangent_axes();
        let hu = self.half_extents[u] + CONTAINMENT_TOLERANCE;
        let hv = self.half_extents[v] + CONTAINMENT_TOLERANCE;
        Rect::new(coord! { x: -hu, y: -hv }, coord! { x: hu, y: hv })
    }

    /// Whether the point, projected onto the face's tangent axes, lies within
    /// the face.
    pub fn face_contains(&self, face: &Face, point: &na::Point3<f64>) -> bool {
        let (u, v) = face.tangent_axes();
        self.face_rect(face)
            .intersects(&coord! { x: point[u], y: point[v] })
    }

    /// Coordinate of the face plane along its normal axis.
    pub fn face_offset(&self, face: &Face) -> f64 {
        face.sign * self.half_extents[face.axis]
    }
}
