use crate::{
    bounds::LocalBox,
    obb::Obb,
    types::{Face, Segment, CORNER_COUNT, FACES, SEGMENT_COUNT},
};
use approx::abs_diff_eq;
use itertools::{Itertools, MinMaxResult};
use nalgebra as na;
use noisy_float::prelude::*;

/// A box expressed in the frame of a reference box, where the reference box
/// is axis aligned and centered at the origin.
#[derive(Debug, Clone)]
struct FrameView {
    reference: LocalBox,
    center: na::Point3<f64>,
    corners: [na::Point3<f64>; CORNER_COUNT],
    segments: [Segment; SEGMENT_COUNT],
    lower: na::Vector3<f64>,
    upper: na::Vector3<f64>,
}

impl FrameView {
    fn new(reference: &Obb, viewed: &Obb) -> Self {
        let relative = reference.relative(viewed);
        let corners = relative.corners();

        let mut lower = na::Vector3::zeros();
        let mut upper = na::Vector3::zeros();
        for axis in 0..3 {
            let (min, max) = match corners.iter().map(|corner| r64(corner[axis])).minmax() {
                MinMaxResult::MinMax(min, max) => (min.raw(), max.raw()),
                MinMaxResult::OneElement(value) => (value.raw(), value.raw()),
                MinMaxResult::NoElements => unreachable!("a box has eight corners"),
            };
            lower[axis] = min;
            upper[axis] = max;
        }

        Self {
            reference: LocalBox::new(reference.half_extents),
            center: relative.center,
            corners,
            segments: relative.segments(),
            lower,
            upper,
        }
    }

    /// Whether the extent of the viewed box misses the reference box along
    /// one of the reference axes.
    fn is_separated(&self) -> bool {
        let half = self.reference.half_extents();
        (0..3).any(|axis| {
            self.upper[axis] < -half[axis] - crate::CONTAINMENT_TOLERANCE
                || self.lower[axis] > half[axis] + crate::CONTAINMENT_TOLERANCE
        })
    }

    fn has_corner_inside(&self) -> bool {
        self.corners
            .iter()
            .any(|corner| self.reference.contains(corner))
    }

    fn center_inside(&self) -> bool {
        self.reference.contains(&self.center)
    }

    /// Whether the extent of the viewed box strictly encloses the reference
    /// box on every axis.
    fn extent_surrounds(&self) -> bool {
        let half = self.reference.half_extents();
        (0..3).all(|axis| self.lower[axis] < -half[axis] && self.upper[axis] > half[axis])
    }

    fn has_edge_crossing_face(&self) -> bool {
        self.segments.iter().any(|segment| {
            FACES
                .iter()
                .any(|face| face_crossing(&self.reference, segment, face).is_some())
        })
    }
}

/// Point where the segment passes through the bounded face, if it does.
fn face_crossing(
    reference: &LocalBox,
    segment: &Segment,
    face: &Face,
) -> Option<na::Point3<f64>> {
    let denominator = segment.direction()[face.axis];
    // Parallel to the face plane.
    if abs_diff_eq!(denominator, 0.0) {
        return None;
    }
    let t = (reference.face_offset(face) - segment.start[face.axis]) / denominator;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let point = segment.point_at(t);
    reference.face_contains(face, &point).then_some(point)
}

impl Obb {
    /// Whether this box and `other` overlap, boundaries included. Both boxes
    /// must be expressed in the same cartesian frame.
    ///
    /// The test is carried out from the frame of each box in turn, so
    /// `a.intersect(&b) == b.intersect(&a)`.
    pub fn intersect(&self, other: &Obb) -> bool {
        let ours = FrameView::new(self, other);
        let theirs = FrameView::new(other, self);

        if ours.is_separated() || theirs.is_separated() {
            log::trace!("OBB extents are separated");
            return false;
        }

        if ours.has_corner_inside() || theirs.has_corner_inside() {
            log::trace!("OBB corner contained in other box");
            return true;
        }

        if (ours.extent_surrounds() && theirs.center_inside())
            || (theirs.extent_surrounds() && ours.center_inside())
        {
            log::trace!("OBB surrounded by other box");
            return true;
        }

        if ours.has_edge_crossing_face() || theirs.has_edge_crossing_face() {
            log::trace!("OBB edge crosses face of other box");
            return true;
        }

        false
    }
}
