//! Oriented bounding boxes of point-cloud tiles.

use crate::{
    description::ObbDescription,
    transform::CoordinateTransform,
    types::{corner_signs, Segment, CORNER_COUNT, SEGMENT_CORNERS, SEGMENT_COUNT},
};
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// A box with arbitrary position, orientation and half extents.
///
/// The orientation is kept as given and normalized whenever it is used, so
/// non-unit quaternions from tile metadata are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "ObbDescription")]
pub struct Obb {
    pub(crate) center: na::Point3<f64>,
    pub(crate) half_extents: na::Vector3<f64>,
    pub(crate) quaternion: na::Quaternion<f64>,
}

impl Obb {
    pub fn new(
        center: na::Point3<f64>,
        half_extents: na::Vector3<f64>,
        orientation: na::UnitQuaternion<f64>,
    ) -> Self {
        Self {
            center,
            half_extents,
            quaternion: orientation.into_inner(),
        }
    }

    /// Creates a box with the x-, y- and z-axis as its local axes.
    pub fn axis_aligned(center: na::Point3<f64>, half_extents: na::Vector3<f64>) -> Self {
        Self::new(center, half_extents, na::UnitQuaternion::identity())
    }

    pub fn center(&self) -> &na::Point3<f64> {
        &self.center
    }

    pub fn half_extents(&self) -> &na::Vector3<f64> {
        &self.half_extents
    }

    /// The normalized rotation from the box's local axes to the frame axes.
    pub fn orientation(&self) -> na::UnitQuaternion<f64> {
        na::UnitQuaternion::new_normalize(self.quaternion)
    }

    /// Moves the center into another coordinate reference system.
    ///
    /// Orientation and half extents are left untouched; the transform is
    /// assumed to be close to rigid over the extent of the box.
    pub fn apply_transform(&mut self, transform: &impl CoordinateTransform) {
        let from = self.center;
        transform.transform(&mut self.center);
        log::debug!("Reprojected OBB center {from} to {}", self.center);
    }

    /// Returns the corner with the given index. Bits 0, 1 and 2 of the index
    /// select the negative half extent along the local x, y and z axis.
    ///
    /// # Panics
    /// If the index exceeds 7.
    pub fn corner(&self, index: usize) -> na::Point3<f64> {
        assert!(index < CORNER_COUNT, "corner index {index} out of range");
        self.placed_corner(&self.orientation(), index)
    }

    /// Returns the edge with the given index.
    ///
    /// # Panics
    /// If the index exceeds 11.
    pub fn segment(&self, index: usize) -> Segment {
        assert!(index < SEGMENT_COUNT, "segment index {index} out of range");
        let (start, end) = SEGMENT_CORNERS[index];
        let orientation = self.orientation();
        Segment::new(
            self.placed_corner(&orientation, start),
            self.placed_corner(&orientation, end),
        )
    }

    pub fn corners(&self) -> [na::Point3<f64>; CORNER_COUNT] {
        let orientation = self.orientation();
        std::array::from_fn(|index| self.placed_corner(&orientation, index))
    }

    fn placed_corner(
        &self,
        orientation: &na::UnitQuaternion<f64>,
        index: usize,
    ) -> na::Point3<f64> {
        let local = self.half_extents.component_mul(&corner_signs(index));
        self.center + orientation.transform_vector(&local)
    }

    pub fn segments(&self) -> [Segment; SEGMENT_COUNT] {
        let corners = self.corners();
        SEGMENT_CORNERS.map(|(start, end)| Segment::new(corners[start], corners[end]))
    }

    /// Expresses a point in the frame where this box is axis aligned and
    /// centered at the origin.
    pub fn to_local(&self, point: &na::Point3<f64>) -> na::Point3<f64> {
        self.orientation()
            .inverse_transform_point(&(point - self.center.coords))
    }

    /// Whether the point lies inside the box or on its boundary.
    pub fn contains_point(&self, point: &na::Point3<f64>) -> bool {
        crate::bounds::LocalBox::new(self.half_extents).contains(&self.to_local(point))
    }

    /// Expresses `other` in the frame of this box.
    pub(crate) fn relative(&self, other: &Obb) -> Obb {
        let inverse = self.orientation().inverse();
        Obb::new(
            inverse * (other.center - self.center.coords),
            other.half_extents,
            inverse * other.orientation(),
        )
    }
}
