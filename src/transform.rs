use nalgebra as na;

/// Maps a point in place from one coordinate reference system to another.
///
/// Reprojection libraries implement this for their own transform objects;
/// rigid motions from `nalgebra` are provided here.
pub trait CoordinateTransform {
    fn transform(&self, point: &mut na::Point3<f64>);
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for &T {
    fn transform(&self, point: &mut na::Point3<f64>) {
        (**self).transform(point);
    }
}

impl CoordinateTransform for na::Isometry3<f64> {
    fn transform(&self, point: &mut na::Point3<f64>) {
        *point = self.transform_point(point);
    }
}

impl CoordinateTransform for na::Translation3<f64> {
    fn transform(&self, point: &mut na::Point3<f64>) {
        *point = self.transform_point(point);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn isometry_moves_point() {
        let isometry = na::Isometry3::new(
            na::Vector3::new(1.0, 0.0, 0.0),
            na::Vector3::z() * FRAC_PI_2,
        );
        let mut point = na::Point3::new(1.0, 0.0, 0.0);
        isometry.transform(&mut point);
        assert_abs_diff_eq!(point, na::Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    fn apply(transform: impl CoordinateTransform, point: &mut na::Point3<f64>) {
        transform.transform(point);
    }

    #[test]
    fn translation_through_reference() {
        let translation = na::Translation3::new(0.0, -2.0, 5.0);
        let mut point = na::Point3::new(1.0, 1.0, 1.0);
        apply(&translation, &mut point);
        assert_eq!(point, na::Point3::new(1.0, -1.0, 6.0));
    }
}
