//! The structured description of an OBB found in tile and node metadata:
//!
//! ```json
//! {
//!     "center": [x, y, z],
//!     "halfSize": [hx, hy, hz],
//!     "quaternion": [qx, qy, qz, qw]
//! }
//! ```

use crate::{error::ValidationError, obb::Obb};
use nalgebra as na;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

const CENTER: &str = "center";
const HALF_SIZE: &str = "halfSize";
const QUATERNION: &str = "quaternion";

/// Wire form of an [`Obb`].
///
/// Only produced from a validated [`Obb`]; descriptions are read through
/// [`Obb::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObbDescription {
    pub center: [f64; 3],
    pub half_size: [f64; 3],
    pub quaternion: [f64; 4],
}

impl From<Obb> for ObbDescription {
    fn from(obb: Obb) -> Self {
        let q = obb.quaternion;
        Self {
            center: obb.center.into(),
            half_size: obb.half_extents.into(),
            quaternion: [q.i, q.j, q.k, q.w],
        }
    }
}

impl TryFrom<ObbDescription> for Obb {
    type Error = ValidationError;

    fn try_from(description: ObbDescription) -> Result<Self, Self::Error> {
        let [qx, qy, qz, qw] = description.quaternion;
        let quaternion = na::Quaternion::new(qw, qx, qy, qz);
        if quaternion.norm_squared() == 0.0 {
            return Err(ValidationError::DegenerateQuaternion);
        }
        Ok(Obb {
            center: description.center.into(),
            half_extents: description.half_size.into(),
            quaternion,
        })
    }
}

fn numeric_array<const N: usize>(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<[f64; N], ValidationError> {
    let value = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;
    let array = value
        .as_array()
        .ok_or(ValidationError::NotAnArray(field))?;
    if array.len() != N {
        return Err(ValidationError::WrongLength {
            field,
            expected: N,
            found: array.len(),
        });
    }
    let mut numbers = [0.0; N];
    for (index, (number, element)) in numbers.iter_mut().zip(array).enumerate() {
        *number = element
            .as_f64()
            .ok_or(ValidationError::NotNumeric { field, index })?;
    }
    Ok(numbers)
}

impl Obb {
    /// Builds a box from its structured description, rejecting missing,
    /// malformed or unrecognized fields.
    pub fn parse(description: &Value) -> Result<Self, ValidationError> {
        let object = description
            .as_object()
            .ok_or(ValidationError::NotAnObject)?;

        let center = numeric_array(object, CENTER)?;
        let half_size = numeric_array(object, HALF_SIZE)?;
        let quaternion = numeric_array(object, QUATERNION)?;

        if let Some(key) = object
            .keys()
            .find(|key| ![CENTER, HALF_SIZE, QUATERNION].contains(&key.as_str()))
        {
            return Err(ValidationError::UnknownField(key.clone()));
        }

        ObbDescription {
            center,
            half_size,
            quaternion,
        }
        .try_into()
    }

    pub fn to_description(&self) -> ObbDescription {
        self.clone().into()
    }
}

impl TryFrom<&Value> for Obb {
    type Error = ValidationError;

    fn try_from(description: &Value) -> Result<Self, Self::Error> {
        Obb::parse(description)
    }
}

impl TryFrom<Value> for Obb {
    type Error = ValidationError;

    fn try_from(description: Value) -> Result<Self, Self::Error> {
        Obb::parse(&description)
    }
}

impl FromStr for Obb {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let description: Value =
            serde_json::from_str(text).map_err(|err| ValidationError::Json(err.to_string()))?;
        Obb::parse(&description)
    }
}
