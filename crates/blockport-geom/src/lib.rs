//! Collision geometry types: vectors, boxes and shapes. No analysis logic lives here.
#![forbid(unsafe_code)]

use core::ops::Sub;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Vec3 {
        Vec3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Axis-aligned box given by two opposite corners. The corners are stored as read,
/// so `min` is not guaranteed to be component-wise smaller than `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds a box from the `(x0, y0, z0, x1, y1, z1)` coordinate layout.
    #[inline]
    pub const fn from_coords(c: [f64; 6]) -> Self {
        Self::new(Vec3::new(c[0], c[1], c[2]), Vec3::new(c[3], c[4], c[5]))
    }

    #[inline]
    pub fn coords(&self) -> [f64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }

    /// Width, height and depth as absolute corner differences.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        (self.max - self.min).abs()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.extent().x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.extent().y
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.extent().z
    }
}

/// One entry of a shape as found in source data.
///
/// Entries that do not carry exactly six coordinates are kept as `Malformed` so that
/// structural comparisons and box counts still see them; they never match a
/// dimension predicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeBox {
    Valid(Aabb),
    Malformed(Vec<f64>),
}

impl ShapeBox {
    /// Interprets a raw coordinate list.
    pub fn from_slice(coords: &[f64]) -> Self {
        match <[f64; 6]>::try_from(coords) {
            Ok(c) => ShapeBox::Valid(Aabb::from_coords(c)),
            Err(_) => ShapeBox::Malformed(coords.to_vec()),
        }
    }

    #[inline]
    pub fn aabb(&self) -> Option<&Aabb> {
        match self {
            ShapeBox::Valid(b) => Some(b),
            ShapeBox::Malformed(_) => None,
        }
    }
}

/// Ordered list of boxes forming one collision configuration. Empty means no collision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    boxes: Vec<ShapeBox>,
}

impl Shape {
    pub const EMPTY: Shape = Shape { boxes: Vec::new() };

    pub fn new(boxes: Vec<ShapeBox>) -> Self {
        Self { boxes }
    }

    pub fn from_aabbs(boxes: impl IntoIterator<Item = Aabb>) -> Self {
        Self::new(boxes.into_iter().map(ShapeBox::Valid).collect())
    }

    #[inline]
    pub fn boxes(&self) -> &[ShapeBox] {
        &self.boxes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The single box of a one-box shape, if that box is well formed.
    #[inline]
    pub fn single_box(&self) -> Option<&Aabb> {
        match self.boxes.as_slice() {
            [only] => only.aabb(),
            _ => None,
        }
    }

    /// First box of the shape, if present and well formed.
    #[inline]
    pub fn first_box(&self) -> Option<&Aabb> {
        self.boxes.first().and_then(ShapeBox::aabb)
    }

    pub fn valid_boxes(&self) -> impl Iterator<Item = &Aabb> {
        self.boxes.iter().filter_map(ShapeBox::aabb)
    }
}
