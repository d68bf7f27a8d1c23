// File: crates/axis-core/src/geometry.rs
// Summary: Lightweight geometry helpers for 3D scene math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }
    pub const fn from_array(c: [f64; 3]) -> Self { Self { x: c[0], y: c[1], z: c[2] } }
    pub const fn to_array(self) -> [f64; 3] { [self.x, self.y, self.z] }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
