//! User clip plane in world space

use crate::foundation::math::{Vec3, Vec4};

/// Plane `a*x + b*y + c*z + d = 0` that discards geometry on its negative side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    coefficients: Vec4,
}

impl ClipPlane {
    /// Plane from its four coefficients
    pub const fn new(coefficients: Vec4) -> Self {
        Self { coefficients }
    }

    /// The rink surface, `y = 0`, keeping everything above the ice
    pub fn surface() -> Self {
        Self::new(Vec4::new(0.0, 1.0, 0.0, 0.0))
    }

    /// Coefficients as `(a, b, c, d)`
    pub const fn as_vec4(&self) -> Vec4 {
        self.coefficients
    }

    /// Signed distance of a point along the (unnormalized) plane normal
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        let c = &self.coefficients;
        c.x * point.x + c.y * point.y + c.z * point.z + c.w
    }

    /// Whether a point would be discarded
    pub fn is_clipped(&self, point: Vec3) -> bool {
        self.signed_distance(point) < 0.0
    }
}
