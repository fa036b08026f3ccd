//! # 3D Camera System
//!
//! Perspective camera used for the main scene view and, mirrored through the ice,
//! for the reflection pass.
//!
//! ## Design Principles
//! - **Library-agnostic**: No backend dependencies in camera math
//! - **Immutable derivation**: [`Camera::mirrored`] builds a new camera and leaves the
//!   live one untouched
//! - **Y-up**: The rink surface is the `y = 0` plane

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D Camera for perspective projection
///
/// Represents a camera in 3D space with position, orientation, and projection parameters.
///
/// # Coordinate System
/// Uses standard right-handed Y-up coordinate system in view space:
/// - X+ = Right
/// - Y+ = Up
/// - Z+ = Towards the viewer
///
/// # Performance Notes
/// Matrix calculations are performed on-demand rather than cached. The reflection
/// pass builds one mirrored camera per frame, so this is never a hot path.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera with standard Y-up orientation
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// # Example
    /// ```rust
    /// use rink_engine::foundation::math::Vec3;
    /// use rink_engine::render::Camera;
    ///
    /// let camera = Camera::perspective(
    ///     Vec3::new(0.0, 12.0, 30.0),  // Above the boards, behind the goal line
    ///     45.0,
    ///     16.0 / 9.0,
    ///     0.1,
    ///     500.0,
    /// );
    /// assert_eq!(camera.target, Vec3::zeros());
    /// ```
    ///
    /// # Design Notes
    /// The default target is the rink center and up vector is +Y, which can be
    /// customized after creation.
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update camera target (look-at point)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Configure camera to look at a specific point with custom up vector
    ///
    /// # Arguments
    /// * `target` - Point in world space to look at
    /// * `up` - Up vector for camera orientation (should be normalized)
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs aspect ratio changes when the difference is significant
    /// (> 0.01) to reduce log noise during resize events.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Camera mirrored through the rink surface
    ///
    /// Negates the vertical component of both the position and the look-at target.
    /// The up vector is the fixed world up rather than a mirrored one, so the
    /// reflected image comes out flipped the way a real reflection would. Projection
    /// parameters are copied from this camera.
    ///
    /// # Returns
    /// A fresh camera; nothing about `self` changes
    pub fn mirrored(&self) -> Self {
        let mut position = self.position;
        let mut target = self.target;
        position.y = -position.y;
        target.y = -target.y;

        Self {
            position,
            target,
            up: Vec3::y(),
            ..self.clone()
        }
    }

    /// Generate view matrix for world-to-camera space transformation
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate perspective projection matrix
    ///
    /// Uses the current aspect ratio. For dynamic viewports, ensure
    /// `set_aspect_ratio()` is called when the window dimensions change.
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for Camera {
    /// Broadcast-style default: high above center ice, looking at the faceoff dot
    ///
    /// # Default Configuration
    /// - Position: (0, 15, 25)
    /// - Target: (0, 0, 0)
    /// - Up: (0, 1, 0)
    /// - FOV: 45 degrees
    /// - Aspect: 16:9
    /// - Near: 0.1
    /// - Far: 1000.0
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 15.0, 25.0),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
