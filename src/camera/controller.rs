use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, CameraUniform};
use crate::options::CameraOptions;
use crate::renderer::geometry::Aabb;

/// Closest the eye may get to the focus point.
const MIN_DISTANCE: f32 = 0.01;

/// Far plane that leaves room between `MIN_DISTANCE` and itself. NaN falls
/// back to the default.
fn sanitize_zfar(zfar: f32) -> f32 {
    if zfar.is_nan() {
        CameraOptions::default().zfar
    } else {
        zfar.max(MIN_DISTANCE * 2.0)
    }
}

/// Orbit controller: the eye circles a focus point at `distance`, with
/// rotation and pan applied through damped velocities.
///
/// Input methods only accumulate motion; [`OrbitController::update`] must be
/// called once per frame to apply it.
#[derive(Debug, Clone)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    rotate_velocity: Vec2,
    pan_velocity: Vec3,

    /// Camera derived from the orbit state.
    pub camera: Camera,
    /// Uniform mirror of `camera`, refreshed by [`Self::update`].
    pub uniform: CameraUniform,

    damping_factor: f32,
    fit_distance_factor: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitController {
    /// Controller looking at the origin from `+Z * initial_distance`.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = options.initial_distance.max(MIN_DISTANCE);
        let orientation = Quat::IDENTITY;

        let camera = Camera {
            eye: focus_point + Vec3::new(0.0, 0.0, distance),
            target: focus_point,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: sanitize_zfar(options.zfar),
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            orientation,
            distance,
            focus_point,
            rotate_velocity: Vec2::ZERO,
            pan_velocity: Vec3::ZERO,
            camera,
            uniform,
            damping_factor: options.damping_factor.clamp(0.0, 1.0),
            fit_distance_factor: options.fit_distance_factor,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    /// Current focus point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.focus_point
    }

    /// Current eye-to-focus distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Update the aspect ratio. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        self.camera.aspect = aspect;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Queue an orbit by `delta` radians (x = around up, y = around right).
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotate_velocity += delta * self.rotate_speed;
    }

    /// Queue a pan by `delta` view-plane units, scaled by distance.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = self.pan_speed * self.distance;
        self.pan_velocity += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    /// Zoom in (positive) or out (negative). Applied immediately.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.max(MIN_DISTANCE).min(self.camera.zfar);
        self.update_camera_pos();
    }

    /// Apply queued motion. With damping, only `damping_factor` of the
    /// queued motion is applied and the remainder decays; without damping
    /// everything is applied at once.
    ///
    /// Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        let step = if self.damping_factor > 0.0 {
            self.damping_factor
        } else {
            1.0
        };

        let rotate = self.rotate_velocity * step;
        let pan = self.pan_velocity * step;
        self.rotate_velocity -= rotate;
        self.pan_velocity -= pan;

        let moved = rotate.length_squared() > f32::EPSILON * f32::EPSILON
            || pan.length_squared() > f32::EPSILON * f32::EPSILON;
        if !moved {
            self.rotate_velocity = Vec2::ZERO;
            self.pan_velocity = Vec3::ZERO;
            return false;
        }

        // Horizontal rotation around the camera's up vector, then vertical
        // rotation around the (updated) right vector.
        let up = self.orientation * Vec3::Y;
        self.orientation = Quat::from_axis_angle(up, -rotate.x) * self.orientation;
        let right = self.orientation * Vec3::X;
        self.orientation =
            (Quat::from_axis_angle(right, -rotate.y) * self.orientation)
                .normalize();

        self.focus_point += pan;
        self.update_camera_pos();
        true
    }

    /// Aim at a point without moving the orbit orientation.
    pub fn set_target(&mut self, target: Vec3) {
        self.focus_point = target;
        self.update_camera_pos();
    }

    /// Frame a bounding box: look at its center from `+Z` at
    /// `fit_distance_factor` times its largest dimension. Pending motion is
    /// discarded.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb) {
        self.focus_point = bounds.center();
        self.orientation = Quat::IDENTITY;
        self.distance = (bounds.max_dimension() * self.fit_distance_factor)
            .max(MIN_DISTANCE)
            .min(self.camera.zfar);
        self.rotate_velocity = Vec2::ZERO;
        self.pan_velocity = Vec3::ZERO;
        self.update_camera_pos();
    }
}
