//! Headless scene host.
//!
//! [`SceneHost`] is the application context around a built
//! [`MoleculeGroup`]: it owns the orbit camera, lighting, load status and
//! the auto-rotation state. The group's primitives are never mutated after
//! build; rotation lives in the host and reaches a renderer as the model
//! matrix in each [`FrameState`].

mod lighting;

use glam::{EulerRot, Mat4, Vec2};
pub use lighting::LightingUniform;

use crate::camera::{CameraUniform, OrbitController};
use crate::error::MolviewError;
use crate::loader::{self, Fetch, LoadPipeline, Source};
use crate::options::Options;
use crate::renderer::geometry::MoleculeGroup;
use crate::util::frame_timing::FrameTiming;

/// Status text shown when loading fails for any reason.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading molecule";

/// Where the host is in the load sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Waiting for the molecule.
    #[default]
    Loading,
    /// A group is attached.
    Ready,
    /// Loading failed; carries the user-visible message.
    Failed(String),
}

impl LoadStatus {
    /// Whether loading has finished, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Camera matrices.
    pub camera: CameraUniform,
    /// Lighting and clear color.
    pub lighting: LightingUniform,
    /// Transform applied to the whole molecule group.
    pub model: Mat4,
    /// Number of atom spheres attached (0 while nothing is attached).
    pub sphere_count: usize,
    /// Number of bond cylinders attached.
    pub cylinder_count: usize,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// The scene host: one explicit context, no globals.
#[derive(Debug)]
pub struct SceneHost {
    options: Options,
    controller: OrbitController,
    lighting: LightingUniform,
    group: Option<MoleculeGroup>,
    status: LoadStatus,
    last_error: Option<MolviewError>,
    pipeline: Option<LoadPipeline>,
    /// Accumulated auto-rotation: x about Y, y about Z (radians).
    rotation: Vec2,
    timing: FrameTiming,
}

impl SceneHost {
    /// Create a host for a viewport with the given aspect ratio.
    #[must_use]
    pub fn new(options: Options, aspect: f32) -> Self {
        let controller = OrbitController::new(&options.camera, aspect);
        let lighting =
            LightingUniform::from_options(&options.lighting, &options.colors);
        let timing = FrameTiming::new(options.animation.target_fps);
        Self {
            options,
            controller,
            lighting,
            group: None,
            status: LoadStatus::Loading,
            last_error: None,
            pipeline: None,
            rotation: Vec2::ZERO,
            timing,
        }
    }

    /// Options the host was created with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current load status.
    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The attached group, if loading succeeded.
    #[must_use]
    pub fn group(&self) -> Option<&MoleculeGroup> {
        self.group.as_ref()
    }

    /// Take the error behind a [`LoadStatus::Failed`] status.
    pub fn take_error(&mut self) -> Option<MolviewError> {
        self.last_error.take()
    }

    /// Camera controller (read-only).
    #[must_use]
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    /// Camera controller, for feeding rotate/pan/zoom input.
    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    /// Current lighting uniform.
    #[must_use]
    pub fn lighting(&self) -> &LightingUniform {
        &self.lighting
    }

    /// Frame timer.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Accumulated auto-rotation (x about Y, y about Z).
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Transform for the attached group.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, 0.0, self.rotation.x, self.rotation.y)
    }

    /// Start fetching `source` in the background. Any previous pending load
    /// is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::ThreadSpawn`] if the fetch thread cannot start;
    /// the status is set to failed in that case too.
    pub fn begin_load<F: Fetch>(
        &mut self,
        source: Source,
        fetcher: F,
    ) -> Result<(), MolviewError> {
        self.status = LoadStatus::Loading;
        self.last_error = None;
        match LoadPipeline::spawn(source, fetcher) {
            Ok(pipeline) => {
                self.pipeline = Some(pipeline);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to start loading: {e}");
                self.pipeline = None;
                self.status = LoadStatus::Failed(LOAD_ERROR_MESSAGE.to_owned());
                Err(e)
            }
        }
    }

    /// Whether a background fetch is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Non-blocking: finish the load if the fetched text has arrived.
    ///
    /// Returns `true` on the one call that settles the load.
    pub fn poll_load(&mut self) -> bool {
        let Some(result) = self.pipeline.as_mut().and_then(LoadPipeline::try_take)
        else {
            return false;
        };
        self.pipeline = None;
        self.finish_load(result);
        true
    }

    /// Block until the pending load settles. Returns `false` if nothing was
    /// pending.
    pub fn wait_for_load(&mut self) -> bool {
        let Some(result) = self.pipeline.as_mut().and_then(LoadPipeline::wait)
        else {
            return false;
        };
        self.pipeline = None;
        self.finish_load(result);
        true
    }

    fn finish_load(&mut self, fetched: Result<String, MolviewError>) {
        let built = fetched.and_then(|text| {
            loader::build_from_text(
                &text,
                &self.options.parse,
                &self.options.geometry,
                &self.options.colors,
            )
        });
        match built {
            Ok(group) => self.attach_group(group),
            Err(e) => {
                log::error!("failed to load molecule: {e}");
                self.group = None;
                self.status = LoadStatus::Failed(LOAD_ERROR_MESSAGE.to_owned());
                self.last_error = Some(e);
            }
        }
    }

    /// Attach a built group, reset the rotation and frame the camera on it.
    pub fn attach_group(&mut self, group: MoleculeGroup) {
        if let Some(bounds) = group.bounding_box() {
            self.controller.fit_to_bounds(&bounds);
        } else {
            log::debug!("'{}' has no finite bounds; camera left as is", group.name);
        }
        log::info!(
            "attached '{}': {} atoms, {} bond cylinders",
            group.name,
            group.sphere_count(),
            group.cylinder_count()
        );
        self.rotation = Vec2::ZERO;
        self.group = Some(group);
        self.status = LoadStatus::Ready;
    }

    /// Drop the attached group.
    pub fn detach_group(&mut self) -> Option<MoleculeGroup> {
        self.rotation = Vec2::ZERO;
        self.group.take()
    }

    /// Viewport resize. Zero-height sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.controller.resize(width, height);
    }

    /// Advance one frame: settle a pending load, apply camera motion,
    /// advance auto-rotation while a group is attached.
    pub fn tick(&mut self) -> FrameState {
        let _ = self.poll_load();
        let _ = self.controller.update();

        let animation = &self.options.animation;
        if self.group.is_some() && animation.auto_rotate {
            self.rotation.x += animation.rotation_step_y;
            self.rotation.y += animation.rotation_step_z;
        }

        let dt = self.timing.end_frame();
        let (sphere_count, cylinder_count) = self
            .group
            .as_ref()
            .map_or((0, 0), |g| (g.sphere_count(), g.cylinder_count()));

        FrameState {
            camera: self.controller.uniform,
            lighting: self.lighting,
            model: self.model_matrix(),
            sphere_count,
            cylinder_count,
            dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::loader::tests::{StaticFetcher, ASPIRIN};
    use crate::options::{ColorOptions, GeometryOptions, ParseOptions};

    const EPS: f32 = 1e-4;

    fn host() -> SceneHost {
        SceneHost::new(Options::default(), 1.0)
    }

    #[test]
    fn starts_loading_with_nothing_attached() {
        let mut host = host();
        assert_eq!(host.status(), &LoadStatus::Loading);
        let frame = host.tick();
        assert_eq!(frame.sphere_count, 0);
        assert_eq!(host.rotation(), Vec2::ZERO);
        assert_eq!(frame.model, Mat4::IDENTITY);
    }

    #[test]
    fn successful_load_attaches_and_frames() {
        let mut host = host();
        host.begin_load(
            Source::parse("aspirin.mol"),
            StaticFetcher { text: Some(ASPIRIN) },
        )
        .unwrap();
        assert!(host.wait_for_load());
        assert_eq!(host.status(), &LoadStatus::Ready);

        let group = host.group().unwrap();
        assert_eq!(group.sphere_count(), 21);
        let bounds = group.bounding_box().unwrap();
        let expected_eye =
            bounds.center() + Vec3::new(0.0, 0.0, bounds.max_dimension() * 3.0);
        let camera = &host.controller().camera;
        assert!((camera.eye - expected_eye).length() < EPS);
        assert!((camera.target - bounds.center()).length() < EPS);
    }

    #[test]
    fn fetch_failure_settles_exactly_once() {
        let mut host = host();
        host.begin_load(
            Source::parse("https://example.org/missing.mol"),
            StaticFetcher { text: None },
        )
        .unwrap();

        let mut settled = 0;
        while host.is_loading() {
            if host.poll_load() {
                settled += 1;
            }
            std::thread::yield_now();
        }
        for _ in 0..3 {
            if host.poll_load() {
                settled += 1;
            }
            let _ = host.tick();
        }

        assert_eq!(settled, 1);
        assert!(host.group().is_none());
        assert_eq!(
            host.status(),
            &LoadStatus::Failed(LOAD_ERROR_MESSAGE.to_owned())
        );
        assert!(matches!(host.take_error(), Some(MolviewError::Fetch(_))));
        assert_eq!(host.rotation(), Vec2::ZERO);
    }

    #[test]
    fn malformed_text_fails_like_fetch_failure() {
        let mut host = host();
        host.begin_load(
            Source::parse("bad.mol"),
            StaticFetcher { text: Some("bad\n\n\nnot a counts line\n") },
        )
        .unwrap();
        assert!(host.wait_for_load());
        assert!(host.group().is_none());
        assert!(matches!(host.status(), LoadStatus::Failed(_)));
        assert!(matches!(
            host.take_error(),
            Some(MolviewError::Malformed { line: 4, .. })
        ));
    }

    #[test]
    fn auto_rotation_advances_per_frame() {
        let mut host = host();
        let group = loader::build_from_text(
            ASPIRIN,
            &ParseOptions::default(),
            &GeometryOptions::default(),
            &ColorOptions::default(),
        )
        .unwrap();
        let before: Vec<_> = group.spheres().map(|s| s.center).collect();
        host.attach_group(group);

        for _ in 0..10 {
            let _ = host.tick();
        }
        assert!((host.rotation().x - 0.05).abs() < EPS);
        assert!((host.rotation().y - 0.05).abs() < EPS);

        // The group itself stays untransformed.
        let after: Vec<_> =
            host.group().unwrap().spheres().map(|s| s.center).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn auto_rotation_can_be_disabled() {
        let mut options = Options::default();
        options.animation.auto_rotate = false;
        let mut host = SceneHost::new(options, 1.0);
        host.attach_group(MoleculeGroup::default());
        let frame = host.tick();
        assert_eq!(frame.model, Mat4::IDENTITY);
        assert_eq!(host.status(), &LoadStatus::Ready);
    }

    #[test]
    fn tiny_far_plane_from_toml_still_attaches() {
        let options = Options::from_toml("[camera]\nzfar = 0.005").unwrap();
        let mut host = SceneHost::new(options, 1.0);
        let group = loader::build_from_text(
            ASPIRIN,
            &ParseOptions::default(),
            &GeometryOptions::default(),
            &ColorOptions::default(),
        )
        .unwrap();
        host.attach_group(group);
        assert_eq!(host.status(), &LoadStatus::Ready);
        let camera = &host.controller().camera;
        assert!(camera.eye.is_finite());
        assert!(host.controller().distance() <= camera.zfar);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut host = host();
        host.resize(1920, 1080);
        let aspect = host.controller().camera.aspect;
        assert!((aspect - 1920.0 / 1080.0).abs() < EPS);
        host.resize(1920, 0);
        assert!((host.controller().camera.aspect - aspect).abs() < EPS);
    }
}
