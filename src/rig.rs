//! Drag-to-rotate desk scene: controls, per-frame animation and the render
//! surface seam.

use crate::camera::Camera;
use crate::config::RigConfig;
use crate::constants::{RENDERER_MISSING_HTML, REFERENCE_FRAME_RATE};
use crate::error::SiteError;
use crate::input::{DragState, OrbitControls, PointerKind};
use crate::scene::SceneGraph;
use glam::Vec2;

/// Something that can draw the scene into the page.
pub trait RenderSurface {
    /// Match the output to the container's pixel size.
    fn set_size(&mut self, width: u32, height: u32);
    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> anyhow::Result<()>;
}

/// The element that hosts the scene.
pub trait RigHost {
    /// Current `(width, height)` in CSS pixels.
    fn size(&self) -> (u32, u32);
    /// Replace the host's content with a visible error message.
    fn show_error(&mut self, html: &str);
}

/// Animated pose of the rig, advanced once per display frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RigAnimator {
    pub rotation_y: f32,
    /// Damped vertical tilt. Tracked every frame; reaches the rig only when
    /// vertical tilt is enabled.
    pub rotation_x: f32,
    pub cooler_spin: f32,
}

impl RigAnimator {
    pub fn step(&mut self, drag: &DragState, config: &RigConfig, dt_sec: f32) {
        let (alpha, spin) = if config.frame_rate_independent {
            let frames = (dt_sec * REFERENCE_FRAME_RATE).max(0.0);
            (
                1.0 - (1.0 - config.damping).powf(frames),
                config.cooler_spin_per_frame * frames,
            )
        } else {
            (config.damping, config.cooler_spin_per_frame)
        };
        self.rotation_y += (drag.target_rotation_y - self.rotation_y) * alpha;
        self.rotation_x += (drag.target_rotation_x - self.rotation_x) * alpha;
        self.cooler_spin += spin;
    }

    /// X rotation to apply to the rig for this frame.
    pub fn applied_rotation_x(&self, config: &RigConfig) -> f32 {
        if config.vertical_tilt_enabled {
            self.rotation_x
        } else {
            0.0
        }
    }
}

pub struct OrbitRig<S> {
    config: RigConfig,
    controls: OrbitControls,
    animator: RigAnimator,
    scene: SceneGraph,
    camera: Camera,
    surface: S,
    size: (u32, u32),
    cooler_base_x: f32,
}

impl<S: RenderSurface> OrbitRig<S> {
    /// Build the scene into `host` when a render surface is available.
    ///
    /// Without one the host shows an error message and nothing is built.
    /// Invalid tuning is rejected before anything else happens.
    pub fn mount<H: RigHost>(host: &mut H, surface: Option<S>, config: RigConfig) -> Result<Self, SiteError> {
        config.validate()?;
        let Some(mut surface) = surface else {
            log::error!("[rig] renderer unavailable; showing fallback message");
            host.show_error(RENDERER_MISSING_HTML);
            return Err(SiteError::MissingDependency("3D renderer".into()));
        };
        let (width, height) = host.size();
        let scene = SceneGraph::desk_setup();
        let camera = Camera::framing_desk(width, height);
        surface.set_size(width, height);
        let cooler_base_x = scene.node(scene.cooler()).transform.rotation.x;
        log::info!("[rig] mounted: nodes={} size={}x{}", scene.node_count(), width, height);
        Ok(Self {
            controls: OrbitControls::new(config.clone()),
            config,
            animator: RigAnimator::default(),
            scene,
            camera,
            surface,
            size: (width, height),
            cooler_base_x,
        })
    }

    pub fn pointer_down(&mut self, kind: PointerKind, pos: Vec2) {
        self.controls.pointer_down(kind, pos);
    }

    pub fn pointer_move(&mut self, kind: PointerKind, pos: Vec2) {
        self.controls.pointer_move(kind, pos);
    }

    pub fn pointer_up(&mut self) {
        self.controls.pointer_up();
    }

    pub fn is_dragging(&self) -> bool {
        self.controls.state().is_dragging
    }

    pub fn drag_state(&self) -> &DragState {
        self.controls.state()
    }

    pub fn animator(&self) -> &RigAnimator {
        &self.animator
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Track a container resize. Zero-sized containers (hidden) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.camera.set_viewport(width, height);
        self.surface.set_size(width, height);
    }

    /// Advance the animation one display frame and draw.
    pub fn frame(&mut self, dt_sec: f32) {
        self.animator
            .step(self.controls.state(), &self.config, dt_sec);

        let rig = self.scene.rig();
        let rig_tf = self.scene.transform_mut(rig);
        rig_tf.rotation.y = self.animator.rotation_y;
        rig_tf.rotation.x = self.animator.applied_rotation_x(&self.config);

        let cooler = self.scene.cooler();
        self.scene.transform_mut(cooler).rotation.x = self.cooler_base_x + self.animator.cooler_spin;

        if let Err(e) = self.surface.render(&self.scene, &self.camera) {
            log::error!("[rig] render error: {:?}", e);
        }
    }
}
