//! Reflection pass scenarios against the headless backend

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use approx::assert_abs_diff_eq;

use super::effect::{BLUR_AMOUNT, BLUR_TYPE, REFLECTED_VIEW, REFLECTION_MAP, SURFACE_PARAMETER_NAMES, TRANSPARENCY};
use super::*;
use crate::assets::{AssetError, MemoryAssetLoader};
use crate::core::config::{AssetConfig, SurfaceConfig};
use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::foundation::time::GameTime;
use crate::render::{
    Camera, ClipPlane, DeviceCommand, GraphicsDevice, HeadlessDevice, ParameterValue, RenderError, RenderResult,
    RenderTargetHandle, Viewport,
};
use crate::scene::GameEntity;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    SetPlane(usize, Option<ClipPlane>),
    Draw {
        id: usize,
        plane: Option<ClipPlane>,
        target: Option<RenderTargetHandle>,
        camera_position: Vec3,
    },
}

struct Prop {
    id: usize,
    plane: Option<ClipPlane>,
    events: Rc<RefCell<Vec<Event>>>,
    fail: bool,
}

impl Reflectable for Prop {
    fn set_clip_plane(&mut self, plane: Option<ClipPlane>) {
        self.plane = plane;
        self.events.borrow_mut().push(Event::SetPlane(self.id, plane));
    }

    fn draw(&mut self, device: &mut dyn GraphicsDevice, _time: &GameTime, camera: &Camera) -> RenderResult<()> {
        self.events.borrow_mut().push(Event::Draw {
            id: self.id,
            plane: self.plane,
            target: device.bound_render_target(),
            camera_position: camera.position,
        });
        if self.fail {
            return Err(RenderError::RenderingFailed(format!("prop {} failed", self.id)));
        }
        Ok(())
    }
}

struct Fixture {
    device: HeadlessDevice,
    surface: ReflectiveSurface,
    events: Rc<RefCell<Vec<Event>>>,
    props: Vec<SharedReflectable>,
    camera: Camera,
    time: GameTime,
}

impl Fixture {
    fn new() -> Self {
        let mut device = HeadlessDevice::new(Viewport::new(1280, 720));
        let mut assets = MemoryAssetLoader::with_keys(&AssetConfig::default());
        let mut surface =
            ReflectiveSurface::load(&mut device, &mut assets, &SurfaceConfig::default(), &AssetConfig::default())
                .unwrap();
        surface.initialize(&mut device).unwrap();

        let mut camera = Camera::default();
        camera.set_position(Vec3::new(0.0, 12.0, 20.0));
        camera.set_target(Vec3::new(0.0, 1.0, 0.0));

        Self {
            device,
            surface,
            events: Rc::new(RefCell::new(Vec::new())),
            props: Vec::new(),
            camera,
            time: GameTime::new(Duration::from_millis(16), Duration::from_millis(16)),
        }
    }

    fn add_prop(&mut self, fail: bool) -> usize {
        let id = self.props.len();
        let prop: SharedReflectable = Rc::new(RefCell::new(Prop {
            id,
            plane: None,
            events: Rc::clone(&self.events),
            fail,
        }));
        self.surface.register(&prop);
        self.props.push(prop);
        id
    }

    fn render_reflection(&mut self) -> RenderResult<()> {
        self.device.take_commands();
        self.surface.render_reflection(&mut self.device, &self.time, &self.camera)
    }

    fn parameter(&self, name: &str) -> Option<ParameterValue> {
        self.device.parameter_value(self.surface.effect(), name)
    }
}

#[test]
fn test_initialize_pushes_initial_parameters() {
    let fixture = Fixture::new();

    assert_eq!(fixture.parameter(BLUR_TYPE), Some(ParameterValue::Int(0)));
    assert_eq!(fixture.parameter(BLUR_AMOUNT), Some(ParameterValue::Float(0.001)));
    assert_eq!(fixture.parameter(TRANSPARENCY), Some(ParameterValue::Float(0.8)));
    assert!(matches!(
        fixture.parameter(super::effect::SURFACE_TEXTURE),
        Some(ParameterValue::Texture(_))
    ));
}

#[test]
fn test_second_initialize_is_rejected() {
    let mut fixture = Fixture::new();

    let result = fixture.surface.initialize(&mut fixture.device);
    assert!(matches!(result, Err(RenderError::AlreadyInitialized)));
}

#[test]
fn test_reflection_target_matches_viewport() {
    let fixture = Fixture::new();
    let descriptor = fixture
        .device
        .render_target_descriptor(fixture.surface.reflection_target())
        .unwrap();

    assert_eq!((descriptor.width, descriptor.height), (1280, 720));
    assert!(!descriptor.mipmaps);
}

#[test]
fn test_pass_restores_default_surface_and_binds_reflection_map() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);

    fixture.render_reflection().unwrap();

    assert_eq!(fixture.device.bound_render_target(), None);
    assert_eq!(
        fixture.parameter(REFLECTION_MAP),
        Some(ParameterValue::RenderTarget(fixture.surface.reflection_target()))
    );
}

#[test]
fn test_pass_command_order() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);
    let target = fixture.surface.reflection_target();
    let effect = fixture.surface.effect();

    fixture.render_reflection().unwrap();
    let commands = fixture.device.commands();

    let mirrored_view = fixture.camera.mirrored().get_view_matrix();
    assert_eq!(
        commands,
        &[
            DeviceCommand::SetParameter {
                effect,
                name: REFLECTED_VIEW.to_string(),
                value: ParameterValue::Matrix(mirrored_view),
            },
            DeviceCommand::SetRenderTarget(Some(target)),
            DeviceCommand::Clear {
                target: Some(target),
                color: Color::WHITE,
            },
            DeviceCommand::SetRenderTarget(None),
            DeviceCommand::SetParameter {
                effect,
                name: REFLECTION_MAP.to_string(),
                value: ParameterValue::RenderTarget(target),
            },
            DeviceCommand::Clear {
                target: None,
                color: Color::CORNFLOWER_BLUE,
            },
        ]
    );
}

#[test]
fn test_clip_plane_is_scoped_to_each_draw() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);
    fixture.add_prop(false);
    let target = Some(fixture.surface.reflection_target());
    let mirrored_position = Vec3::new(0.0, -12.0, 20.0);
    let plane = Some(ClipPlane::surface());

    fixture.render_reflection().unwrap();

    assert_eq!(
        *fixture.events.borrow(),
        vec![
            Event::SetPlane(0, plane),
            Event::Draw {
                id: 0,
                plane,
                target,
                camera_position: mirrored_position,
            },
            Event::SetPlane(0, None),
            Event::SetPlane(1, plane),
            Event::Draw {
                id: 1,
                plane,
                target,
                camera_position: mirrored_position,
            },
            Event::SetPlane(1, None),
        ]
    );
}

#[test]
fn test_empty_registry_yields_cleared_map() {
    let mut fixture = Fixture::new();

    fixture.render_reflection().unwrap();

    let target = fixture.surface.reflection_target();
    let fills: Vec<_> = fixture
        .device
        .commands()
        .iter()
        .filter(|command| {
            matches!(
                command,
                DeviceCommand::Clear { target: Some(t), .. } | DeviceCommand::DrawModel { target: Some(t), .. }
                    if *t == target
            )
        })
        .collect();
    assert_eq!(
        fills,
        vec![&DeviceCommand::Clear {
            target: Some(target),
            color: Color::WHITE,
        }]
    );
    assert_eq!(fixture.parameter(REFLECTION_MAP), Some(ParameterValue::RenderTarget(target)));
}

#[test]
fn test_failed_draw_clears_plane_and_restores_target() {
    let mut fixture = Fixture::new();
    fixture.add_prop(true);
    fixture.add_prop(false);

    let result = fixture.render_reflection();

    assert!(matches!(result, Err(RenderError::RenderingFailed(_))));
    assert_eq!(fixture.device.bound_render_target(), None);
    assert_eq!(fixture.events.borrow().last(), Some(&Event::SetPlane(0, None)));
    assert_eq!(fixture.parameter(REFLECTION_MAP), None);
}

#[test]
fn test_dropped_reflectable_is_skipped() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);
    fixture.add_prop(false);
    fixture.props.remove(0);

    fixture.render_reflection().unwrap();

    assert_eq!(fixture.surface.reflectable_count(), 2);
    assert!(fixture
        .events
        .borrow()
        .iter()
        .all(|event| !matches!(event, Event::Draw { id: 0, .. })));
}

#[test]
fn test_borrowed_reflectable_is_skipped() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);
    fixture.add_prop(false);
    let held = Rc::clone(&fixture.props[0]);
    let _owner_borrow = held.borrow_mut();

    fixture.render_reflection().unwrap();

    let drawn: Vec<usize> = fixture
        .events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Draw { id, .. } => Some(*id),
            Event::SetPlane(..) => None,
        })
        .collect();
    assert_eq!(drawn, vec![1]);
    assert_eq!(fixture.device.bound_render_target(), None);
    assert_eq!(
        fixture.parameter(REFLECTION_MAP),
        Some(ParameterValue::RenderTarget(fixture.surface.reflection_target()))
    );
}

#[test]
fn test_duplicate_registration_draws_twice() {
    let mut fixture = Fixture::new();
    fixture.add_prop(false);
    let prop = Rc::clone(&fixture.props[0]);
    fixture.surface.register(&prop);

    fixture.render_reflection().unwrap();

    let draws = fixture
        .events
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Draw { .. }))
        .count();
    assert_eq!(draws, 2);
}

#[test]
fn test_pre_draw_runs_reflection_before_surface_draw() {
    let mut fixture = Fixture::new();
    fixture.device.take_commands();

    GameEntity::pre_draw(&mut fixture.surface, &mut fixture.device, &fixture.time, &fixture.camera).unwrap();
    GameEntity::draw(&mut fixture.surface, &mut fixture.device, &fixture.time, &fixture.camera).unwrap();

    let commands = fixture.device.commands();
    let map_index = commands
        .iter()
        .position(|c| matches!(c, DeviceCommand::SetParameter { name, .. } if name == REFLECTION_MAP))
        .unwrap();
    let draw_index = commands
        .iter()
        .position(|c| matches!(c, DeviceCommand::DrawModel { target: None, .. }))
        .unwrap();
    assert!(map_index < draw_index);
}

#[test]
fn test_tuning_pushes_each_change() {
    let mut fixture = Fixture::new();
    fixture.device.take_commands();

    assert_abs_diff_eq!(fixture.surface.increase_transparency(&mut fixture.device), 0.9, epsilon = 1e-6);
    assert_abs_diff_eq!(fixture.surface.decrease_blur(&mut fixture.device), 0.0);
    assert_eq!(fixture.surface.cycle_blur_mode(&mut fixture.device).index(), 1);

    assert_eq!(fixture.device.commands().len(), 3);
    assert_eq!(fixture.parameter(BLUR_TYPE), Some(ParameterValue::Int(1)));
    assert_eq!(fixture.parameter(BLUR_AMOUNT), Some(ParameterValue::Float(0.0)));
    assert_eq!(
        fixture.parameter(TRANSPARENCY),
        Some(ParameterValue::Float(fixture.surface.transparency()))
    );
}

#[test]
fn test_frame_calls_before_initialize_fail() {
    let mut device = HeadlessDevice::new(Viewport::new(64, 64));
    let mut assets = MemoryAssetLoader::with_keys(&AssetConfig::default());
    let mut surface =
        ReflectiveSurface::load(&mut device, &mut assets, &SurfaceConfig::default(), &AssetConfig::default()).unwrap();

    let result = surface.render_reflection(&mut device, &GameTime::default(), &Camera::default());
    assert!(matches!(result, Err(RenderError::NotInitialized)));

    // Tuning before initialize only changes local state
    surface.increase_blur(&mut device);
    assert!(device
        .commands()
        .iter()
        .all(|c| !matches!(c, DeviceCommand::SetParameter { .. })));

    surface.initialize(&mut device).unwrap();
    assert_eq!(
        device.parameter_value(surface.effect(), BLUR_AMOUNT),
        Some(ParameterValue::Float(surface.blur_amount()))
    );
}

#[test]
fn test_missing_asset_is_fatal() {
    let mut device = HeadlessDevice::new(Viewport::new(64, 64));
    let mut assets = MemoryAssetLoader::new();

    let result = ReflectiveSurface::load(&mut device, &mut assets, &SurfaceConfig::default(), &AssetConfig::default());
    assert!(matches!(result, Err(RenderError::Asset(AssetError::NotFound(_)))));
}

#[test]
fn test_effect_without_surface_parameters_fails_initialize() {
    let names = SURFACE_PARAMETER_NAMES
        .iter()
        .copied()
        .filter(|name| *name != REFLECTION_MAP);
    let mut device = HeadlessDevice::with_parameters(Viewport::new(64, 64), names);
    let mut assets = MemoryAssetLoader::with_keys(&AssetConfig::default());
    let mut surface =
        ReflectiveSurface::load(&mut device, &mut assets, &SurfaceConfig::default(), &AssetConfig::default()).unwrap();

    let result = surface.initialize(&mut device);
    assert!(matches!(result, Err(RenderError::UnknownShaderParameter(name)) if name == REFLECTION_MAP));
    assert!(!surface.is_initialized());
}
