//! Session owner for the demo match
//!
//! Holds the ice surface, the props reflected in it and the broadcast camera
//! orbiting center ice.

use std::cell::RefCell;
use std::rc::Rc;

use rink_engine::assets::EffectHandle;
use rink_engine::prelude::*;

use crate::props::Prop;

pub const PUCK_MODEL: &str = "Models/Puck";
pub const SKATER_MODEL: &str = "Models/Skater";
pub const PROP_EFFECT: &str = "Effects/Prop";

const CAMERA_RADIUS: f32 = 25.0;
const CAMERA_HEIGHT: f32 = 12.0;
const CAMERA_ORBIT_SPEED: f32 = 0.2;

/// Builds [`RinkSession`]s from the application config
pub struct RinkSessionFactory {
    config: ApplicationConfig,
}

impl RinkSessionFactory {
    pub const fn new(config: ApplicationConfig) -> Self {
        Self { config }
    }
}

impl SessionFactory for RinkSessionFactory {
    fn create(
        &mut self,
        _manager: &mut dyn ScreenManager,
        network: Option<Rc<dyn NetworkSession>>,
    ) -> Result<Box<dyn GameSession>, SessionError> {
        if network.is_some() {
            log::warn!("Demo sessions ignore the network session");
        }
        Ok(Box::new(RinkSession::new(self.config.clone())))
    }
}

/// The running demo match
pub struct RinkSession {
    config: ApplicationConfig,
    surface: Option<ReflectiveSurface>,
    props: Vec<Rc<RefCell<Prop>>>,
    camera: Camera,
    frame: u64,
}

impl RinkSession {
    fn new(config: ApplicationConfig) -> Self {
        Self {
            config,
            surface: None,
            props: Vec::new(),
            camera: Camera::default(),
            frame: 0,
        }
    }

    fn surface(&mut self) -> Result<&mut ReflectiveSurface, SessionError> {
        self.surface
            .as_mut()
            .ok_or_else(|| SessionError::Frame("session was not started".to_string()))
    }

    fn orbit_camera(&mut self, time: &GameTime) {
        let angle = time.total().as_secs_f32() * CAMERA_ORBIT_SPEED;
        self.camera
            .set_position(Vec3::new(angle.sin() * CAMERA_RADIUS, CAMERA_HEIGHT, angle.cos() * CAMERA_RADIUS));
    }

    /// Nudge the surface parameters the way the properties menu would
    fn tune_surface(&mut self, device: &mut dyn GraphicsDevice) -> Result<(), SessionError> {
        let frame = self.frame;
        let surface = self.surface()?;
        if frame % 60 == 0 {
            let blur = surface.increase_blur(device);
            log::debug!("Blur amount now {:.3}", blur);
        }
        if frame % 90 == 0 {
            let mode = surface.cycle_blur_mode(device);
            log::debug!("Blur mode now {}", mode.index());
        }
        if frame % 150 == 0 {
            let transparency = surface.decrease_transparency(device);
            log::debug!("Transparency now {:.2}", transparency);
        }
        Ok(())
    }
}

impl GameSession for RinkSession {
    fn start(&mut self, manager: &mut dyn ScreenManager) -> Result<(), SessionError> {
        let (device, assets) = manager.graphics_and_assets();

        let mut surface = ReflectiveSurface::load(device, assets, &self.config.surface, &self.config.assets)?;
        surface.initialize(device)?;

        let effect: EffectHandle = assets.load_effect(PROP_EFFECT).map_err(RenderError::from)?;
        let puck_model = assets.load_model(PUCK_MODEL).map_err(RenderError::from)?;
        let skater_model = assets.load_model(SKATER_MODEL).map_err(RenderError::from)?;

        self.props = vec![
            Rc::new(RefCell::new(Prop::new(
                "puck",
                puck_model,
                effect,
                Vec3::new(0.0, 0.1, 0.0),
                Vec3::new(9.0, 0.0, 4.0),
            ))),
            Rc::new(RefCell::new(Prop::new(
                "skater",
                skater_model,
                effect,
                Vec3::new(-10.0, 1.8, 5.0),
                Vec3::new(3.0, 0.0, -2.5),
            ))),
        ];
        for prop in &self.props {
            let shared: SharedReflectable = prop.clone();
            surface.register(&shared);
        }

        self.camera.set_aspect_ratio(device.viewport().aspect_ratio());
        self.surface = Some(surface);
        log::info!("Demo session started with {} reflected props", self.props.len());
        Ok(())
    }

    fn update(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), SessionError> {
        self.frame += 1;
        for prop in &self.props {
            prop.borrow_mut().update(time);
        }
        self.orbit_camera(time);
        self.tune_surface(manager.graphics_device())
    }

    fn pre_draw(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), SessionError> {
        let camera = self.camera.clone();
        self.surface()?.pre_draw(manager.graphics_device(), time, &camera)?;
        Ok(())
    }

    fn draw(&mut self, time: &GameTime, manager: &mut dyn ScreenManager) -> Result<(), SessionError> {
        let device = manager.graphics_device();
        let camera = self.camera.clone();
        self.surface()?.draw(device, time, &camera)?;
        for prop in &self.props {
            prop.borrow_mut().draw(device, time, &camera)?;
        }
        Ok(())
    }
}

impl Drop for RinkSession {
    fn drop(&mut self) {
        if let Some(surface) = &self.surface {
            log::info!(
                "Final surface state: transparency {:.2}, blur {:.3}, blur mode {}",
                surface.transparency(),
                surface.blur_amount(),
                surface.blur_mode().index()
            );
        }
        for prop in &self.props {
            let prop = prop.borrow();
            log::info!("{} was clipped out of {} reflection draws", prop.name(), prop.clipped_draws());
        }
    }
}
