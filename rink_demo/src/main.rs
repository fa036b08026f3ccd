//! Headless rink demo
//!
//! Drives the gameplay screen for a fixed number of frames against the recording
//! backend: the ice reflection pass runs every frame, content reports ready a few
//! frames after activation, and Escape is pressed once halfway through to show the
//! pause overlay and fade.

mod props;
mod session;
mod stack;

use std::path::Path;

use rink_engine::assets::memory::AssetKind;
use rink_engine::assets::EffectHandle;
use rink_engine::config::{Config, ConfigError};
use rink_engine::foundation::logging;
use rink_engine::input::MAX_PLAYERS;
use rink_engine::prelude::*;
use rink_engine::render::systems::reflection::effect::{BLUR_AMOUNT, BLUR_TYPE, TRANSPARENCY};

use session::{RinkSessionFactory, PROP_EFFECT, PUCK_MODEL, SKATER_MODEL};
use stack::DemoScreenManager;

const CONFIG_PATH: &str = "rink.toml";
const VIEWPORT: Viewport = Viewport::new(1280, 720);
/// Frames an overlay stays on top before the stack pops it
const OVERLAY_FRAMES: u32 = 45;
/// Frame on which the asset loader starts reporting ready
const CONTENT_READY_FRAME: u32 = 10;

fn load_config() -> Result<ApplicationConfig, ConfigError> {
    let config = if Path::new(CONFIG_PATH).exists() {
        ApplicationConfig::load_from_file(CONFIG_PATH)?
    } else {
        ApplicationConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn demo_assets(config: &ApplicationConfig) -> MemoryAssetLoader {
    let mut assets = MemoryAssetLoader::with_keys(&config.assets);
    assets.register(AssetKind::Model, PUCK_MODEL);
    assets.register(AssetKind::Model, SKATER_MODEL);
    assets.register(AssetKind::Effect, PROP_EFFECT);
    assets.set_ready(false);
    assets
}

fn player_input(input: &mut InputState, keys: &[KeyCode]) {
    let mut keyboards: [KeyboardState; MAX_PLAYERS] = Default::default();
    keyboards[PlayerIndex::One.index()] = KeyboardState::with_keys(keys.iter().copied());
    input.update(keyboards, [GamePadState::connected(GamepadButtons::empty()); MAX_PLAYERS]);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_filter(&config.engine.log_level)?;
    log::info!(
        "Running {} frames at {} fps ({})",
        config.engine.frames,
        config.engine.target_fps,
        if Path::new(CONFIG_PATH).exists() { CONFIG_PATH } else { "default config" }
    );

    let mut manager = DemoScreenManager::new(HeadlessDevice::new(VIEWPORT), demo_assets(&config), OVERLAY_FRAMES);
    let mut screen = GameplayScreen::new(
        &config.screen,
        &config.assets,
        Box::new(RinkSessionFactory::new(config.clone())),
        None,
    );
    screen.set_controlling_player(Some(PlayerIndex::One));
    screen.activate(false, &mut manager)?;

    let step = config.engine.frame_step();
    let pause_frame = config.engine.frames / 2;
    let mut timer = Timer::new();
    let mut input = InputState::new();
    let mut command_count = 0;

    for frame in 0..config.engine.frames {
        if frame == CONTENT_READY_FRAME {
            manager.assets_mut().set_ready(true);
        }
        if frame == pause_frame {
            player_input(&mut input, &[KeyCode::Escape]);
        } else {
            player_input(&mut input, &[]);
        }

        if manager.take_reset_request() {
            timer.reset_elapsed();
        }
        let time = timer.advance(step);

        let covered = manager.has_overlay();
        if !covered {
            let outcome = screen.handle_input(&input, &mut manager)?;
            if outcome != InputOutcome::Forwarded {
                log::info!("Frame {}: {:?}", frame, outcome);
            }
        }
        if screen.update(&time, covered, covered, &mut manager)? == TransitionStep::Finished {
            break;
        }
        screen.draw(&time, &mut manager)?;

        command_count += manager.device_mut().take_commands().len();
        manager.end_frame();
    }

    screen.deactivate();
    log::info!(
        "Ran {} frames: {} device commands, {} fades, pause alpha {:.3}, lifecycle {:?}",
        timer.frame_count(),
        command_count,
        manager.fade_count(),
        screen.pause_alpha(),
        screen.lifecycle()
    );

    let effect = EffectHandle(manager.assets_mut().register(AssetKind::Effect, &config.assets.surface_effect));
    for name in [TRANSPARENCY, BLUR_AMOUNT, BLUR_TYPE] {
        log::info!("{} = {:?}", name, manager.device().parameter_value(effect, name));
    }
    Ok(())
}
