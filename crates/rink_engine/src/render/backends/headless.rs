//! Headless recording backend
//!
//! [`HeadlessDevice`] implements [`GraphicsDevice`] without touching a GPU. Every
//! call that would reach the driver is appended to a command log, which tests and
//! tools inspect to check pass ordering.

use std::collections::HashMap;

use slotmap::{DefaultKey, Key, KeyData, SlotMap};

use crate::assets::{EffectHandle, ModelHandle};
use crate::foundation::color::Color;
use crate::render::api::{
    BackendResult, GraphicsDevice, ParameterHandle, ParameterValue, RenderTargetDescriptor, RenderTargetHandle,
    Viewport,
};
use crate::render::systems::reflection::effect::SURFACE_PARAMETER_NAMES;
use crate::render::RenderError;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// A render target was allocated
    CreateRenderTarget {
        /// Handle returned to the caller
        target: RenderTargetHandle,
        /// Requested layout
        descriptor: RenderTargetDescriptor,
    },
    /// A render target (or the default surface with `None`) was bound
    SetRenderTarget(Option<RenderTargetHandle>),
    /// The bound surface was cleared
    Clear {
        /// Surface that was bound at the time
        target: Option<RenderTargetHandle>,
        /// Fill color
        color: Color,
    },
    /// An effect parameter was written
    SetParameter {
        /// Effect the parameter belongs to
        effect: EffectHandle,
        /// Parameter name
        name: String,
        /// Value written
        value: ParameterValue,
    },
    /// A model was drawn
    DrawModel {
        /// Geometry
        model: ModelHandle,
        /// Effect used
        effect: EffectHandle,
        /// Surface that was bound at the time
        target: Option<RenderTargetHandle>,
    },
}

/// GPU-less [`GraphicsDevice`] that records what it is asked to do
pub struct HeadlessDevice {
    viewport: Viewport,
    targets: SlotMap<DefaultKey, RenderTargetDescriptor>,
    bound: Option<RenderTargetHandle>,
    parameter_names: Vec<String>,
    parameters: HashMap<(EffectHandle, ParameterHandle), ParameterValue>,
    commands: Vec<DeviceCommand>,
    lost: bool,
}

impl HeadlessDevice {
    /// Device whose effects expose every surface parameter
    pub fn new(viewport: Viewport) -> Self {
        Self::with_parameters(viewport, SURFACE_PARAMETER_NAMES.iter().copied())
    }

    /// Device whose effects expose exactly the given parameter names
    pub fn with_parameters<'a>(viewport: Viewport, names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            viewport,
            targets: SlotMap::new(),
            bound: None,
            parameter_names: names.into_iter().map(str::to_string).collect(),
            parameters: HashMap::new(),
            commands: Vec::new(),
            lost: false,
        }
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[DeviceCommand] {
        &self.commands
    }

    /// Drain the command log
    pub fn take_commands(&mut self) -> Vec<DeviceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Last value written to a named parameter of an effect
    pub fn parameter_value(&self, effect: EffectHandle, name: &str) -> Option<ParameterValue> {
        let parameter = self.find_parameter(effect, name)?;
        self.parameters.get(&(effect, parameter)).copied()
    }

    /// Descriptor a target was created with
    pub fn render_target_descriptor(&self, target: RenderTargetHandle) -> Option<&RenderTargetDescriptor> {
        self.targets.get(Self::key(target))
    }

    /// Simulate device loss: every later fallible call fails
    pub fn lose_device(&mut self) {
        log::warn!("Headless device marked as lost");
        self.lost = true;
    }

    fn key(target: RenderTargetHandle) -> DefaultKey {
        KeyData::from_ffi(target.0).into()
    }

    fn check_device(&self) -> BackendResult<()> {
        if self.lost {
            Err(RenderError::BackendError("device lost".to_string()))
        } else {
            Ok(())
        }
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_render_target(&mut self, descriptor: &RenderTargetDescriptor) -> BackendResult<RenderTargetHandle> {
        self.check_device()?;
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(RenderError::ResourceCreationFailed(format!(
                "render target size {}x{} is empty",
                descriptor.width, descriptor.height
            )));
        }

        let target = RenderTargetHandle(self.targets.insert(*descriptor).data().as_ffi());
        log::debug!("Created {}x{} render target {:?}", descriptor.width, descriptor.height, target);
        self.commands.push(DeviceCommand::CreateRenderTarget {
            target,
            descriptor: *descriptor,
        });
        Ok(target)
    }

    fn set_render_target(&mut self, target: Option<RenderTargetHandle>) -> BackendResult<()> {
        self.check_device()?;
        if let Some(handle) = target {
            if !self.targets.contains_key(Self::key(handle)) {
                return Err(RenderError::BackendError(format!("unknown render target {handle:?}")));
            }
        }
        self.bound = target;
        self.commands.push(DeviceCommand::SetRenderTarget(target));
        Ok(())
    }

    fn bound_render_target(&self) -> Option<RenderTargetHandle> {
        self.bound
    }

    fn clear(&mut self, color: Color) -> BackendResult<()> {
        self.check_device()?;
        self.commands.push(DeviceCommand::Clear {
            target: self.bound,
            color,
        });
        Ok(())
    }

    fn find_parameter(&self, _effect: EffectHandle, name: &str) -> Option<ParameterHandle> {
        self.parameter_names
            .iter()
            .position(|known| known == name)
            .map(|index| ParameterHandle(index as u64))
    }

    fn set_parameter(&mut self, effect: EffectHandle, parameter: ParameterHandle, value: ParameterValue) {
        let Some(name) = usize::try_from(parameter.0)
            .ok()
            .and_then(|index| self.parameter_names.get(index))
        else {
            log::warn!("Ignoring write to unresolved parameter {:?}", parameter);
            return;
        };
        log::trace!("Set {} = {:?}", name, value);
        self.commands.push(DeviceCommand::SetParameter {
            effect,
            name: name.clone(),
            value,
        });
        self.parameters.insert((effect, parameter), value);
    }

    fn draw_model(&mut self, model: ModelHandle, effect: EffectHandle) -> BackendResult<()> {
        self.check_device()?;
        self.commands.push(DeviceCommand::DrawModel {
            model,
            effect,
            target: self.bound,
        });
        Ok(())
    }
}
