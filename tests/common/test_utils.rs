#![allow(dead_code)]

use tabletop_scene::shader::{ShaderSink, UniformValue};

/// Shader sink that remembers every write in order.
#[derive(Default)]
pub struct RecordingSink {
    pub writes: Vec<(String, UniformValue)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written under `name`.
    pub fn last(&self, name: &str) -> Option<UniformValue> {
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| written == name)
            .map(|(_, value)| *value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.writes.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ShaderSink for RecordingSink {
    fn set_value(&mut self, name: &str, value: UniformValue) {
        self.writes.push((name.to_string(), value));
    }
}

/// Device and queue without a window, for tests that need real GPU resources.
#[cfg(feature = "integration-tests")]
pub fn headless_device() -> (wgpu::Device, wgpu::Queue) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to start the async runtime");
    runtime.block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("no graphics adapter available");
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("test device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .expect("could not open the graphics device")
    })
}
