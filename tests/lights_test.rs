use cgmath::vec3;
use tabletop_scene::{
    pipelines::light::{LightSource, MAX_LIGHTS, configure_lights},
    scene::lights::scene_lights,
    shader::{ShaderState, UniformValue, names},
};

mod common;
use common::test_utils::RecordingSink;

fn light(x: f32) -> LightSource {
    LightSource {
        position: vec3(x, 1.0, 0.0),
        ambient_color: vec3(0.1, 0.1, 0.1),
        diffuse_color: vec3(0.5, 0.5, 0.5),
        specular_color: vec3(1.0, 1.0, 1.0),
        focal_strength: 16.0,
        specular_intensity: 0.2,
    }
}

#[test]
fn should_enable_lighting_before_writing_light_blocks() {
    let mut sink = RecordingSink::new();
    let written = configure_lights(&mut sink, &[light(1.0)]);

    assert_eq!(written, 1);
    assert_eq!(sink.names()[0], names::USE_LIGHTING);
    assert_eq!(sink.last(names::USE_LIGHTING), Some(UniformValue::Bool(true)));
    assert_eq!(
        sink.names()[1..],
        [
            "lightSources[0].position",
            "lightSources[0].ambientColor",
            "lightSources[0].diffuseColor",
            "lightSources[0].specularColor",
            "lightSources[0].focalStrength",
            "lightSources[0].specularIntensity",
        ]
    );
}

#[test]
fn should_enable_lighting_with_no_lights() {
    let mut sink = RecordingSink::new();
    assert_eq!(configure_lights(&mut sink, &[]), 0);
    assert_eq!(sink.names(), [names::USE_LIGHTING]);
}

#[test]
fn should_drop_lights_past_shader_capacity() {
    let lights: Vec<_> = (0..6).map(|i| light(i as f32)).collect();
    let mut state = ShaderState::new();

    assert_eq!(configure_lights(&mut state, &lights), MAX_LIGHTS);
    let frame = state.frame();
    for (index, block) in frame.lights.iter().enumerate() {
        assert_eq!(block.position, [index as f32, 1.0, 0.0]);
    }
}

#[test]
fn should_leave_unused_light_blocks_zeroed() {
    let mut state = ShaderState::new();
    configure_lights(&mut state, &scene_lights());

    let frame = state.frame();
    assert_eq!(frame.use_lighting, 1);
    for block in &frame.lights[2..] {
        assert_eq!(block.diffuse_color, [0.0; 3]);
        assert_eq!(block.focal_strength, 0.0);
    }
}

#[test]
fn should_light_scene_with_key_and_fill_lights() {
    let lights = scene_lights();
    assert_eq!(lights.len(), 2);

    let mut sink = RecordingSink::new();
    configure_lights(&mut sink, &lights);
    for (index, light) in lights.iter().enumerate() {
        assert_eq!(
            sink.last(&names::light_field(index, "position")),
            Some(UniformValue::Vec3(light.position))
        );
        assert_eq!(
            sink.last(&names::light_field(index, "focalStrength")),
            Some(UniformValue::Float(light.focal_strength))
        );
    }
}
