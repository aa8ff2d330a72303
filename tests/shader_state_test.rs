use approx::assert_abs_diff_eq;
use cgmath::{Matrix4, SquareMatrix, vec2, vec3, vec4};
use tabletop_scene::shader::{ShaderSink, ShaderState, names};

#[test]
fn should_start_with_identity_matrices_and_texturing_off() {
    let state = ShaderState::new();
    let identity: [[f32; 4]; 4] = Matrix4::<f32>::identity().into();
    assert_eq!(state.object().model, identity);
    assert_eq!(state.frame().view, identity);
    assert_eq!(state.frame().projection, identity);
    assert_eq!(state.object().use_texture, 0);
    assert_eq!(state.texture_slot(), None);
}

#[test]
fn should_derive_normal_matrix_from_model() {
    let mut state = ShaderState::new();
    state.set_mat4(names::MODEL, Matrix4::from_nonuniform_scale(2.0, 4.0, 1.0));

    let normal = state.object().normal;
    assert_abs_diff_eq!(normal[0][0], 0.5);
    assert_abs_diff_eq!(normal[1][1], 0.25);
    assert_abs_diff_eq!(normal[2][2], 1.0);
}

#[test]
fn should_keep_identity_normals_for_degenerate_model() {
    let mut state = ShaderState::new();
    state.set_mat4(names::MODEL, Matrix4::from_nonuniform_scale(1.0, 0.0, 1.0));

    let identity: [[f32; 4]; 4] = Matrix4::<f32>::identity().into();
    assert_eq!(state.object().normal, identity);
}

#[test]
fn should_map_surface_uniforms_onto_object_block() {
    let mut state = ShaderState::new();
    state.set_vec4(names::OBJECT_COLOR, vec4(0.1, 0.2, 0.3, 0.4));
    state.set_vec2(names::UV_SCALE, vec2(5.0, 2.0));
    state.set_sampler_2d(names::OBJECT_TEXTURE, 3);
    state.set_bool(names::USE_TEXTURE, true);

    assert_eq!(state.object().object_color, [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(state.object().uv_scale, [5.0, 2.0]);
    assert_eq!(state.object().use_texture, 1);
    assert_eq!(state.texture_slot(), Some(3));
}

#[test]
fn should_hide_texture_slot_while_texturing_is_off() {
    let mut state = ShaderState::new();
    state.set_sampler_2d(names::OBJECT_TEXTURE, 2);
    state.set_bool(names::USE_TEXTURE, true);
    state.set_int(names::USE_TEXTURE, 0);

    assert_eq!(state.texture_slot(), None);
}

#[test]
fn should_map_frame_uniforms_and_light_fields() {
    let mut state = ShaderState::new();
    state.set_vec3(names::VIEW_POSITION, vec3(0.0, 5.0, 12.0));
    state.set_bool(names::USE_LIGHTING, true);
    state.set_vec3(&names::light_field(1, "position"), vec3(-3.0, 4.0, 6.0));
    state.set_float(&names::light_field(1, "focalStrength"), 32.0);

    let frame = state.frame();
    assert_eq!(frame.view_position, [0.0, 5.0, 12.0]);
    assert_eq!(frame.use_lighting, 1);
    assert_eq!(frame.lights[1].position, [-3.0, 4.0, 6.0]);
    assert_eq!(frame.lights[1].focal_strength, 32.0);
    assert_eq!(frame.lights[0].focal_strength, 0.0);
}

#[test]
fn should_ignore_unknown_names_and_mismatched_values() {
    let mut state = ShaderState::new();
    let before = state.clone();

    state.set_float("notAUniform", 1.0);
    state.set_float(names::MODEL, 1.0);
    state.set_vec3(&names::light_field(7, "position"), vec3(1.0, 1.0, 1.0));
    state.set_float(&names::light_field(0, "radius"), 1.0);

    assert_eq!(state.frame(), before.frame());
    assert_eq!(state.object(), before.object());
}

#[test]
fn should_round_trip_light_field_names() {
    let name = names::light_field(2, "diffuseColor");
    assert_eq!(name, "lightSources[2].diffuseColor");
    assert_eq!(names::parse_light_field(&name), Some((2, "diffuseColor")));
    assert_eq!(names::parse_light_field("lightSources[x].position"), None);
    assert_eq!(names::parse_light_field("material.shininess"), None);
}
