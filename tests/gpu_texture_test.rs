#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
use tabletop_scene::data_structures::texture::{DecodedImage, PixelLayout};

#[cfg(feature = "integration-tests")]
fn checker(layout: PixelLayout) -> DecodedImage {
    let channels = layout.channel_count() as usize;
    DecodedImage {
        pixels: (0..4 * 4 * channels).map(|i| (i * 7 % 256) as u8).collect(),
        width: 4,
        height: 4,
        layout,
    }
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_fill_texture_slots_in_load_order() {
    use tabletop_scene::resources::texture::{TextureRegistry, texture_bind_group_layout};

    let (device, queue) = common::test_utils::headless_device();
    let mut registry = TextureRegistry::new();

    let wood = registry
        .load_decoded(&device, &queue, &checker(PixelLayout::Rgb), "wood")
        .expect("first slot is free");
    let marble = registry
        .load_decoded(&device, &queue, &checker(PixelLayout::Rgba), "marble")
        .expect("second slot is free");

    assert_eq!((wood, marble), (0, 1));
    assert_eq!(registry.find_slot("marble"), Some(1));
    assert_eq!(registry.tag(0), Some("wood"));
    assert_eq!(
        registry.find_handle("wood").and_then(|texture| texture.layout),
        Some(PixelLayout::Rgb)
    );
    assert_eq!(
        registry.find_handle("marble").and_then(|texture| texture.layout),
        Some(PixelLayout::Rgba)
    );

    assert!(registry.bind_group(0).is_none());
    let layout = texture_bind_group_layout(&device);
    registry.bind_all(&device, &layout);
    assert!(registry.bind_group(1).is_some());
    assert!(registry.bind_group(2).is_none());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_reject_textures_past_the_last_slot() {
    use tabletop_scene::{
        data_structures::{
            registry::RegistryError,
            texture::TextureError,
        },
        resources::texture::{MAX_TEXTURE_SLOTS, TextureRegistry},
    };

    let (device, queue) = common::test_utils::headless_device();
    let mut registry = TextureRegistry::new();
    let img = checker(PixelLayout::Rgba);
    for i in 0..MAX_TEXTURE_SLOTS {
        registry
            .load_decoded(&device, &queue, &img, &format!("texture{i}"))
            .expect("slot is free");
    }

    let err = registry
        .load_decoded(&device, &queue, &img, "one too many")
        .expect_err("registry is full");
    assert!(matches!(
        err,
        TextureError::Registry(RegistryError::Full { capacity: MAX_TEXTURE_SLOTS, .. })
    ));
    assert_eq!(registry.len(), MAX_TEXTURE_SLOTS);
    assert_eq!(registry.find_slot("one too many"), None);

    // a full registry rejects before touching the file system
    let err = registry
        .load(&device, &queue, std::path::Path::new("does/not/exist.png"), "missing")
        .expect_err("registry is full");
    assert!(matches!(err, TextureError::Registry(_)));
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_release_every_texture() {
    use tabletop_scene::resources::texture::TextureRegistry;

    let (device, queue) = common::test_utils::headless_device();
    let mut registry = TextureRegistry::new();
    registry
        .load_decoded(&device, &queue, &checker(PixelLayout::Rgb), "plains")
        .expect("slot is free");

    registry.release_all();

    assert!(registry.is_empty());
    assert_eq!(registry.find_slot("plains"), None);
    // releasing twice is harmless
    registry.release_all();
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_grow_object_buffer_for_the_whole_scene() {
    use tabletop_scene::{SceneManager, data_structures::texture::Texture, render::Renderer};

    let (device, queue) = common::test_utils::headless_device();
    let mut renderer = Renderer::new(&device, &queue, Texture::COLOR_FORMAT);
    let mut scene = SceneManager::new("does/not/exist");
    scene.prepare(&device, &queue, renderer.texture_layout());
    assert!(scene.textures().is_empty());

    let frame = *scene.shader().frame();
    let draws = scene.render().clone();
    renderer.upload(&device, &queue, &frame, &draws);
    assert!(renderer.object_capacity() >= draws.len());

    let mut many = draws.clone();
    for i in 0..40 {
        many.push(*draws.get(i % draws.len()).expect("scene records draws"));
    }
    renderer.upload(&device, &queue, &frame, &many);
    assert_eq!(renderer.object_capacity(), many.len().next_power_of_two());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_leave_no_entry_for_grayscale_image() {
    use tabletop_scene::{
        data_structures::texture::TextureError, resources::texture::TextureRegistry,
    };

    let path = std::env::temp_dir().join(format!(
        "tabletop-scene-{}-registry-gray.png",
        std::process::id()
    ));
    image::GrayImage::from_pixel(4, 4, image::Luma([128]))
        .save(&path)
        .expect("temp image is writable");

    let (device, queue) = common::test_utils::headless_device();
    let mut registry = TextureRegistry::new();
    registry
        .load_decoded(&device, &queue, &checker(PixelLayout::Rgb), "wood")
        .expect("first slot is free");

    let result = registry.load(&device, &queue, &path, "gray");
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(TextureError::UnsupportedChannelCount(1))));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_slot("gray"), None);
    assert_eq!(registry.find_slot("wood"), Some(0));
}
