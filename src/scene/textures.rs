/// Image files of the scene and the tags objects refer to them by.
pub const SCENE_TEXTURES: [(&str, &str); 10] = [
    ("Eevee_playmat_texture.png", "playmat"),
    ("Wood_texture.jpg", "wood"),
    ("Pencil_cylinder_texture.png", "pencilCylinder"),
    ("Metal_grate_texture.jpg", "metal"),
    ("Plains_texture.png", "plains"),
    ("Plastic_texture.jpg", "plastic"),
    ("Lead_texture.jpg", "lead"),
    ("Layered_cards_texture.png", "deck"),
    ("Rubber_texture.jpg", "rubber"),
    ("Marble_texture.jpg", "marble"),
];
