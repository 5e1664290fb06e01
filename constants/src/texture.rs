/// Scene manifest location, relative to the asset root.
pub const SCENE_MANIFEST_PATH: &str = "scene/scene.json";

pub const GROUND_TEXTURE_PATH: &str = "images/map1r.png";
pub const SKY_TEXTURE_PATH: &str = "images/sky_box.png";
pub const GATE_ICON_PATH: &str = "images/door.png";
pub const KINDERGARTEN_ICON_PATH: &str = "images/editor.png";
pub const COMPASS_ICON_PATH: &str = "images/compass.png";
