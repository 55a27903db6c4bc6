// Web front-end wiring: element ids, asset locations and surface settings.

// DOM
pub const CONTAINER_ID: &str = "sceneContainer";
pub const BUTTON_PREVIOUS_ID: &str = "left";
pub const BUTTON_TOGGLE_ID: &str = "play";
pub const BUTTON_NEXT_ID: &str = "right";

// Assets, relative to the hosting page
pub const MODEL_URL: &str = "./public/model/littleB.glb";
pub const PHOTOS_DIR: &str = "./public/photos/";

// Surface
pub const MSAA_SAMPLES: u32 = 4; // antialiased output

#[inline]
pub fn photo_url(file_name: &str) -> String {
    format!("{PHOTOS_DIR}{file_name}")
}
