//! Window icon loader
//!
//! The icon is optional: if it cannot be loaded the window opens without one.

use crate::utils::LauncherError;
use iced::window;
use image::GenericImageView;
use std::path::Path;
use tracing::warn;

/// Decode an image file into an RGBA window icon
pub fn decode_icon(path: &Path) -> Result<window::Icon, LauncherError> {
    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8();

    window::icon::from_rgba(rgba.into_raw(), width, height)
        .map_err(|e| LauncherError::RuntimeError(format!("invalid icon {:?}: {}", path, e)))
}

/// Load the window icon, returning `None` on any failure
pub fn load_icon(path: &Path) -> Option<window::Icon> {
    match decode_icon(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Failed to load window icon: {}", e);
            None
        }
    }
}
