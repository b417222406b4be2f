//! Game configuration resource.
//!
//! Settings loaded from an INI file. Defaults allow the game to start without
//! any configuration file. Gameplay timings and speeds are fixed and live in
//! [`crate::consts`].
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! scale = 1.0
//! target_fps = 60
//! vsync = true
//!
//! [assets]
//! path = ./resources
//!
//! [audio]
//! volume = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::consts::TARGET_FPS;

const DEFAULT_SCALE: f32 = 1.0;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_VOLUME: f32 = 1.0;
const DEFAULT_ASSETS_PATH: &str = "./resources";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window scale factor applied to the fixed 640x900 play field.
    pub scale: f32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Directory holding `images/`, `sounds/` and `fonts/`.
    pub assets_path: PathBuf,
    /// Master volume in `[0, 1]`.
    pub volume: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            target_fps: TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            assets_path: PathBuf::from(DEFAULT_ASSETS_PATH),
            volume: DEFAULT_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Out-of-range values are
    /// clamped. Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(scale) = config.getfloat("window", "scale").ok().flatten() {
            self.scale = (scale as f32).clamp(0.25, 4.0);
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = (fps as u32).max(1);
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "path") {
            self.assets_path = PathBuf::from(path);
        }

        // [audio] section
        if let Some(volume) = config.getfloat("audio", "volume").ok().flatten() {
            self.volume = (volume as f32).clamp(0.0, 1.0);
        }

        info!(
            "Loaded config: scale={}, fps={}, vsync={}, assets={:?}, volume={}",
            self.scale, self.target_fps, self.vsync, self.assets_path, self.volume
        );

        Ok(())
    }

    /// Window size in pixels for the fixed play field at the configured scale.
    pub fn window_size(&self, field_width: f32, field_height: f32) -> (i32, i32) {
        (
            (field_width * self.scale).round() as i32,
            (field_height * self.scale).round() as i32,
        )
    }

    /// Full path of an asset relative to the assets directory.
    pub fn asset(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.assets_path.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("redlight-{}-{}.ini", name, std::process::id()));
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/redlight.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn loads_and_clamps_values() {
        let path = write_temp(
            "load",
            "[window]\nscale = 9.0\ntarget_fps = 30\nvsync = false\n\n[assets]\npath = /opt/redlight\n\n[audio]\nvolume = 0.5\n",
        );
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("config loads");
        assert_eq!(config.scale, 4.0);
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
        assert_eq!(config.assets_path, PathBuf::from("/opt/redlight"));
        assert_eq!(config.volume, 0.5);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = write_temp("partial", "[audio]\nvolume = 0.25\n");
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("config loads");
        assert_eq!(config.volume, 0.25);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.asset("images/rod.png"), PathBuf::from("./resources/images/rod.png"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn window_size_scales_the_field() {
        let mut config = GameConfig::new();
        config.scale = 0.5;
        assert_eq!(config.window_size(640.0, 900.0), (320, 450));
    }
}
