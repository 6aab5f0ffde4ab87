use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use sprite_engine::{EraserShape, Result, SpriteSize};

use crate::ShiftMode;

const DEFAULT_DB_FILE: &str = "sprites.toml";

/// Persisted editor preferences (`options.toml` in the config directory).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Database file of the project and brush store
    pub database_path: PathBuf,
    pub sprite_size: SpriteSize,
    pub shift_mode: ShiftMode,
    pub eraser_shape: EraserShape,
    pub eraser_size: u8,
    /// Screen pixels per sprite pixel in the editor grid
    pub editor_scale: u32,
    pub thumbnail_scale: u32,
    pub preview_scale: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        let database_path = directories::ProjectDirs::from("com", "GitHub", "sprite_editor")
            .map_or_else(|| PathBuf::from(DEFAULT_DB_FILE), |dirs| dirs.data_dir().join(DEFAULT_DB_FILE));
        Self {
            database_path,
            sprite_size: SpriteSize::Size8,
            shift_mode: ShiftMode::Wrap,
            eraser_shape: EraserShape::Square,
            eraser_size: 1,
            editor_scale: 16,
            thumbnail_scale: 2,
            preview_scale: 2,
        }
    }
}

impl EditorOptions {
    fn options_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "sprite_editor").map(|dirs| dirs.config_dir().join("options.toml"))
    }

    /// Load from the config directory, falling back to defaults on any error.
    pub fn load_options() -> Self {
        let Some(options_file) = Self::options_file() else {
            return Self::default();
        };
        if !options_file.exists() {
            return Self::default();
        }
        match Self::load_from(&options_file) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error reading options file {}: {err}", options_file.display());
                Self::default()
            }
        }
    }

    pub fn store_options(&self) {
        let Some(options_file) = Self::options_file() else {
            log::error!("Can't resolve configuration directory");
            return;
        };
        if let Err(err) = self.store_to(&options_file) {
            log::error!("Error writing options file: {err}");
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn store_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
