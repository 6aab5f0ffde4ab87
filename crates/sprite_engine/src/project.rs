use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Sprite, SpriteSize};

/// Summary row returned when listing stored projects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: i64,
    pub name: String,
    pub sprite_size: SpriteSize,
    pub created_at: DateTime<Utc>,
}

/// A full sprite table: always `sprite_size.sprite_count()` sprites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub sprite_size: SpriteSize,
    pub created_at: DateTime<Utc>,
    sprites: Vec<Sprite>,
}

impl Project {
    /// Fresh project with empty sprites in the default colour.
    pub fn new(name: impl Into<String>, sprite_size: SpriteSize) -> Self {
        Self {
            name: name.into(),
            sprite_size,
            created_at: Utc::now(),
            sprites: empty_sprites(sprite_size),
        }
    }

    /// Build a project from stored sprites, normalising the count.
    pub fn from_sprites(name: impl Into<String>, sprite_size: SpriteSize, created_at: DateTime<Utc>, sprites: Vec<Sprite>) -> Self {
        Self {
            name: name.into(),
            sprite_size,
            created_at,
            sprites: normalize_sprites(sprite_size, sprites),
        }
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn into_sprites(self) -> Vec<Sprite> {
        self.sprites
    }
}

pub fn empty_sprites(sprite_size: SpriteSize) -> Vec<Sprite> {
    vec![Sprite::empty(sprite_size); sprite_size.sprite_count()]
}

/// Pad with empty sprites or truncate to the count implied by the size.
///
/// Sprites of the wrong size are replaced by empty ones.
pub fn normalize_sprites(sprite_size: SpriteSize, mut sprites: Vec<Sprite>) -> Vec<Sprite> {
    let expected = sprite_size.sprite_count();
    if sprites.len() != expected {
        log::warn!("Normalising sprite table from {} to {expected} sprites", sprites.len());
    }
    sprites.truncate(expected);
    for sprite in &mut sprites {
        if sprite.size() != sprite_size {
            log::warn!("Replacing {} sprite in {sprite_size} project", sprite.size());
            *sprite = Sprite::empty(sprite_size);
        }
    }
    sprites.resize(expected, Sprite::empty(sprite_size));
    sprites
}
