//! Loading and saving through a [`SpriteStore`]

use sprite_engine::{Project, Result};

use crate::SpriteStore;

use super::SpriteEditState;

impl SpriteEditState {
    /// Save the sprite table under `name`. Clears the dirty flag.
    pub fn save_project<S: SpriteStore>(&mut self, store: &mut S, name: &str) -> Result<i64> {
        let id = store.save_project(name, self.sprite_size, &self.sprites)?;
        self.last_loaded = Some((id, name.to_string()));
        self.mark_saved();
        Ok(id)
    }

    /// Replace the session with a stored project.
    pub fn load_project<S: SpriteStore>(&mut self, store: &S, id: i64) -> Result<()> {
        let project = store.load_project(id)?;
        let name = project.name.clone();
        self.open_project(project);
        self.last_loaded = Some((id, name));
        Ok(())
    }

    /// Replace the session with `project`, resetting buffers, undo and tool state.
    pub fn open_project(&mut self, project: Project) {
        self.reset(project.sprite_size);
        self.sprites = project.into_sprites();
    }

    /// Project id and name of the last load or save.
    pub fn last_loaded(&self) -> Option<(i64, &str)> {
        self.last_loaded.as_ref().map(|(id, name)| (*id, name.as_str()))
    }

    /// True when sprites changed since the last save or load.
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }
}
