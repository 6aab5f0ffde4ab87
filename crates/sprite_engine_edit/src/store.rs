//! Durable project and brush storage
//!
//! `FileStore` keeps three relational tables (`projects`, `sprites`,
//! `brushes`) with auto-increment ids and serialises them as one TOML
//! document. Bitmaps and masks are stored base64 encoded in their packed
//! binary layout. A mutation is applied to a copy of the tables and committed
//! by writing a temporary file that is renamed over the database, so a
//! project replace is all or nothing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sprite_engine::{Brush, EngineError, Project, ProjectInfo, Result, Sprite, SpriteSize, codec, validate_mask};

/// Persistence boundary of the editor.
pub trait SpriteStore {
    /// Save all sprites under `name`, replacing the sprite set of an existing project.
    fn save_project(&mut self, name: &str, sprite_size: SpriteSize, sprites: &[Sprite]) -> Result<i64>;

    /// Newest first, ties ordered by name.
    fn list_projects(&self) -> Result<Vec<ProjectInfo>>;

    /// Load a project with its sprite count normalised to the size.
    fn load_project(&self, id: i64) -> Result<Project>;

    fn project_id_by_name(&self, name: &str) -> Result<Option<i64>>;

    /// Sprite #0 of a project for thumbnails, `None` if the project is missing.
    fn load_first_sprite(&self, id: i64) -> Result<Option<Sprite>>;

    /// Store a brush. Names are unique, an existing name fails with `DuplicateName`.
    fn save_brush(&mut self, name: &str, width: u8, height: u8, rows: &[u8], user_defined: bool) -> Result<i64>;

    /// Built-in brushes first, then by name.
    fn list_brushes(&self) -> Result<Vec<Brush>>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ProjectRow {
    id: i64,
    name: String,
    sprite_size: SpriteSize,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SpriteRow {
    project_id: i64,
    sprite_index: u32,
    color_index: u8,
    bitmap: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct BrushRow {
    id: i64,
    name: String,
    width: u8,
    height: u8,
    mask: String,
    created_at: DateTime<Utc>,
    user_defined: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Tables {
    #[serde(default)]
    next_project_id: i64,
    #[serde(default)]
    next_brush_id: i64,
    #[serde(default)]
    projects: Vec<ProjectRow>,
    #[serde(default)]
    sprites: Vec<SpriteRow>,
    #[serde(default)]
    brushes: Vec<BrushRow>,
}

impl Tables {
    fn allocate_project_id(&mut self) -> i64 {
        self.next_project_id = self.next_project_id.max(self.projects.iter().map(|p| p.id).max().unwrap_or(0)) + 1;
        self.next_project_id
    }

    fn allocate_brush_id(&mut self) -> i64 {
        self.next_brush_id = self.next_brush_id.max(self.brushes.iter().map(|b| b.id).max().unwrap_or(0)) + 1;
        self.next_brush_id
    }

    fn project(&self, id: i64) -> Option<&ProjectRow> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn insert_brush(&mut self, brush: &Brush) -> Result<i64> {
        if self.brushes.iter().any(|b| b.name == brush.name) {
            return Err(EngineError::duplicate_name(&brush.name));
        }
        let id = self.allocate_brush_id();
        self.brushes.push(BrushRow {
            id,
            name: brush.name.clone(),
            width: brush.width(),
            height: brush.height(),
            mask: codec::encode_blob(&codec::pack_brush(brush)),
            created_at: Utc::now(),
            user_defined: brush.user_defined,
        });
        Ok(id)
    }
}

/// TOML backed relational store.
pub struct FileStore {
    path: Option<PathBuf>,
    tables: Tables,
}

impl FileStore {
    /// Open or create the database file and seed the built-in brushes.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tables = if path.exists() {
            let text = fs::read_to_string(&path)?;
            toml::from_str(&text)?
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            Tables::default()
        };
        let mut store = Self { path: Some(path), tables };
        store.seed_brushes()?;
        Ok(store)
    }

    /// Store that never touches the disk.
    pub fn in_memory() -> Self {
        let mut tables = Tables::default();
        for brush in Brush::predefined() {
            if let Err(err) = tables.insert_brush(&brush) {
                log::error!("Can't seed brush '{}': {err}", brush.name);
            }
        }
        Self { path: None, tables }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn seed_brushes(&mut self) -> Result<()> {
        if !self.tables.brushes.is_empty() {
            return Ok(());
        }
        let mut tables = self.tables.clone();
        for brush in Brush::predefined() {
            tables.insert_brush(&brush)?;
        }
        log::info!("Seeded {} predefined brushes", tables.brushes.len());
        self.commit(tables)
    }

    fn commit(&mut self, tables: Tables) -> Result<()> {
        if let Some(path) = &self.path {
            let text = toml::to_string_pretty(&tables)?;
            let tmp = path.with_extension("tmp");
            fs::write(&tmp, text)?;
            fs::rename(&tmp, path)?;
        }
        self.tables = tables;
        Ok(())
    }

    fn decode_sprite(size: SpriteSize, row: &SpriteRow) -> Result<Sprite> {
        let data = codec::decode_blob(&row.bitmap)?;
        codec::unpack_sprite(size, row.color_index, &data)
    }
}

impl SpriteStore for FileStore {
    fn save_project(&mut self, name: &str, sprite_size: SpriteSize, sprites: &[Sprite]) -> Result<i64> {
        let mut rows = Vec::with_capacity(sprites.len());
        for (index, sprite) in sprites.iter().enumerate() {
            if sprite.size() != sprite_size {
                return Err(EngineError::invalid_shape(format!(
                    "sprite #{index} is {} in a {sprite_size} project",
                    sprite.size()
                )));
            }
            rows.push((index as u32, sprite.color_index(), codec::encode_blob(&codec::pack_sprite(sprite)?)));
        }

        let mut tables = self.tables.clone();
        let created_at = Utc::now();
        let project_id = if let Some(project) = tables.projects.iter_mut().find(|p| p.name == name) {
            project.sprite_size = sprite_size;
            project.created_at = created_at;
            project.id
        } else {
            let id = tables.allocate_project_id();
            tables.projects.push(ProjectRow {
                id,
                name: name.to_string(),
                sprite_size,
                created_at,
            });
            id
        };
        tables.sprites.retain(|s| s.project_id != project_id);
        tables.sprites.extend(rows.into_iter().map(|(sprite_index, color_index, bitmap)| SpriteRow {
            project_id,
            sprite_index,
            color_index,
            bitmap,
        }));
        self.commit(tables)?;
        log::info!("Saved project '{name}' ({sprite_size}, {} sprites) as #{project_id}", sprites.len());
        Ok(project_id)
    }

    fn list_projects(&self) -> Result<Vec<ProjectInfo>> {
        let mut projects: Vec<ProjectInfo> = self
            .tables
            .projects
            .iter()
            .map(|p| ProjectInfo {
                id: p.id,
                name: p.name.clone(),
                sprite_size: p.sprite_size,
                created_at: p.created_at,
            })
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(projects)
    }

    fn load_project(&self, id: i64) -> Result<Project> {
        let project = self.tables.project(id).ok_or(EngineError::NotFound { id })?;
        let mut rows: Vec<&SpriteRow> = self.tables.sprites.iter().filter(|s| s.project_id == id).collect();
        rows.sort_by_key(|s| s.sprite_index);
        let sprites = rows
            .into_iter()
            .map(|row| Self::decode_sprite(project.sprite_size, row))
            .collect::<Result<Vec<_>>>()?;
        log::info!("Loaded project '{}' with {} stored sprites", project.name, sprites.len());
        Ok(Project::from_sprites(project.name.clone(), project.sprite_size, project.created_at, sprites))
    }

    fn project_id_by_name(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.tables.projects.iter().find(|p| p.name == name).map(|p| p.id))
    }

    fn load_first_sprite(&self, id: i64) -> Result<Option<Sprite>> {
        let Some(project) = self.tables.project(id) else {
            return Ok(None);
        };
        match self.tables.sprites.iter().find(|s| s.project_id == id && s.sprite_index == 0) {
            Some(row) => Self::decode_sprite(project.sprite_size, row).map(Some),
            None => Ok(Some(Sprite::empty(project.sprite_size))),
        }
    }

    fn save_brush(&mut self, name: &str, width: u8, height: u8, rows: &[u8], user_defined: bool) -> Result<i64> {
        validate_mask(width, height, rows)?;
        let mut brush = Brush::new(name, width, height, rows.to_vec())?;
        brush.user_defined = user_defined;
        let mut tables = self.tables.clone();
        let id = tables.insert_brush(&brush)?;
        self.commit(tables)?;
        log::info!("Saved brush '{name}' ({width}x{height}) as #{id}");
        Ok(id)
    }

    fn list_brushes(&self) -> Result<Vec<Brush>> {
        let mut rows: Vec<&BrushRow> = self.tables.brushes.iter().collect();
        rows.sort_by(|a, b| a.user_defined.cmp(&b.user_defined).then_with(|| a.name.cmp(&b.name)));
        rows.into_iter()
            .map(|row| -> Result<Brush> {
                let data = codec::decode_blob(&row.mask)?;
                let mut brush = codec::unpack_brush(row.name.clone(), row.width, row.height, &data)?;
                brush.id = Some(row.id);
                brush.user_defined = row.user_defined;
                Ok(brush)
            })
            .collect()
    }
}
