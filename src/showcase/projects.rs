//! Project catalogue shown in the showcase

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sphere::item::{initials, ItemVisual, SphereItem};

/// Fallback glyph colour for projects without one
const DEFAULT_COLOR: [u8; 3] = [124, 58, 237];

static BUNDLED_CATALOGUE: &str = include_str!("../../assets/projects.json");

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Source repository
    pub link: String,
    /// Live deployment
    #[serde(default)]
    pub web: Option<String>,
    /// Optional image URI; projects without one use their glyph
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

impl Project {
    /// Visual used on the sphere and in the grid
    pub fn visual(&self) -> ItemVisual {
        match &self.image {
            Some(uri) if !uri.trim().is_empty() => ItemVisual::Image { uri: uri.clone() },
            _ => ItemVisual::Glyph {
                label: initials(&self.name),
                color: self.color.unwrap_or(DEFAULT_COLOR),
            },
        }
    }
}

/// Parses a catalogue from JSON text
pub fn parse_catalogue(json: &str) -> Result<Vec<Project>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse project catalogue: {}", e))
}

/// Loads a catalogue from disk
pub fn load_catalogue(path: &Path) -> Result<Vec<Project>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_catalogue(&content)
}

/// The catalogue compiled into the binary
pub fn bundled_catalogue() -> Vec<Project> {
    match parse_catalogue(BUNDLED_CATALOGUE) {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}

/// Repeats the catalogue `repeat` times so the sphere looks full.
/// Ids are `"{name}-{index}"` over the repeated list.
pub fn sphere_items(projects: &[Project], repeat: usize) -> Vec<SphereItem> {
    projects
        .iter()
        .cycle()
        .take(projects.len() * repeat)
        .enumerate()
        .map(|(index, project)| {
            SphereItem::new(format!("{}-{}", project.name, index), project.visual())
                .with_alt(project.name.clone())
                .with_title(project.name.clone())
                .with_description(project.description.clone())
                .with_tech(project.tech.iter().cloned())
                .with_links(project.web.clone(), Some(project.link.clone()))
        })
        .collect()
}

/// First `len` characters, trimmed, with `...` appended when cut
pub fn short_description(description: &str, len: usize) -> String {
    if description.chars().count() <= len {
        return description.to_string();
    }
    let cut: String = description.chars().take(len).collect();
    format!("{}...", cut.trim())
}
