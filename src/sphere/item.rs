//! Items displayed on the sphere

use serde::{Deserialize, Serialize};

/// What an item shows inside its bubble
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemVisual {
    /// Image loaded through egui's image loaders (URL, `file://` or `bytes://` URI)
    Image { uri: String },
    /// Inline content: a short label drawn on a solid colour
    Glyph { label: String, color: [u8; 3] },
    /// Nothing supplied; rendered as a placeholder derived from the item id
    #[default]
    Missing,
}

/// One displayable entity placed on the sphere. Immutable once handed to the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereItem {
    pub id: String,
    #[serde(default)]
    pub visual: ItemVisual,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Live demo link
    #[serde(default)]
    pub live_link: Option<String>,
    /// Source code link
    #[serde(default)]
    pub source_link: Option<String>,
}

impl SphereItem {
    pub fn new(id: impl Into<String>, visual: ItemVisual) -> Self {
        Self {
            id: id.into(),
            visual,
            alt: String::new(),
            title: None,
            description: None,
            tech: Vec::new(),
            live_link: None,
            source_link: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_links(mut self, live: Option<String>, source: Option<String>) -> Self {
        self.live_link = live;
        self.source_link = source;
        self
    }

    /// Title for display, falling back to alt text and then the id
    pub fn display_title(&self) -> &str {
        match &self.title {
            Some(title) if !title.is_empty() => title,
            _ if !self.alt.is_empty() => &self.alt,
            _ => &self.id,
        }
    }

    /// Visual to draw. Missing payloads become a placeholder glyph so no
    /// position on the sphere is ever blank.
    pub fn resolved_visual(&self) -> ItemVisual {
        match &self.visual {
            ItemVisual::Missing => placeholder_visual(&self.id, self.display_title()),
            ItemVisual::Image { uri } if uri.trim().is_empty() => {
                placeholder_visual(&self.id, self.display_title())
            }
            other => other.clone(),
        }
    }
}

/// Deterministic placeholder: initials of `label` on a colour hashed from `id`
pub fn placeholder_visual(id: &str, label: &str) -> ItemVisual {
    // FNV-1a, stable across runs and platforms
    let mut hash: u32 = 0x811c_9dc5;
    for byte in id.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    let color = [
        96 + (hash & 0x7f) as u8,
        96 + ((hash >> 8) & 0x7f) as u8,
        96 + ((hash >> 16) & 0x7f) as u8,
    ];
    ItemVisual::Glyph {
        label: initials(label),
        color,
    }
}

/// Up to two uppercase initials taken from word starts, `"?"` for empty labels
pub fn initials(label: &str) -> String {
    let letters: String = label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_' || c == '.')
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}
