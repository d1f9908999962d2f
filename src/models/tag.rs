use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_COLOR: &str = "#8a8f98";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: String,
    pub color: String,
}

impl TagDefinition {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagDisplaySettings {
    pub show_tags: bool,
    pub max_visible: usize,
}

impl Default for TagDisplaySettings {
    fn default() -> Self {
        Self {
            show_tags: true,
            max_visible: 3,
        }
    }
}

/// Tags to render as `(name, color)` plus the number hidden behind the overflow badge.
pub fn visible_tags(
    tags: &[String],
    definitions: &[TagDefinition],
    settings: &TagDisplaySettings,
) -> (Vec<(String, String)>, usize) {
    if !settings.show_tags {
        return (Vec::new(), 0);
    }
    let shown: Vec<(String, String)> = tags
        .iter()
        .take(settings.max_visible)
        .map(|tag| {
            let color = definitions
                .iter()
                .find(|d| &d.name == tag)
                .map(|d| d.color.clone())
                .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());
            (tag.clone(), color)
        })
        .collect();
    let hidden = tags.len() - shown.len();
    (shown, hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_tags_fall_back_to_default_color() {
        let defs = vec![TagDefinition::new("bug", "#f00")];
        let (shown, hidden) = visible_tags(&tags(&["bug", "ui"]), &defs, &TagDisplaySettings::default());
        assert_eq!(shown, vec![
            ("bug".to_string(), "#f00".to_string()),
            ("ui".to_string(), DEFAULT_TAG_COLOR.to_string()),
        ]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn overflow_is_counted() {
        let settings = TagDisplaySettings { show_tags: true, max_visible: 2 };
        let (shown, hidden) = visible_tags(&tags(&["a", "b", "c", "d"]), &[], &settings);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn hidden_tags_render_nothing() {
        let settings = TagDisplaySettings { show_tags: false, max_visible: 3 };
        let (shown, hidden) = visible_tags(&tags(&["a"]), &[], &settings);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);
    }
}
