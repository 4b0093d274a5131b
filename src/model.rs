use crate::contrast::ContrastOverride;

/// One slide of an authored deck. Owned by the authoring session; the engine
/// only ever mutates it indirectly, through [`SlidePatch`] values emitted by
/// the editable bindings.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    /// Ordered body items; order maps to on-screen item order.
    pub content: Vec<String>,
    pub archetype_id: String,
    /// Per-slide color overrides, applied between the theme and any
    /// archetype-declared override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_overrides: Option<ContrastOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    /// Image description handed to the external media resolver, opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

impl Slide {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: Vec<String>,
        archetype_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            archetype_id: archetype_id.into(),
            theme_overrides: None,
            speaker_notes: None,
            image_prompt: None,
        }
    }
}

/// Edit emitted by an editable binding. Content updates always replace the
/// full ordered sequence, never a partial patch, to keep ordering
/// unambiguous for the persistence layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlidePatch {
    Title(String),
    Content(Vec<String>),
}

impl SlidePatch {
    /// Merge helper for persistence layers that hold the slide directly.
    pub fn apply(self, slide: &mut Slide) {
        match self {
            SlidePatch::Title(title) => slide.title = title,
            SlidePatch::Content(content) => slide.content = content,
        }
    }
}

/// Immutable per render; shared by every slide using it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fonts: FontSet,
    pub colors: ThemeColors,
    #[serde(default)]
    pub layout: LayoutTokens,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

/// Theme color tokens. Every field is optional: a theme missing a token must
/// degrade through the contrast resolver's neutral fallbacks, never fail.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// CSS-ish pattern string (data URI or gradient), opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_pattern: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutTokens {
    pub radius: String,
    pub border_width: String,
    pub shadow: String,
    pub heading_transform: String,
    pub heading_weight: String,
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self {
            radius: "8px".to_string(),
            border_width: "1px".to_string(),
            shadow: "none".to_string(),
            heading_transform: "none".to_string(),
            heading_weight: "600".to_string(),
        }
    }
}

impl Theme {
    /// Standard interface theme, used when the caller supplies nothing.
    pub fn system() -> Self {
        Self {
            id: "system".to_string(),
            name: "System UI".to_string(),
            description: "Standard Interface Theme".to_string(),
            fonts: FontSet {
                heading: "\"Space Grotesk\", sans-serif".to_string(),
                body: "\"DM Sans\", sans-serif".to_string(),
            },
            colors: ThemeColors {
                background: Some("#ffffff".to_string()),
                surface: Some("#ffffff".to_string()),
                text: Some("#18181b".to_string()),
                accent: Some("#18181b".to_string()),
                border: Some("#e4e4e7".to_string()),
                secondary: Some("#71717a".to_string()),
                background_pattern: None,
            },
            layout: LayoutTokens::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_json_roundtrip() {
        let mut slide = Slide::new(
            "s1",
            "Quarterly Review",
            vec!["Revenue up 12%".to_string(), "Churn flat".to_string()],
            "deck",
        );
        slide.speaker_notes = Some("Keep it brief".to_string());
        let s = serde_json::to_string(&slide).unwrap();
        let de: Slide = serde_json::from_str(&s).unwrap();
        assert_eq!(de.content, slide.content);
        assert_eq!(de.archetype_id, "deck");
    }

    #[test]
    fn content_patch_replaces_the_full_ordered_list() {
        let mut slide = Slide::new(
            "s1",
            "t",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            "deck",
        );
        SlidePatch::Content(vec!["a".to_string(), "B".to_string(), "c".to_string()])
            .apply(&mut slide);
        assert_eq!(slide.content, vec!["a", "B", "c"]);
    }

    #[test]
    fn theme_tolerates_missing_color_tokens() {
        let json = r##"{
            "id": "bare",
            "name": "Bare",
            "fonts": { "heading": "serif", "body": "sans-serif" },
            "colors": { "background": "#000000" }
        }"##;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert!(theme.colors.accent.is_none());
        assert_eq!(theme.layout.radius, "8px");
    }
}
