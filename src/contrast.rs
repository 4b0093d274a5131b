use crate::model::Theme;

/// Neutral fallbacks used when a color is absent from both the theme and
/// every override. Rendering degrades to these; it never fails.
pub const FALLBACK_TEXT_ON_LIGHT: &str = "#111111";
pub const FALLBACK_TEXT_ON_DARK: &str = "#ffffff";
pub const FALLBACK_BACKGROUND: &str = "#ffffff";
pub const FALLBACK_SECONDARY_ON_LIGHT: &str = "#52525b";
pub const FALLBACK_SECONDARY_ON_DARK: &str = "#a1a1aa";
pub const FALLBACK_BORDER_ON_LIGHT: &str = "#d4d4d8";
pub const FALLBACK_BORDER_ON_DARK: &str = "#3f3f46";

/// WCAG relative-luminance threshold for choosing dark text over light.
const LUMINANCE_THRESHOLD: f64 = 0.179;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    Light,
    Dark,
}

/// Resolved palette for one archetype instance. Every field is always
/// present: theme value, override, or neutral fallback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contrast {
    pub text: String,
    pub background: String,
    pub secondary: String,
    pub accent: String,
    pub border: String,
    pub mode: ContrastMode,
}

/// Partial palette override. Applied field-by-field, never wholesale: an
/// archetype that pins its title to white leaves every other token to the
/// theme.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContrastOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ContrastMode>,
}

impl ContrastOverride {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Contrast {
    /// Derives the palette from the theme plus optional per-slide and
    /// archetype-declared overrides. Precedence per field:
    /// archetype override > slide override > theme > neutral fallback.
    pub fn resolve(
        theme: &Theme,
        slide_overrides: Option<&ContrastOverride>,
        archetype_override: Option<&ContrastOverride>,
    ) -> Self {
        let field = |arch: fn(&ContrastOverride) -> Option<&String>,
                     theme_value: Option<&String>|
         -> Option<String> {
            archetype_override
                .and_then(arch)
                .or_else(|| slide_overrides.and_then(arch))
                .or(theme_value)
                .cloned()
        };

        let background = field(|o| o.background.as_ref(), theme.colors.background.as_ref())
            .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string());

        let mode = archetype_override
            .and_then(|o| o.mode)
            .or_else(|| slide_overrides.and_then(|o| o.mode))
            .unwrap_or_else(|| infer_mode(&background));

        let text = field(|o| o.text.as_ref(), theme.colors.text.as_ref())
            .unwrap_or_else(|| neutral_text(mode).to_string());

        let secondary = field(|o| o.secondary.as_ref(), theme.colors.secondary.as_ref())
            .unwrap_or_else(|| {
                tracing::debug!(mode = ?mode, "theme missing secondary color, using neutral");
                match mode {
                    ContrastMode::Light => FALLBACK_SECONDARY_ON_LIGHT.to_string(),
                    ContrastMode::Dark => FALLBACK_SECONDARY_ON_DARK.to_string(),
                }
            });

        // A theme with no accent gets the resolved text color: visually flat
        // but always legible.
        let accent = field(|o| o.accent.as_ref(), theme.colors.accent.as_ref())
            .unwrap_or_else(|| {
                tracing::debug!(mode = ?mode, "theme missing accent color, using text color");
                text.clone()
            });

        let border = field(|o| o.border.as_ref(), theme.colors.border.as_ref())
            .unwrap_or_else(|| match mode {
                ContrastMode::Light => FALLBACK_BORDER_ON_LIGHT.to_string(),
                ContrastMode::Dark => FALLBACK_BORDER_ON_DARK.to_string(),
            });

        Self {
            text,
            background,
            secondary,
            accent,
            border,
            mode,
        }
    }
}

fn neutral_text(mode: ContrastMode) -> &'static str {
    match mode {
        ContrastMode::Light => FALLBACK_TEXT_ON_LIGHT,
        ContrastMode::Dark => FALLBACK_TEXT_ON_DARK,
    }
}

/// Light when the background is bright enough to carry dark text. Colors the
/// parser cannot read (gradients, patterns) are treated as light.
fn infer_mode(background: &str) -> ContrastMode {
    match relative_luminance(background) {
        Some(l) if l <= LUMINANCE_THRESHOLD => ContrastMode::Dark,
        _ => ContrastMode::Light,
    }
}

/// WCAG relative luminance of a `#rgb` / `#rrggbb` color.
fn relative_luminance(color: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(color)?;
    let lin = |c: f64| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b))
}

fn parse_hex(color: &str) -> Option<(f64, f64, f64)> {
    let hex = color.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| f64::from(v) / 255.0);
    match hex.len() {
        3 => {
            let mut it = hex.chars();
            let (r, g, b) = (it.next()?, it.next()?, it.next()?);
            Some((
                channel(&format!("{r}{r}"))?,
                channel(&format!("{g}{g}"))?,
                channel(&format!("{b}{b}"))?,
            ))
        }
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontSet, LayoutTokens, Theme, ThemeColors};

    fn bare_theme(background: Option<&str>) -> Theme {
        Theme {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            description: String::new(),
            fonts: FontSet {
                heading: "serif".to_string(),
                body: "sans-serif".to_string(),
            },
            colors: ThemeColors {
                background: background.map(str::to_string),
                ..ThemeColors::default()
            },
            layout: LayoutTokens::default(),
        }
    }

    #[test]
    fn every_field_is_always_present() {
        let c = Contrast::resolve(&bare_theme(None), None, None);
        for field in [&c.text, &c.background, &c.secondary, &c.accent, &c.border] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn mode_is_inferred_from_background_luminance() {
        let light = Contrast::resolve(&bare_theme(Some("#ffffff")), None, None);
        assert_eq!(light.mode, ContrastMode::Light);
        assert_eq!(light.text, FALLBACK_TEXT_ON_LIGHT);

        let dark = Contrast::resolve(&bare_theme(Some("#050505")), None, None);
        assert_eq!(dark.mode, ContrastMode::Dark);
        assert_eq!(dark.text, FALLBACK_TEXT_ON_DARK);
    }

    #[test]
    fn unparseable_background_degrades_to_light() {
        let c = Contrast::resolve(
            &bare_theme(Some("linear-gradient(135deg, #000, #fff)")),
            None,
            None,
        );
        assert_eq!(c.mode, ContrastMode::Light);
    }

    #[test]
    fn missing_accent_falls_back_to_text() {
        let theme = Theme::system();
        let mut bare = theme.clone();
        bare.colors.accent = None;
        let c = Contrast::resolve(&bare, None, None);
        assert_eq!(c.accent, c.text);
    }

    #[test]
    fn override_wins_field_by_field_not_wholesale() {
        let theme = Theme::system();
        let ov = ContrastOverride::text("#ffffff");
        let c = Contrast::resolve(&theme, None, Some(&ov));
        assert_eq!(c.text, "#ffffff");
        assert_eq!(c.background, "#ffffff"); // still the theme's
        assert_eq!(c.border, "#e4e4e7");
    }

    #[test]
    fn archetype_override_beats_slide_override() {
        let theme = Theme::system();
        let slide = ContrastOverride::text("#ff0000");
        let arch = ContrastOverride::text("#00ff00");
        let c = Contrast::resolve(&theme, Some(&slide), Some(&arch));
        assert_eq!(c.text, "#00ff00");
    }

    #[test]
    fn slide_override_beats_theme() {
        let theme = Theme::system();
        let slide = ContrastOverride {
            accent: Some("#123456".to_string()),
            ..ContrastOverride::default()
        };
        let c = Contrast::resolve(&theme, Some(&slide), None);
        assert_eq!(c.accent, "#123456");
    }

    #[test]
    fn shorthand_hex_parses() {
        assert_eq!(parse_hex("#fff"), parse_hex("#ffffff"));
    }
}
