use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::{
    context::RenderContext,
    contrast::ContrastOverride,
    error::{DeckforgeError, DeckforgeResult},
    layer::LayerBand,
    style::{DecorationShape, MediaPosition, Style},
};

/// A value that is either declared statically or computed per render from
/// the context (enabling seed-driven variation such as "flip the layout 50%
/// of the time"). Dynamic resolvers are fallible; the factory substitutes
/// the declared default when one fails.
#[derive(Clone)]
pub enum DynamicValue<T> {
    Static(T),
    Dynamic(Arc<dyn Fn(&RenderContext) -> DeckforgeResult<T> + Send + Sync>),
}

impl<T: Clone> DynamicValue<T> {
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&RenderContext) -> DeckforgeResult<T> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    pub fn resolve(&self, ctx: &RenderContext) -> DeckforgeResult<T> {
        match self {
            Self::Static(v) => Ok(v.clone()),
            Self::Dynamic(f) => f(ctx),
        }
    }
}

impl<T> From<T> for DynamicValue<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl From<&str> for DynamicValue<String> {
    fn from(value: &str) -> Self {
        Self::Static(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(<resolver>)"),
        }
    }
}

/// What a named region renders. Title and Body are the editable surfaces;
/// Media reserves a band for the external media resolver; Notes exposes a
/// read-only speaker-notes excerpt.
#[derive(Clone, Debug)]
pub enum RegionKind {
    Title,
    Body { bullets: bool },
    Media { position: MediaPosition },
    Notes,
}

#[derive(Clone, Debug)]
pub struct RegionSpec {
    pub name: String,
    pub kind: RegionKind,
    pub band: LayerBand,
    pub style: DynamicValue<Style>,
    /// Baseline attributes. Resolver output merges over this field by
    /// field; when the resolver fails it stands in wholesale, so the slide
    /// still renders.
    pub fallback: Style,
}

#[derive(Clone, Debug)]
pub struct DecorationSpec {
    pub name: String,
    pub band: LayerBand,
    pub shape: DynamicValue<DecorationShape>,
    pub style: DynamicValue<Style>,
    /// Substituted when the shape resolver fails; `None` skips the
    /// decoration instead.
    pub fallback_shape: Option<DecorationShape>,
}

/// Extra per-render value surfaced verbatim on the composition (volume
/// numbers, stamp text, coordinates).
#[derive(Clone)]
pub struct DynamicRule(Arc<dyn Fn(&RenderContext) -> serde_json::Value + Send + Sync>);

impl DynamicRule {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&RenderContext) -> serde_json::Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn eval(&self, ctx: &RenderContext) -> serde_json::Value {
        (self.0)(ctx)
    }
}

impl fmt::Debug for DynamicRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicRule(<rule>)")
    }
}

/// Archetype category, for browsing and search. Order here is the fixed
/// catalog order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Corporate,
    Editorial,
    WabiSabi,
    Natural,
    Cultural,
    Tech,
    Cinematic,
    DesignMovements,
    CulturalHeritage,
    HistoricalPeriod,
    ArtisanalCraft,
    Atmospheric,
    TypographyPrint,
    ContemporaryArt,
    FutureSpeculative,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Corporate,
        Category::Editorial,
        Category::WabiSabi,
        Category::Natural,
        Category::Cultural,
        Category::Tech,
        Category::Cinematic,
        Category::DesignMovements,
        Category::CulturalHeritage,
        Category::HistoricalPeriod,
        Category::ArtisanalCraft,
        Category::Atmospheric,
        Category::TypographyPrint,
        Category::ContemporaryArt,
        Category::FutureSpeculative,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Corporate => "corporate",
            Category::Editorial => "editorial",
            Category::WabiSabi => "wabi-sabi",
            Category::Natural => "natural",
            Category::Cultural => "cultural",
            Category::Tech => "tech",
            Category::Cinematic => "cinematic",
            Category::DesignMovements => "design-movements",
            Category::CulturalHeritage => "cultural-heritage",
            Category::HistoricalPeriod => "historical-period",
            Category::ArtisanalCraft => "artisanal-craft",
            Category::Atmospheric => "atmospheric",
            Category::TypographyPrint => "typography-print",
            Category::ContemporaryArt => "contemporary-art",
            Category::FutureSpeculative => "future-speculative",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Corporate => "Corporate",
            Category::Editorial => "Editorial",
            Category::WabiSabi => "Wabi-Sabi",
            Category::Natural => "Natural",
            Category::Cultural => "Cultural",
            Category::Tech => "Tech",
            Category::Cinematic => "Cinematic",
            Category::DesignMovements => "Design Movements",
            Category::CulturalHeritage => "Cultural Heritage",
            Category::HistoricalPeriod => "Historical Periods",
            Category::ArtisanalCraft => "Artisanal Craft",
            Category::Atmospheric => "Atmospheric",
            Category::TypographyPrint => "Typography & Print",
            Category::ContemporaryArt => "Contemporary Art",
            Category::FutureSpeculative => "Future Speculative",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Category::Corporate => "Corp",
            Category::Editorial => "Edit",
            Category::WabiSabi => "Wabi",
            Category::Natural => "Nature",
            Category::Cultural => "Culture",
            Category::Tech => "Tech",
            Category::Cinematic => "Cinema",
            Category::DesignMovements => "Design",
            Category::CulturalHeritage => "Heritage",
            Category::HistoricalPeriod => "History",
            Category::ArtisanalCraft => "Craft",
            Category::Atmospheric => "Mood",
            Category::TypographyPrint => "Type",
            Category::ContemporaryArt => "Art",
            Category::FutureSpeculative => "Future",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Corporate => "Clean business layouts for boardrooms and pitches",
            Category::Editorial => "Magazine spreads, zines and print ephemera",
            Category::WabiSabi => "Imperfect, quiet, materially honest compositions",
            Category::Natural => "Organic palettes drawn from landscapes",
            Category::Cultural => "City-inspired design languages",
            Category::Tech => "Terminals, circuits and synthetic light",
            Category::Cinematic => "Film grammar: noir, widescreen, title cards",
            Category::DesignMovements => "Bauhaus to Memphis, the canon remixed",
            Category::CulturalHeritage => "Traditional pattern systems, respectfully abstracted",
            Category::HistoricalPeriod => "Decades and eras as design systems",
            Category::ArtisanalCraft => "Ceramics, textiles and patinated metal",
            Category::Atmospheric => "Weather and light as the composition",
            Category::TypographyPrint => "Letterforms and the printing press",
            Category::ContemporaryArt => "Gallery, studio and installation space",
            Category::FutureSpeculative => "Speculative interfaces and unstable signals",
        }
    }

    /// Two preview swatches for browsing UIs.
    pub fn preview_colors(self) -> [&'static str; 2] {
        match self {
            Category::Corporate => ["#f8fafc", "#0369a1"],
            Category::Editorial => ["#000000", "#ffffff"],
            Category::WabiSabi => ["#1a1a2e", "#d4af37"],
            Category::Natural => ["#f0fdf4", "#16a34a"],
            Category::Cultural => ["#09090b", "#ec4899"],
            Category::Tech => ["#020617", "#06b6d4"],
            Category::Cinematic => ["#000000", "#dc2626"],
            Category::DesignMovements => ["#f0f0f0", "#eab308"],
            Category::CulturalHeritage => ["#fdf6e3", "#cb4b16"],
            Category::HistoricalPeriod => ["#fef3c7", "#b45309"],
            Category::ArtisanalCraft => ["#fff7ed", "#ea580c"],
            Category::Atmospheric => ["#0f172a", "#818cf8"],
            Category::TypographyPrint => ["#f2e9e4", "#1c1917"],
            Category::ContemporaryArt => ["#f5f5f4", "#d97706"],
            Category::FutureSpeculative => ["#050505", "#00f0ff"],
        }
    }
}

/// Declarative visual program of one archetype, interpreted by the
/// [`crate::Compositor`]. Built through [`crate::DefinitionBuilder`], which
/// refuses to produce a region or decoration without a layer band.
#[derive(Clone, Debug)]
pub struct ArchetypeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Two preview swatches for selection UIs.
    pub preview_colors: [String; 2],
    pub background: DynamicValue<String>,
    pub contrast: Option<ContrastOverride>,
    /// Declaration order fixes rng access order, never stacking.
    pub regions: Vec<RegionSpec>,
    pub decorations: Vec<DecorationSpec>,
    /// Extra per-render values surfaced verbatim on the composition.
    pub dynamic_rules: BTreeMap<String, DynamicRule>,
}

impl ArchetypeDefinition {
    /// Definition-time validation, run at registration so authoring bugs are
    /// caught at startup, never by an end user mid-session.
    pub fn validate(&self) -> DeckforgeResult<()> {
        if self.id.trim().is_empty() {
            return Err(DeckforgeError::validation("archetype id must be non-empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DeckforgeError::validation(format!(
                "archetype '{}' must have a display name",
                self.id
            )));
        }

        let mut names = BTreeSet::new();
        for region in &self.regions {
            if !names.insert(region.name.as_str()) {
                return Err(DeckforgeError::validation(format!(
                    "archetype '{}' declares duplicate region name '{}'",
                    self.id, region.name
                )));
            }
        }

        // Stacking discipline: once any decoration occupies OVERLAY or
        // above, editable text must sit at CONTENT_TOP or it would be
        // occluded while still accepting edits.
        let highest_decoration = self.decorations.iter().map(|d| d.band).max();
        if highest_decoration >= Some(LayerBand::Overlay) {
            for region in &self.regions {
                let editable = matches!(region.kind, RegionKind::Title | RegionKind::Body { .. });
                if editable && region.band < LayerBand::ContentTop {
                    return Err(DeckforgeError::validation(format!(
                        "archetype '{}': region '{}' holds editable text below CONTENT_TOP \
                         while a decoration occupies OVERLAY or above",
                        self.id, region.name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::{DecorationBuilder, DefinitionBuilder, RegionBuilder};

    fn minimal() -> DefinitionBuilder {
        DefinitionBuilder::new("spec", "Spec", Category::Corporate).background("#ffffff")
    }

    #[test]
    fn duplicate_region_names_are_rejected() {
        let err = minimal()
            .region(
                RegionBuilder::new("main", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .region(
                RegionBuilder::new("main", RegionKind::Body { bullets: true })
                    .band(LayerBand::ContentBase)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate region name"));
    }

    #[test]
    fn overlay_decoration_requires_content_top_text() {
        let err = minimal()
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .decoration(
                DecorationBuilder::new("scanlines")
                    .band(LayerBand::Overlay)
                    .shape(DecorationShape::Pattern {
                        css: "repeating-linear-gradient(0deg, transparent, #000 2px)".to_string(),
                    })
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("CONTENT_TOP"));
    }

    #[test]
    fn overlay_decoration_with_content_top_text_is_valid() {
        let def = minimal()
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentTop)
                    .build()
                    .unwrap(),
            )
            .decoration(
                DecorationBuilder::new("scanlines")
                    .band(LayerBand::Overlay)
                    .shape(DecorationShape::Pattern {
                        css: "none".to_string(),
                    })
                    .build()
                    .unwrap(),
            )
            .build();
        assert!(def.is_ok());
    }

    #[test]
    fn non_editable_regions_may_sit_below_overlay() {
        let def = minimal()
            .region(
                RegionBuilder::new("photo", RegionKind::Media {
                    position: MediaPosition::Background,
                })
                .band(LayerBand::Media)
                .build()
                .unwrap(),
            )
            .decoration(
                DecorationBuilder::new("vignette")
                    .band(LayerBand::Overlay)
                    .shape(DecorationShape::Gradient {
                        from: "#00000000".to_string(),
                        to: "#000000e6".to_string(),
                        angle_deg: 180.0,
                    })
                    .build()
                    .unwrap(),
            )
            .build();
        assert!(def.is_ok());
    }
}
