use std::collections::BTreeMap;

use crate::{
    context::RenderContext,
    contrast::ContrastOverride,
    definition::{
        ArchetypeDefinition, Category, DecorationSpec, DynamicRule, DynamicValue, RegionKind,
        RegionSpec,
    },
    error::{DeckforgeError, DeckforgeResult},
    layer::LayerBand,
    style::{DecorationShape, Style},
};

/// Builder for one archetype definition. `build()` runs definition-time
/// validation, so an invalid archetype never reaches the registry.
pub struct DefinitionBuilder {
    id: String,
    name: String,
    description: String,
    category: Category,
    preview_colors: Option<[String; 2]>,
    background: Option<DynamicValue<String>>,
    contrast: Option<ContrastOverride>,
    regions: Vec<RegionSpec>,
    decorations: Vec<DecorationSpec>,
    dynamic_rules: BTreeMap<String, DynamicRule>,
}

impl DefinitionBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            preview_colors: None,
            background: None,
            contrast: None,
            regions: Vec::new(),
            decorations: Vec::new(),
            dynamic_rules: BTreeMap::new(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn preview(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.preview_colors = Some([a.into(), b.into()]);
        self
    }

    pub fn background(mut self, bg: impl Into<DynamicValue<String>>) -> Self {
        self.background = Some(bg.into());
        self
    }

    pub fn background_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&RenderContext) -> DeckforgeResult<String> + Send + Sync + 'static,
    {
        self.background = Some(DynamicValue::with(f));
        self
    }

    pub fn contrast(mut self, over: ContrastOverride) -> Self {
        self.contrast = Some(over);
        self
    }

    pub fn region(mut self, region: RegionSpec) -> Self {
        self.regions.push(region);
        self
    }

    pub fn decoration(mut self, decoration: DecorationSpec) -> Self {
        self.decorations.push(decoration);
        self
    }

    pub fn rule<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&RenderContext) -> serde_json::Value + Send + Sync + 'static,
    {
        self.dynamic_rules.insert(key.into(), DynamicRule::new(f));
        self
    }

    pub fn build(self) -> DeckforgeResult<ArchetypeDefinition> {
        let preview_colors = self
            .preview_colors
            .unwrap_or_else(|| {
                let [a, b] = self.category.preview_colors();
                [a.to_string(), b.to_string()]
            });
        let def = ArchetypeDefinition {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            preview_colors,
            background: self
                .background
                .unwrap_or_else(|| DynamicValue::with(|ctx| Ok(ctx.contrast.background.clone()))),
            contrast: self.contrast,
            regions: self.regions,
            decorations: self.decorations,
            dynamic_rules: self.dynamic_rules,
        };
        def.validate()?;
        Ok(def)
    }
}

/// Builder for a named region. The layer band is deliberately not
/// defaulted: a region without one is invalid and fails at build time.
pub struct RegionBuilder {
    name: String,
    kind: RegionKind,
    band: Option<LayerBand>,
    style: DynamicValue<Style>,
    fallback: Style,
}

impl RegionBuilder {
    pub fn new(name: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            band: None,
            style: DynamicValue::Static(Style::default()),
            fallback: Style::default(),
        }
    }

    pub fn band(mut self, band: LayerBand) -> Self {
        self.band = Some(band);
        self
    }

    pub fn style(mut self, style: impl Into<DynamicValue<Style>>) -> Self {
        self.style = style.into();
        self
    }

    pub fn style_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&RenderContext) -> DeckforgeResult<Style> + Send + Sync + 'static,
    {
        self.style = DynamicValue::with(f);
        self
    }

    pub fn fallback(mut self, style: Style) -> Self {
        self.fallback = style;
        self
    }

    pub fn build(self) -> DeckforgeResult<RegionSpec> {
        if self.name.trim().is_empty() {
            return Err(DeckforgeError::validation("region name must be non-empty"));
        }
        let band = self.band.ok_or_else(|| {
            DeckforgeError::validation(format!(
                "region '{}' is missing a layer band",
                self.name
            ))
        })?;
        Ok(RegionSpec {
            name: self.name,
            kind: self.kind,
            band,
            style: self.style,
            fallback: self.fallback,
        })
    }
}

/// Builder for a decorative element; same mandatory-band rule as regions.
pub struct DecorationBuilder {
    name: String,
    band: Option<LayerBand>,
    shape: Option<DynamicValue<DecorationShape>>,
    style: DynamicValue<Style>,
    fallback_shape: Option<DecorationShape>,
}

impl DecorationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            band: None,
            shape: None,
            style: DynamicValue::Static(Style::default()),
            fallback_shape: None,
        }
    }

    pub fn band(mut self, band: LayerBand) -> Self {
        self.band = Some(band);
        self
    }

    pub fn shape(mut self, shape: impl Into<DynamicValue<DecorationShape>>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn shape_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&RenderContext) -> DeckforgeResult<DecorationShape> + Send + Sync + 'static,
    {
        self.shape = Some(DynamicValue::with(f));
        self
    }

    pub fn style(mut self, style: impl Into<DynamicValue<Style>>) -> Self {
        self.style = style.into();
        self
    }

    pub fn style_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&RenderContext) -> DeckforgeResult<Style> + Send + Sync + 'static,
    {
        self.style = DynamicValue::with(f);
        self
    }

    pub fn fallback_shape(mut self, shape: DecorationShape) -> Self {
        self.fallback_shape = Some(shape);
        self
    }

    pub fn build(self) -> DeckforgeResult<DecorationSpec> {
        if self.name.trim().is_empty() {
            return Err(DeckforgeError::validation(
                "decoration name must be non-empty",
            ));
        }
        let band = self.band.ok_or_else(|| {
            DeckforgeError::validation(format!(
                "decoration '{}' is missing a layer band",
                self.name
            ))
        })?;
        let shape = self.shape.ok_or_else(|| {
            DeckforgeError::validation(format!("decoration '{}' is missing a shape", self.name))
        })?;
        Ok(DecorationSpec {
            name: self.name,
            band,
            shape,
            style: self.style,
            fallback_shape: self.fallback_shape,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MediaPosition;

    #[test]
    fn region_without_band_is_rejected_at_build_time() {
        let err = RegionBuilder::new("title", RegionKind::Title)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("missing a layer band"));
    }

    #[test]
    fn decoration_without_band_is_rejected_at_build_time() {
        let err = DecorationBuilder::new("tape")
            .shape(DecorationShape::Rect {
                fill: "#f59e0b".to_string(),
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("missing a layer band"));
    }

    #[test]
    fn decoration_without_shape_is_rejected() {
        let err = DecorationBuilder::new("tape")
            .band(LayerBand::Decoration)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("missing a shape"));
    }

    #[test]
    fn builders_produce_a_valid_definition() {
        let def = DefinitionBuilder::new("deck", "Deck", Category::Corporate)
            .description("Plain corporate layout")
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .style(Style {
                        font_size: Some(72.0),
                        ..Style::default()
                    })
                    .build()
                    .unwrap(),
            )
            .region(
                RegionBuilder::new("body", RegionKind::Body { bullets: true })
                    .band(LayerBand::ContentBase)
                    .build()
                    .unwrap(),
            )
            .region(
                RegionBuilder::new("photo", RegionKind::Media {
                    position: MediaPosition::Right,
                })
                .band(LayerBand::Media)
                .build()
                .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(def.regions.len(), 3);
        assert_eq!(def.preview_colors[0], "#f8fafc"); // category default
    }
}
