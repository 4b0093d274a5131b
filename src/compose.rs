use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    context::RenderContext,
    contrast::{Contrast, ContrastMode},
    definition::{ArchetypeDefinition, DecorationSpec, RegionKind, RegionSpec},
    error::{DeckforgeError, DeckforgeResult},
    layer::LayerBand,
    style::{DecorationShape, MediaPosition, Style},
};

/// Concrete, ready-to-display result of one render pass: a flat tree of
/// styled nodes sorted by stacking order, consumed by the presentation or
/// export layer.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Composition {
    pub archetype_id: String,
    pub background: String,
    pub mode: ContrastMode,
    /// Values from the definition's dynamic rules, keyed by rule name.
    pub extras: BTreeMap<String, serde_json::Value>,
    /// Sorted by (z, declaration index). Only the layer band determines
    /// stacking; declaration order is just the tie-break within a band.
    pub nodes: Vec<ComposedNode>,
}

impl Composition {
    /// JSON form for the export and transport layers.
    pub fn to_json(&self) -> DeckforgeResult<String> {
        serde_json::to_string(self).map_err(|err| DeckforgeError::serde(err.to_string()))
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ComposedNode {
    pub name: String,
    pub band: LayerBand,
    pub z: i32,
    pub transform: kurbo::Affine,
    pub style: Style,
    pub content: NodeContent,
    /// True when the node accepts edits through an editable binding.
    pub editable: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeContent {
    Title {
        text: String,
    },
    Body {
        items: Vec<String>,
        bullets: bool,
    },
    /// Placeholder the external media resolver fills in; the prompt is
    /// opaque to the engine.
    Media {
        position: MediaPosition,
        prompt: Option<String>,
    },
    Notes {
        text: String,
    },
    Decoration(DecorationShape),
}

/// Interprets one archetype definition against a render context. Pure:
/// the same context (including rng state observed at entry) always yields
/// the same composition, because the rng is snapshotted at entry and
/// advanced in the definition's fixed declaration order: container, then
/// regions, then decorations, then dynamic rules.
#[derive(Clone, Debug)]
pub struct Compositor {
    def: Arc<ArchetypeDefinition>,
}

impl Compositor {
    pub fn new(def: Arc<ArchetypeDefinition>) -> Self {
        Self { def }
    }

    pub fn definition(&self) -> &ArchetypeDefinition {
        &self.def
    }

    #[tracing::instrument(skip_all, fields(archetype = %self.def.id, slide = %ctx.slide.id))]
    pub fn compose(&self, ctx: &RenderContext) -> Composition {
        // Layer the archetype-declared contrast override on top of what the
        // context already resolved from theme + slide overrides. An empty
        // override pins nothing, so the context's palette stands as is.
        let contrast = match &self.def.contrast {
            Some(over) if !over.is_empty() => Contrast::resolve(
                ctx.theme,
                ctx.slide.theme_overrides.as_ref(),
                Some(over),
            ),
            _ => ctx.contrast.clone(),
        };
        let ctx = ctx.fork(contrast);

        let background = match self.def.background.resolve(&ctx) {
            Ok(bg) => bg,
            Err(err) => {
                tracing::warn!(%err, "background resolver failed, using contrast background");
                ctx.contrast.background.clone()
            }
        };

        let mut keyed: Vec<((i32, usize), ComposedNode)> = Vec::new();

        for (index, region) in self.def.regions.iter().enumerate() {
            let node = self.compose_region(region, &ctx);
            keyed.push(((node.z, index), node));
        }
        let region_count = self.def.regions.len();
        for (index, decoration) in self.def.decorations.iter().enumerate() {
            if let Some(node) = self.compose_decoration(decoration, &ctx) {
                keyed.push(((node.z, region_count + index), node));
            }
        }

        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let nodes = keyed.into_iter().map(|(_, n)| n).collect();

        let mut extras = BTreeMap::new();
        for (key, rule) in &self.def.dynamic_rules {
            extras.insert(key.clone(), rule.eval(&ctx));
        }

        Composition {
            archetype_id: self.def.id.clone(),
            background,
            mode: ctx.contrast.mode,
            extras,
            nodes,
        }
    }

    fn compose_region(&self, region: &RegionSpec, ctx: &RenderContext) -> ComposedNode {
        // Resolver output merges over the declared fallback, so a resolver
        // only has to return the fields it actually varies.
        let style = match region.style.resolve(ctx) {
            Ok(style) => region.fallback.merged(&style),
            Err(err) => {
                tracing::warn!(
                    region = %region.name,
                    %err,
                    "region style resolver failed, substituting declared default"
                );
                region.fallback.clone()
            }
        };
        let style = finish_region_style(style, &region.kind, ctx);

        let content = match &region.kind {
            RegionKind::Title => NodeContent::Title {
                text: ctx.slide.title.clone(),
            },
            RegionKind::Body { bullets } => NodeContent::Body {
                items: ctx.slide.content.clone(),
                bullets: *bullets,
            },
            RegionKind::Media { position } => NodeContent::Media {
                position: *position,
                prompt: ctx.slide.image_prompt.clone(),
            },
            RegionKind::Notes => NodeContent::Notes {
                text: ctx.slide.speaker_notes.clone().unwrap_or_default(),
            },
        };

        let editable = !ctx.read_only
            && matches!(region.kind, RegionKind::Title | RegionKind::Body { .. });

        ComposedNode {
            name: region.name.clone(),
            band: region.band,
            z: region.band.z_index(),
            transform: style.transform(),
            style,
            content,
            editable,
        }
    }

    fn compose_decoration(
        &self,
        decoration: &DecorationSpec,
        ctx: &RenderContext,
    ) -> Option<ComposedNode> {
        let shape = match decoration.shape.resolve(ctx) {
            Ok(shape) => shape,
            Err(err) => match &decoration.fallback_shape {
                Some(fallback) => {
                    tracing::warn!(
                        decoration = %decoration.name,
                        %err,
                        "decoration shape resolver failed, substituting declared fallback"
                    );
                    fallback.clone()
                }
                None => {
                    tracing::warn!(
                        decoration = %decoration.name,
                        %err,
                        "decoration shape resolver failed with no fallback, skipping"
                    );
                    return None;
                }
            },
        };

        let style = match decoration.style.resolve(ctx) {
            Ok(style) => style,
            Err(err) => {
                tracing::warn!(
                    decoration = %decoration.name,
                    %err,
                    "decoration style resolver failed, using neutral placement"
                );
                Style::default()
            }
        };

        Some(ComposedNode {
            name: decoration.name.clone(),
            band: decoration.band,
            z: decoration.band.z_index(),
            transform: style.transform(),
            style,
            content: NodeContent::Decoration(shape),
            editable: false,
        })
    }
}

/// Fills unset text attributes from contrast and theme so the presentation
/// layer never sees an undefined font or color.
fn finish_region_style(mut style: Style, kind: &RegionKind, ctx: &RenderContext) -> Style {
    if style.color.is_none() {
        style.color = Some(match kind {
            RegionKind::Notes => ctx.contrast.secondary.clone(),
            _ => ctx.contrast.text.clone(),
        });
    }
    if style.font_family.is_none() {
        style.font_family = Some(match kind {
            RegionKind::Title => ctx.theme.fonts.heading.clone(),
            _ => ctx.theme.fonts.body.clone(),
        });
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contrast::ContrastOverride,
        definition::Category,
        dsl::{DecorationBuilder, DefinitionBuilder, RegionBuilder},
        error::DeckforgeError,
        model::{Slide, Theme},
        style::Frame,
    };

    fn test_def() -> ArchetypeDefinition {
        DefinitionBuilder::new("test", "Test", Category::Corporate)
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .region(
                RegionBuilder::new("body", RegionKind::Body { bullets: true })
                    .band(LayerBand::ContentBase)
                    .build()
                    .unwrap(),
            )
            .decoration(
                DecorationBuilder::new("backdrop")
                    .band(LayerBand::Background)
                    .shape(DecorationShape::Rect {
                        fill: "#f4f4f5".to_string(),
                    })
                    .style(Style {
                        frame: Some(Frame::FULL),
                        ..Style::default()
                    })
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn slide() -> Slide {
        Slide::new(
            "s1",
            "Hello",
            vec!["one".to_string(), "two".to_string()],
            "test",
        )
    }

    #[test]
    fn nodes_are_sorted_by_band_not_declaration_order() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(test_def())).compose(&ctx);

        // Declared title, body, backdrop; stacking must be backdrop, body, title.
        let names: Vec<&str> = comp.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["backdrop", "body", "title"]);
        for pair in comp.nodes.windows(2) {
            assert!(pair[0].z <= pair[1].z);
        }
    }

    #[test]
    fn composing_twice_yields_identical_output() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let compositor = Compositor::new(Arc::new(test_def()));
        let a = serde_json::to_string(&compositor.compose(&ctx)).unwrap();
        let b = serde_json::to_string(&compositor.compose(&ctx)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn failing_region_resolver_substitutes_the_declared_default() {
        let def = DefinitionBuilder::new("broken", "Broken", Category::Corporate)
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .style_with(|_| Err(DeckforgeError::evaluation("resolver blew up")))
                    .fallback(Style {
                        font_size: Some(48.0),
                        ..Style::default()
                    })
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(def)).compose(&ctx);
        assert_eq!(comp.nodes.len(), 1);
        assert_eq!(comp.nodes[0].style.font_size, Some(48.0));
    }

    #[test]
    fn resolver_output_merges_over_the_declared_fallback() {
        let def = DefinitionBuilder::new("partial", "Partial", Category::Corporate)
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .style_with(|_| {
                        Ok(Style {
                            color: Some("#ff0000".to_string()),
                            ..Style::default()
                        })
                    })
                    .fallback(Style {
                        font_size: Some(48.0),
                        ..Style::default()
                    })
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(def)).compose(&ctx);
        // The resolver only varied the color; size comes from the fallback.
        assert_eq!(comp.nodes[0].style.color.as_deref(), Some("#ff0000"));
        assert_eq!(comp.nodes[0].style.font_size, Some(48.0));
    }

    #[test]
    fn failing_decoration_without_fallback_is_skipped_not_fatal() {
        let def = DefinitionBuilder::new("broken", "Broken", Category::Corporate)
            .background("#ffffff")
            .decoration(
                DecorationBuilder::new("flaky")
                    .band(LayerBand::Decoration)
                    .shape_with(|_| Err(DeckforgeError::evaluation("no shape")))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(def)).compose(&ctx);
        assert!(comp.nodes.is_empty());
    }

    #[test]
    fn archetype_contrast_override_reaches_region_styles() {
        let def = DefinitionBuilder::new("pinned", "Pinned", Category::Cinematic)
            .background("#000000")
            .contrast(ContrastOverride::text("#ffffff"))
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(def)).compose(&ctx);
        assert_eq!(comp.nodes[0].style.color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn empty_contrast_override_is_inert() {
        let with_empty = DefinitionBuilder::new("same", "Same", Category::Corporate)
            .background("#ffffff")
            .contrast(ContrastOverride::default())
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let without = DefinitionBuilder::new("same", "Same", Category::Corporate)
            .background("#ffffff")
            .region(
                RegionBuilder::new("title", RegionKind::Title)
                    .band(LayerBand::ContentHero)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let a = Compositor::new(Arc::new(with_empty))
            .compose(&ctx)
            .to_json()
            .unwrap();
        let b = Compositor::new(Arc::new(without))
            .compose(&ctx)
            .to_json()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn composition_exports_as_json() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let json = Compositor::new(Arc::new(test_def()))
            .compose(&ctx)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["archetype_id"], "test");
        assert!(value["nodes"].is_array());
    }

    #[test]
    fn read_only_context_marks_nodes_non_editable() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(test_def())).compose(&ctx);
        assert!(comp.nodes.iter().all(|n| !n.editable));
    }

    #[test]
    fn body_items_preserve_slide_order() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let comp = Compositor::new(Arc::new(test_def())).compose(&ctx);
        let body = comp
            .nodes
            .iter()
            .find(|n| n.name == "body")
            .expect("body node");
        match &body.content {
            NodeContent::Body { items, .. } => assert_eq!(items, &["one", "two"]),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn caller_context_rng_is_untouched_by_compose() {
        let theme = Theme::system();
        let s = slide();
        let ctx = RenderContext::read_only(&s, &theme);
        let before = ctx.rng.clone().next().to_bits();
        let _ = Compositor::new(Arc::new(test_def())).compose(&ctx);
        assert_eq!(ctx.rng.clone().next().to_bits(), before);
    }
}
