//! Corporate category: boardroom and pitch layouts. "deck" doubles as the
//! registry's fallback archetype, so it stays deliberately unopinionated.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![deck(), keynote(), venture(), metric(), bento()]
}

fn deck() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("deck", "Deck", Category::Corporate)
        .description("Clean default layout with a left text column and right media")
        .preview("#ffffff", "#0369a1")
        .background("#ffffff")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.12, 0.5, 0.18)),
                font_size: Some(56.0),
                font_weight: Some(700),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.36, 0.5, 0.5)),
                font_size: Some(22.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.62, 0.1, 0.32, 0.8),
        )?)
        .build()
}

fn keynote() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("keynote", "Keynote", Category::Corporate)
        .description("Dark stage with a single oversized statement")
        .preview("#09090b", "#fafafa")
        .contrast(palette("#09090b", "#38bdf8"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.34, 0.84, 0.3)),
                font_size: Some(84.0),
                font_weight: Some(800),
                align: Some(Align::Center),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.08, 0.34, 0.84, 0.3)),
                    font_size: Some(ctx.rng.range(76.0, 92.0)),
                    font_weight: Some(800),
                    align: Some(Align::Center),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.68, 0.6, 0.2)),
                font_size: Some(20.0),
                align: Some(Align::Center),
                opacity: Some(0.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "glow",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.25),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: ctx.contrast.accent.clone(),
                    to: "#09090b00".to_string(),
                    angle_deg: ctx.rng.range(120.0, 240.0),
                })
            },
        )?)
        .build()
}

fn venture() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("venture", "Venture", Category::Corporate)
        .description("Pitch-deck spread with an accent rule and slide numbering")
        .preview("#f8fafc", "#1d4ed8")
        .background("#f8fafc")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.1, 0.7, 0.16)),
                font_size: Some(48.0),
                font_weight: Some(700),
                letter_spacing: Some(-0.02),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.32, 0.52, 0.56)),
                font_size: Some(21.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.64, 0.3, 0.29, 0.58),
        )?)
        .decoration(support::deco_with(
            "rule",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.07, 0.27, 0.2, 0.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: ctx.contrast.accent.clone(),
                    width: 3.0,
                })
            },
        )?)
        .rule("slide_tag", |ctx| {
            json!(format!("{} / {}", ctx.slide.id, ctx.slide.archetype_id))
        })
        .build()
}

fn metric() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("metric", "Metric", Category::Corporate)
        .description("Numbers-first layout that treats the title as a headline figure")
        .preview("#ffffff", "#059669")
        .background("#ffffff")
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.2, 0.86, 0.3)),
                font_size: Some(120.0),
                font_weight: Some(900),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.2, 0.86, 0.3)),
                    font_size: Some(120.0),
                    font_weight: Some(900),
                    color: Some(ctx.contrast.accent.clone()),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.58, 0.86, 0.32)),
                font_size: Some(22.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .build()
}

fn bento() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("bento", "Bento", Category::Corporate)
        .description("Rounded card grid with one cell per content item")
        .preview("#f4f4f5", "#18181b")
        .background("#f4f4f5")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.08, 0.6, 0.14)),
                font_size: Some(44.0),
                font_weight: Some(700),
                ..Style::default()
            },
        )?)
        .region(support::body_with(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.06, 0.28, 0.88, 0.62)),
                font_size: Some(20.0),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.28, 0.88, 0.62)),
                    font_size: Some(20.0),
                    background: Some(ctx.contrast.background.clone()),
                    border_color: Some(ctx.contrast.border.clone()),
                    border_width: Some(1.0),
                    radius: Some(ctx.rng.range(12.0, 24.0)),
                    shadow: Some("0 1px 3px rgba(0,0,0,0.08)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .rule("cells", |ctx| json!(ctx.slide.content.len().max(1)))
        .build()
}
