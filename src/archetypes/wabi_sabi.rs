//! Wabi-sabi category: quiet, materially honest compositions. Kintsugi was
//! the first archetype to run on the variation stream; its gold seam angle
//! is the canonical determinism check.

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
    vec![kintsugi(), sumie(), stone(), ink(), grain()]
}

fn kintsugi() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("kintsugi", "Kintsugi", Category::WabiSabi)
        .description("Broken porcelain mended with gold seams")
        .preview("#1a1a2e", "#d4af37")
        .contrast(palette("#1a1a2e", "#d4af37"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.7, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(300),
                letter_spacing: Some(0.02),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.44, 0.52, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.9),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "seam",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.55, 0.0, 0.4, 1.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: "#d4af37".to_string(),
                    width: ctx.rng.range(1.5, 3.5),
                })
            },
        )?)
        .decoration(support::deco_with(
            "shard",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.7, 0.55, 0.22, 0.34)),
                opacity: Some(0.3),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#e8e3da", "#d9d2c5", "#cfc6b8"])).to_string(),
                })
            },
        )?)
        .rule("seam_angle", |ctx| json!(ctx.rng.range(-30.0, 30.0)))
        .build()
}

fn sumie() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("sumie", "Sumi-e", Category::WabiSabi)
        .description("Ink-wash painting, one brushstroke and much empty paper")
        .preview("#f7f4ed", "#1c1917")
        .contrast(palette("#f7f4ed", "#1c1917"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.55, 0.12, 0.38, 0.3)),
                font_size: Some(42.0),
                font_weight: Some(300),
                align: Some(Align::End),
                line_height: Some(1.3),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.55, 0.5, 0.38, 0.38)),
                font_size: Some(17.0),
                align: Some(Align::End),
                line_height: Some(2.0),
                opacity: Some(0.75),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "stroke",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.06, 0.1, 0.34, 0.8)),
                opacity: Some(0.85),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#1c1917".to_string(),
                    to: "#1c191700".to_string(),
                    angle_deg: ctx.rng.range(160.0, 200.0),
                })
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.7)?)
        .build()
}

fn stone() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("stone", "Stone", Category::WabiSabi)
        .description("Weathered rock garden, text settled like gravel")
        .preview("#e7e5e4", "#44403c")
        .contrast(palette("#e7e5e4", "#44403c"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.2, 0.6, 0.18)),
                font_size: Some(50.0),
                font_weight: Some(500),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.08, ctx.rng.range(0.16, 0.26), 0.6, 0.18)),
                    font_size: Some(50.0),
                    font_weight: Some(500),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.46, 0.5, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "boulder",
            LayerBand::Background,
            Style {
                frame: Some(at(0.66, 0.5, 0.3, 0.42)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#a8a29e", "#78716c", "#d6d3d1"])).to_string(),
                })
            },
        )?)
        .build()
}

fn ink() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("ink", "Ink", Category::WabiSabi)
        .description("Dark pooled ink with a single vermilion seal")
        .preview("#171412", "#dc2626")
        .contrast(palette("#171412", "#dc2626"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.3, 0.7, 0.22)),
                font_size: Some(54.0),
                font_weight: Some(300),
                letter_spacing: Some(0.04),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.6, 0.55, 0.3)),
                font_size: Some(18.0),
                line_height: Some(1.9),
                opacity: Some(0.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "seal",
            LayerBand::Decoration,
            DecorationShape::Rect {
                fill: "#dc2626".to_string(),
            },
            Style {
                frame: Some(at(0.85, 0.08, 0.07, 0.12)),
                ..Style::default()
            },
        )?)
        .build()
}

fn grain() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("grain", "Grain", Category::WabiSabi)
        .description("Raw timber bands and unbleached linen")
        .preview("#ede4d3", "#7c5c3e")
        .contrast(palette("#ede4d3", "#7c5c3e"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.14, 0.8, 0.18)),
                font_size: Some(52.0),
                font_weight: Some(400),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.4, 0.5, 0.48)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.64, 0.14, 0.3, 0.74),
        )?)
        .decoration(support::deco_with(
            "band",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.9, 1.0, 0.1)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#d8c9ae", "#cdbb9c", "#c2ad8a"])).to_string(),
                })
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.6)?)
        .build()
}
