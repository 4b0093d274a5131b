//! Cultural category: city-inspired design languages.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style, TextTransform},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![tokyo(), kyoto(), paris(), marrakech(), vienna()]
}

fn tokyo() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("tokyo", "Tokyo", Category::Cultural)
        .description("Neon signage stacked over midnight streets")
        .preview("#09090b", "#ec4899")
        .contrast(palette("#09090b", "#ec4899"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.12, 0.8, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(800),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.12, 0.8, 0.2)),
                    font_size: Some(58.0),
                    font_weight: Some(800),
                    color: Some((*ctx.rng.pick(&["#ec4899", "#22d3ee", "#facc15"])).to_string()),
                    shadow: Some("0 0 24px currentColor".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.4, 0.5, 0.5)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "sign",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.66, 0.4, 0.26, 0.44)),
                opacity: Some(0.8),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Frame {
                    stroke: (*ctx.rng.pick(&["#22d3ee", "#ec4899"])).to_string(),
                    width: 2.0,
                })
            },
        )?)
        .rule("district", |ctx| {
            json!(ctx.rng.pick(&["Shibuya", "Shinjuku", "Akihabara", "Ginza"]))
        })
        .build()
}

fn kyoto() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("kyoto", "Kyoto", Category::Cultural)
        .description("Temple garden restraint, vertical rhythm, maple accent")
        .preview("#f5f0e8", "#9f1239")
        .contrast(palette("#f5f0e8", "#9f1239"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.14, 0.5, 0.24)),
                font_size: Some(46.0),
                font_weight: Some(400),
                line_height: Some(1.4),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.48, 0.44, 0.42)),
                font_size: Some(18.0),
                line_height: Some(2.0),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.6, 0.1, 0.32, 0.8),
        )?)
        .decoration(support::deco(
            "pillar",
            LayerBand::Decoration,
            DecorationShape::Rect {
                fill: "#9f1239".to_string(),
            },
            Style {
                frame: Some(at(0.555, 0.1, 0.006, 0.8)),
                ..Style::default()
            },
        )?)
        .build()
}

fn paris() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("paris", "Paris", Category::Cultural)
        .description("Atelier cream and ink, a flaneur's fashion plate")
        .preview("#faf7f0", "#1c1917")
        .contrast(palette("#faf7f0", "#1c1917"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.12, 0.8, 0.2)),
                font_size: Some(60.0),
                font_weight: Some(300),
                align: Some(Align::Center),
                letter_spacing: Some(0.12),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.22, 0.42, 0.56, 0.42)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "flourish",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#1c1917".to_string(),
                width: 1.0,
            },
            Style {
                frame: Some(at(0.42, 0.36, 0.16, 0.0)),
                ..Style::default()
            },
        )?)
        .rule("arrondissement", |ctx| {
            json!(format!("{}e", ctx.rng.range(1.0, 21.0) as u32))
        })
        .build()
}

fn marrakech() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("marrakech", "Marrakech", Category::Cultural)
        .description("Terracotta courtyard with zellige-blue geometry")
        .preview("#c2410c", "#1e40af")
        .contrast(palette("#9a3412", "#fbbf24"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.76, 0.2)),
                font_size: Some(56.0),
                font_weight: Some(700),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.44, 0.54, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "zellige",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.7, 0.44, 0.22, 0.4)),
                opacity: Some(0.85),
                ..Style::default()
            },
            |ctx| {
                let tile = *ctx.rng.pick(&["#1e40af", "#0e7490", "#15803d"]);
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(45deg, {tile} 0 12px, transparent 12px 24px)"
                    ),
                })
            },
        )?)
        .build()
}

fn vienna() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("vienna", "Vienna", Category::Cultural)
        .description("Secession gold leaf on deep green, ornamental but strict")
        .preview("#064e3b", "#d4af37")
        .contrast(palette("#064e3b", "#d4af37"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.18, 0.8, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(500),
                align: Some(Align::Center),
                letter_spacing: Some(0.06),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.18, 0.46, 0.64, 0.38)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "laurel",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.44, 0.08, 0.12, 0.06)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#d4af37".to_string(),
                    width: ctx.rng.range(1.5, 3.0),
                })
            },
        )?)
        .decoration(support::deco(
            "gilt-frame",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#d4af37".to_string(),
                width: 1.5,
            },
            Style {
                frame: Some(at(0.04, 0.05, 0.92, 0.9)),
                opacity: Some(0.6),
                ..Style::default()
            },
        )?)
        .build()
}
