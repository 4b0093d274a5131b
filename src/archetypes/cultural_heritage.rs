//! Cultural-heritage category: traditional pattern systems abstracted into
//! borders and fields rather than imitated literally.

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![aztec(), batik(), celtic(), persian(), mughal()]
}

fn aztec() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("aztec", "Aztec", Category::CulturalHeritage)
        .description("Stepped stone geometry in clay and jade")
        .preview("#7c2d12", "#65a30d")
        .contrast(palette("#7c2d12", "#fbbf24"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.76, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(700),
                letter_spacing: Some(0.04),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.44, 0.56, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "step-fret",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.0, 0.92, 1.0, 0.08)),
                ..Style::default()
            },
            |ctx| {
                let unit = ctx.rng.range(14.0, 22.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(90deg, #fbbf24 0 {unit}px, transparent {unit}px {}px)",
                        unit * 2
                    ),
                })
            },
        )?)
        .build()
}

fn batik() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("batik", "Batik", Category::CulturalHeritage)
        .description("Wax-resist indigo cloth with cracked dye veins")
        .preview("#1e3a8a", "#fef3c7")
        .contrast(palette("#1e3a8a", "#fbbf24"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.18, 0.7, 0.2)),
                font_size: Some(52.0),
                font_weight: Some(500),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.46, 0.52, 0.42)),
                font_size: Some(19.0),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "dye-crack",
            LayerBand::Background,
            Style {
                frame: Some(at(0.6, 0.0, 0.4, 1.0)),
                opacity: Some(0.4),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient({}deg, #fef3c733 0 1px, transparent 1px 18px)",
                        ctx.rng.range(30.0, 60.0) as u32
                    ),
                })
            },
        )?)
        .decoration(support::texture(support::NOISE, 0.5)?)
        .build()
}

fn celtic() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("celtic", "Celtic", Category::CulturalHeritage)
        .description("Illuminated manuscript margins and knotwork corners")
        .preview("#fef9ef", "#166534")
        .contrast(palette("#fef9ef", "#166534"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.12, 0.14, 0.76, 0.2)),
                font_size: Some(50.0),
                font_weight: Some(600),
                align: Some(Align::Center),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.16, 0.42, 0.68, 0.44)),
                font_size: Some(18.0),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "margin",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#166534".to_string(),
                width: 3.0,
            },
            Style {
                frame: Some(at(0.06, 0.06, 0.88, 0.88)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "knot",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.06, 0.06, 0.07, 0.12)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: (*ctx.rng.pick(&["#166534", "#b45309"])).to_string(),
                    width: 3.0,
                })
            },
        )?)
        .build()
}

fn persian() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("persian", "Persian", Category::CulturalHeritage)
        .description("Carpet medallion symmetry in lapis and saffron")
        .preview("#172554", "#f59e0b")
        .contrast(palette("#172554", "#f59e0b"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.2, 0.8, 0.18)),
                font_size: Some(50.0),
                font_weight: Some(500),
                align: Some(Align::Center),
                letter_spacing: Some(0.05),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.18, 0.44, 0.64, 0.38)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "medallion",
            LayerBand::Background,
            Style {
                frame: Some(at(0.38, 0.36, 0.24, 0.4)),
                opacity: Some(0.18),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#f59e0b".to_string(),
                    width: ctx.rng.range(8.0, 16.0),
                })
            },
        )?)
        .decoration(support::deco(
            "border-band",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#f59e0b66".to_string(),
                width: 6.0,
            },
            Style {
                frame: Some(at(0.04, 0.06, 0.92, 0.88)),
                ..Style::default()
            },
        )?)
        .build()
}

fn mughal() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("mughal", "Mughal", Category::CulturalHeritage)
        .description("Miniature-painting panels, emerald and rose inlay")
        .preview("#064e3b", "#fb7185")
        .contrast(palette("#064e3b", "#fb7185"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.12, 0.6, 0.22)),
                font_size: Some(48.0),
                font_weight: Some(500),
                line_height: Some(1.3),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.42, 0.5, 0.48)),
                font_size: Some(18.0),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .region(support::media_with(
            LayerBand::Media,
            MediaPosition::Right,
            Style {
                frame: Some(at(0.64, 0.12, 0.3, 0.76)),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.64, 0.12, 0.3, 0.76)),
                    border_color: Some("#fb7185".to_string()),
                    border_width: Some(ctx.rng.range(2.0, 5.0)),
                    radius: Some(140.0),
                    ..Style::default()
                })
            },
        )?)
        .build()
}
