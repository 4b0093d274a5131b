//! Natural category: palettes lifted from landscapes.

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![forest(), coastal(), desert(), bloom(), mineral()]
}

fn forest() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("forest", "Forest", Category::Natural)
        .description("Deep canopy greens with light filtering from above")
        .preview("#14281d", "#86efac")
        .contrast(palette("#14281d", "#86efac"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.18, 0.7, 0.2)),
                font_size: Some(56.0),
                font_weight: Some(600),
                ..Style::default()
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
            "canopy-light",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.5, 0.0, 0.5, 0.6)),
                opacity: Some(0.2),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#86efac".to_string(),
                    to: "#14281d00".to_string(),
                    angle_deg: ctx.rng.range(150.0, 210.0),
                })
            },
        )?)
        .build()
}

fn coastal() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("coastal", "Coastal", Category::Natural)
        .description("Horizon split between sky and sea")
        .preview("#e0f2fe", "#0c4a6e")
        .contrast(palette("#e0f2fe", "#0c4a6e"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.1, 0.84, 0.18)),
                font_size: Some(54.0),
                font_weight: Some(500),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.32, 0.44, 0.4)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Bottom,
            at(0.0, 0.62, 1.0, 0.38),
        )?)
        .decoration(support::deco_with(
            "horizon",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.0, 0.6, 1.0, 0.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: ctx.contrast.accent.clone(),
                    width: ctx.rng.range(1.0, 2.5),
                })
            },
        )?)
        .build()
}

fn desert() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("desert", "Desert", Category::Natural)
        .description("Dune ochres under a bleached sky, wide and empty")
        .preview("#fef3c7", "#b45309")
        .contrast(palette("#fef3c7", "#b45309"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.3, 0.8, 0.22)),
                font_size: Some(62.0),
                font_weight: Some(400),
                align: Some(Align::Center),
                letter_spacing: Some(0.08),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.6, 0.6, 0.26)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "dune",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.78, 1.0, 0.22)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#f59e0b", "#d97706", "#b45309"])).to_string(),
                    to: "#fef3c700".to_string(),
                    angle_deg: 0.0,
                })
            },
        )?)
        .build()
}

fn bloom() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("bloom", "Bloom", Category::Natural)
        .description("Petal fields, soft circles drifting behind the text")
        .preview("#fdf2f8", "#be185d")
        .contrast(palette("#fdf2f8", "#be185d"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.14, 0.7, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(500),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.42, 0.52, 0.48)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "petal-a",
            LayerBand::Background,
            Style {
                frame: Some(at(0.62, 0.1, 0.3, 0.52)),
                opacity: Some(0.35),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#f9a8d4", "#fbcfe8", "#f472b6"])).to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "petal-b",
            LayerBand::Background,
            Style {
                frame: Some(at(0.74, 0.5, 0.2, 0.36)),
                opacity: Some(0.25),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#fda4af", "#fecdd3"])).to_string(),
                })
            },
        )?)
        .build()
}

fn mineral() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("mineral", "Mineral", Category::Natural)
        .description("Slate strata with a single crystalline accent")
        .preview("#1e293b", "#5eead4")
        .contrast(palette("#1e293b", "#5eead4"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.74, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.44, 0.5, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.64, 0.2, 0.3, 0.6),
        )?)
        .decoration(support::deco_with(
            "stratum",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.0, 0.03, 1.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#334155", "#475569", "#0f766e"])).to_string(),
                })
            },
        )?)
        .build()
}
