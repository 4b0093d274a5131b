//! Atmospheric category: weather and light doing the compositional work.

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![aurora(), mist(), monsoon(), dusk(), ember()]
}

fn aurora() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("aurora", "Aurora", Category::Atmospheric)
        .description("Polar night washed by shifting green and violet curtains")
        .preview("#0f172a", "#818cf8")
        .contrast(palette("#0f172a", "#34d399"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.5, 0.84, 0.2)),
                font_size: Some(56.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.72, 0.64, 0.2)),
                font_size: Some(18.0),
                line_height: Some(1.7),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "curtain-a",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 0.55)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#34d399", "#818cf8", "#22d3ee"])).to_string(),
                    to: "#0f172a00".to_string(),
                    angle_deg: ctx.rng.range(150.0, 210.0),
                })
            },
        )?)
        .decoration(support::deco_with(
            "curtain-b",
            LayerBand::Background,
            Style {
                frame: Some(at(0.3, 0.0, 0.7, 0.4)),
                opacity: Some(0.3),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#a78bfa", "#34d399"])).to_string(),
                    to: "#0f172a00".to_string(),
                    angle_deg: ctx.rng.range(140.0, 220.0),
                })
            },
        )?)
        .build()
}

fn mist() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("mist", "Mist", Category::Atmospheric)
        .description("Fog bank swallowing everything but the message")
        .preview("#e2e8f0", "#475569")
        .contrast(palette("#e2e8f0", "#475569"))
        .region(support::title(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.1, 0.36, 0.8, 0.18)),
                font_size: Some(52.0),
                font_weight: Some(300),
                align: Some(Align::Center),
                letter_spacing: Some(0.08),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.22, 0.58, 0.56, 0.24)),
                font_size: Some(17.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                opacity: Some(0.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "fog",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#e2e8f0cc".to_string(),
                    to: "#e2e8f000".to_string(),
                    angle_deg: ctx.rng.range(0.0, 360.0),
                })
            },
        )?)
        .build()
}

fn monsoon() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("monsoon", "Monsoon", Category::Atmospheric)
        .description("Rain-streaked slate with saturated wet greens")
        .preview("#1e293b", "#4ade80")
        .contrast(palette("#1e293b", "#4ade80"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.18, 0.72, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.46, 0.56, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "rain",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.25),
                ..Style::default()
            },
            |ctx| {
                let slant = ctx.rng.range(8.0, 20.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient({slant}deg, #94a3b833 0 1px, transparent 1px 9px)"
                    ),
                })
            },
        )?)
        .build()
}

fn dusk() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("dusk", "Dusk", Category::Atmospheric)
        .description("Gradient hour between amber and deep violet")
        .preview("#312e81", "#fb923c")
        .contrast(palette("#312e81", "#fb923c"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.3, 0.8, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(500),
                align: Some(Align::Center),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.56, 0.6, 0.26)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.8),
                opacity: Some(0.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "horizon-glow",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.55, 1.0, 0.45)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#fb923c", "#f472b6", "#facc15"])).to_string(),
                    to: "#312e8100".to_string(),
                    angle_deg: 0.0,
                })
            },
        )?)
        .build()
}

fn ember() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("ember", "Ember", Category::Atmospheric)
        .description("Banked coals, heat rising through charcoal dark")
        .preview("#18181b", "#f97316")
        .contrast(palette("#18181b", "#f97316"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.22, 0.74, 0.2)),
                font_size: Some(56.0),
                font_weight: Some(700),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.5, 0.56, 0.4)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                opacity: Some(0.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "coal-a",
            LayerBand::Background,
            Style {
                frame: Some(at(0.7, 0.72, 0.12, 0.2)),
                opacity: Some(0.55),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#f97316", "#ea580c", "#dc2626"])).to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "coal-b",
            LayerBand::Background,
            Style {
                frame: Some(at(0.84, 0.8, 0.08, 0.14)),
                opacity: Some(0.4),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#fb923c", "#f97316"])).to_string(),
                })
            },
        )?)
        .build()
}
