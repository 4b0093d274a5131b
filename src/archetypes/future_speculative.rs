//! Future-speculative category: unstable signals and imagined interfaces.
//! "glitch" is the stress test for referential transparency; its whole look
//! is rng-driven and must still reproduce byte-for-byte.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, Style, TextTransform},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![quantum(), void(), glitch(), vaporwave(), biotech()]
}

fn quantum() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("quantum", "Quantum", Category::FutureSpeculative)
        .description("Probability clouds and interference fringes")
        .preview("#050505", "#00f0ff")
        .contrast(palette("#050505", "#00f0ff"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.2, 0.76, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(600),
                letter_spacing: Some(0.04),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.48, 0.56, 0.42)),
                font_size: Some(18.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "fringes",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.66, 0.4, 0.28, 0.5)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                let period = ctx.rng.range(6.0, 14.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-radial-gradient(circle, #00f0ff33 0 {period}px, transparent {period}px {}px)",
                        period * 2
                    ),
                })
            },
        )?)
        .rule("superposition", |ctx| json!(ctx.rng.chance(0.5)))
        .build()
}

fn void() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("void", "Void", Category::FutureSpeculative)
        .description("Near-black emptiness, the text barely surfacing")
        .preview("#030303", "#3f3f46")
        .contrast(palette("#030303", "#a1a1aa"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.42, 0.8, 0.16)),
                font_size: Some(44.0),
                font_weight: Some(200),
                align: Some(Align::Center),
                letter_spacing: Some(0.24),
                text_transform: Some(TextTransform::Uppercase),
                opacity: Some(0.9),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.26, 0.62, 0.48, 0.2)),
                font_size: Some(15.0),
                align: Some(Align::Center),
                line_height: Some(2.1),
                opacity: Some(0.55),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "event-horizon",
            LayerBand::Background,
            Style {
                frame: Some(at(0.3, 0.2, 0.4, 0.6)),
                opacity: Some(0.12),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#a1a1aa".to_string(),
                    width: ctx.rng.range(0.5, 1.5),
                })
            },
        )?)
        .build()
}

fn glitch() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("glitch", "Glitch", Category::FutureSpeculative)
        .description("Corrupted framebuffer, channels split and rows torn")
        .preview("#0a0a0a", "#22d3ee")
        .contrast(palette("#0a0a0a", "#22d3ee"))
        .region(support::title_with(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.06, 0.3, 0.88, 0.2)),
                font_size: Some(62.0),
                font_weight: Some(800),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                let split = ctx.rng.range(0.002, 0.01);
                Ok(Style {
                    frame: Some(at(0.06, 0.3, 0.88, 0.2)),
                    font_size: Some(62.0),
                    font_weight: Some(800),
                    text_transform: Some(TextTransform::Uppercase),
                    translate: Some((ctx.rng.range(-0.012, 0.012), 0.0)),
                    shadow: Some(format!(
                        "{split:.4}em 0 0 #f0f, -{split:.4}em 0 0 #0ff"
                    )),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.06, 0.56, 0.7, 0.3)),
                font_family: Some("monospace".to_string()),
                font_size: Some(17.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "tear",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.35),
                ..Style::default()
            },
            |ctx| {
                let row = ctx.rng.range(40.0, 120.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(0deg, transparent 0 {row}px, #22d3ee22 {row}px {}px)",
                        row + ctx.rng.range(2.0, 8.0) as u32
                    ),
                })
            },
        )?)
        .rule("corruption", |ctx| {
            json!(format!("0x{:08X}", (ctx.rng.next() * u32::MAX as f64) as u32))
        })
        .build()
}

fn vaporwave() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("vaporwave", "Vaporwave", Category::FutureSpeculative)
        .description("Sunset grid horizon and pastel nostalgia for a fake past")
        .preview("#2e1065", "#f0abfc")
        .contrast(palette("#2e1065", "#f0abfc"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.2, 0.84, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(700),
                align: Some(Align::Center),
                letter_spacing: Some(0.18),
                text_transform: Some(TextTransform::Uppercase),
                color: Some("#f0abfc".to_string()),
                shadow: Some("0 0 22px #f0abfc88".to_string()),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.48, 0.6, 0.26)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "grid-floor",
            LayerBand::Background,
            DecorationShape::Pattern {
                css: "linear-gradient(transparent 0 60%, #f0abfc22 60%), \
                      repeating-linear-gradient(90deg, #f0abfc22 0 1px, transparent 1px 48px)"
                    .to_string(),
            },
            Style {
                frame: Some(at(0.0, 0.6, 1.0, 0.4)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "sun",
            LayerBand::Background,
            Style {
                frame: Some(at(0.38, 0.32, 0.24, 0.4)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#fb923c", "#f472b6"])).to_string(),
                    to: "#2e106500".to_string(),
                    angle_deg: 180.0,
                })
            },
        )?)
        .build()
}

fn biotech() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("biotech", "Biotech", Category::FutureSpeculative)
        .description("Culture-dish greens, membranes and grown structures")
        .preview("#022c22", "#86efac")
        .contrast(palette("#022c22", "#86efac"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.7, 0.2)),
                font_size: Some(52.0),
                font_weight: Some(500),
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
            "membrane",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.64, 0.3, 0.3, 0.52)),
                opacity: Some(0.4),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#86efac".to_string(),
                    width: ctx.rng.range(6.0, 18.0),
                })
            },
        )?)
        .decoration(support::deco_with(
            "nucleus",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.73, 0.46, 0.1, 0.17)),
                opacity: Some(0.6),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#4ade80", "#2dd4bf"])).to_string(),
                })
            },
        )?)
        .rule("sample_id", |ctx| {
            json!(format!("CULTURE-{:04}", (ctx.rng.next() * 10_000.0) as u32))
        })
        .build()
}
