//! Design-movements category: the twentieth-century canon remixed.

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, Style, TextTransform},
};

use super::support::{self, at, palette};

const MEMPHIS_POPS: [&str; 5] = ["#f43f5e", "#fbbf24", "#22d3ee", "#a3e635", "#c084fc"];

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![bauhaus(), memphis(), deco(), mod_sixties(), pop()]
}

fn bauhaus() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("bauhaus", "Bauhaus", Category::DesignMovements)
        .description("Primary geometry, grid discipline, form follows function")
        .preview("#f0f0f0", "#e11d48")
        .contrast(palette("#f0f0f0", "#e11d48"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.12, 0.6, 0.22)),
                font_size: Some(60.0),
                font_weight: Some(800),
                text_transform: Some(TextTransform::Lowercase),
                letter_spacing: Some(-0.02),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.42, 0.5, 0.48)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "primary",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.66, 0.18, 0.26, 0.46)),
                ..Style::default()
            },
            |ctx| {
                let fill = (*ctx.rng.pick(&["#e11d48", "#2563eb", "#facc15"])).to_string();
                Ok(if ctx.rng.chance(0.5) {
                    DecorationShape::Circle { fill }
                } else {
                    DecorationShape::Rect { fill }
                })
            },
        )?)
        .decoration(support::deco(
            "baseline",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#18181b".to_string(),
                width: 6.0,
            },
            Style {
                frame: Some(at(0.07, 0.38, 0.86, 0.0)),
                ..Style::default()
            },
        )?)
        .build()
}

fn memphis() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("memphis", "Memphis", Category::DesignMovements)
        .description("Squiggles, clashing pastels and terrazzo confetti")
        .preview("#fdf2f8", "#22d3ee")
        .background("#fdf2f8")
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.12, 0.76, 0.2)),
                font_size: Some(58.0),
                font_weight: Some(800),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.12, 0.76, 0.2)),
                    font_size: Some(58.0),
                    font_weight: Some(800),
                    rotate_deg: Some(ctx.rng.range(-2.0, 2.0)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.4, 0.56, 0.5)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "confetti-a",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.7, 0.42, 0.1, 0.16)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&MEMPHIS_POPS)).to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "confetti-b",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.82, 0.62, 0.1, 0.16)),
                rotate_deg: Some(15.0),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&MEMPHIS_POPS)).to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "squiggle",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.68, 0.2, 0.24, 0.04)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(90deg, {} 0 8px, transparent 8px 16px)",
                        ctx.rng.pick(&MEMPHIS_POPS)
                    ),
                })
            },
        )?)
        .build()
}

fn deco() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("deco", "Art Deco", Category::DesignMovements)
        .description("Gold sunburst symmetry on midnight lacquer")
        .preview("#1e1b4b", "#d4af37")
        .contrast(palette("#1e1b4b", "#d4af37"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.24, 0.8, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(500),
                align: Some(Align::Center),
                letter_spacing: Some(0.14),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.22, 0.5, 0.56, 0.34)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "sunburst",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.35, 0.06, 0.3, 0.12)),
                ..Style::default()
            },
            |ctx| {
                let rays = ctx.rng.range(6.0, 12.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-conic-gradient(#d4af37 0deg 5deg, transparent 5deg {}deg)",
                        360 / rays.max(1)
                    ),
                })
            },
        )?)
        .decoration(support::deco(
            "lacquer-frame",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#d4af37".to_string(),
                width: 1.5,
            },
            Style {
                frame: Some(at(0.06, 0.08, 0.88, 0.84)),
                ..Style::default()
            },
        )?)
        .build()
}

fn mod_sixties() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("mod", "Mod", Category::DesignMovements)
        .description("Op-art targets and sixties optimism")
        .preview("#ffffff", "#1d4ed8")
        .contrast(palette("#ffffff", "#1d4ed8"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.16, 0.56, 0.24)),
                font_size: Some(64.0),
                font_weight: Some(800),
                line_height: Some(1.1),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.48, 0.5, 0.42)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "target-outer",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.64, 0.24, 0.3, 0.52)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: (*ctx.rng.pick(&["#1d4ed8", "#dc2626"])).to_string(),
                    width: 14.0,
                })
            },
        )?)
        .decoration(support::deco(
            "target-core",
            LayerBand::Decoration,
            DecorationShape::Circle {
                fill: "#18181b".to_string(),
            },
            Style {
                frame: Some(at(0.75, 0.43, 0.08, 0.14)),
                ..Style::default()
            },
        )?)
        .build()
}

fn pop() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("pop", "Pop", Category::DesignMovements)
        .description("Halftone dots and comic-panel urgency")
        .preview("#fef08a", "#db2777")
        .contrast(palette("#fef08a", "#db2777"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.14, 0.8, 0.24)),
                font_size: Some(68.0),
                font_weight: Some(900),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.14, 0.8, 0.24)),
                    font_size: Some(68.0),
                    font_weight: Some(900),
                    text_transform: Some(TextTransform::Uppercase),
                    color: Some((*ctx.rng.pick(&["#db2777", "#2563eb", "#dc2626"])).to_string()),
                    shadow: Some("4px 4px 0 #18181b".to_string()),
                    rotate_deg: Some(ctx.rng.range(-1.5, 1.5)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.46, 0.6, 0.44)),
                font_size: Some(20.0),
                font_weight: Some(600),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "halftone",
            LayerBand::Background,
            DecorationShape::Pattern {
                css: support::DOTS.to_string(),
            },
            Style {
                frame: Some(at(0.5, 0.0, 0.5, 1.0)),
                opacity: Some(0.3),
                ..Style::default()
            },
        )?)
        .build()
}
