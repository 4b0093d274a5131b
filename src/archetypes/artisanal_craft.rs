//! Artisanal-craft category: ceramics, textiles and patinated metal.

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![ceramic(), raku(), indigo(), copper(), weave()]
}

fn ceramic() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("ceramic", "Ceramic", Category::ArtisanalCraft)
        .description("Glazed stoneware whites with a thrown-clay accent")
        .preview("#faf6f0", "#9a3412")
        .contrast(palette("#faf6f0", "#9a3412"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.66, 0.2)),
                font_size: Some(52.0),
                font_weight: Some(400),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.44, 0.5, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.64, 0.18, 0.3, 0.64),
        )?)
        .decoration(support::deco_with(
            "glaze-drip",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 0.06)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#9a3412", "#78716c", "#0f766e"])).to_string(),
                    to: "#faf6f000".to_string(),
                    angle_deg: 180.0,
                })
            },
        )?)
        .build()
}

fn raku() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("raku", "Raku", Category::ArtisanalCraft)
        .description("Smoke-fired crackle glaze, carbon black and copper flash")
        .preview("#1c1917", "#ea580c")
        .contrast(palette("#1c1917", "#ea580c"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.22, 0.7, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(300),
                letter_spacing: Some(0.03),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.5, 0.54, 0.4)),
                font_size: Some(18.0),
                line_height: Some(1.9),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "crackle",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.66, 0.18, 0.28, 0.64)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                let angle = ctx.rng.range(20.0, 70.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient({angle}deg, #ea580c44 0 1px, transparent 1px 14px), \
                         repeating-linear-gradient({}deg, #ea580c22 0 1px, transparent 1px 22px)",
                        angle + 90
                    ),
                })
            },
        )?)
        .build()
}

fn indigo() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("indigo", "Indigo", Category::ArtisanalCraft)
        .description("Shibori-dyed cloth, white resist rings on deep blue")
        .preview("#1e3a8a", "#eff6ff")
        .contrast(palette("#1e3a8a", "#bfdbfe"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.18, 0.72, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(500),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.46, 0.52, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "resist-ring-a",
            LayerBand::Background,
            Style {
                frame: Some(at(0.66, 0.16, 0.2, 0.34)),
                opacity: Some(0.35),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#eff6ff".to_string(),
                    width: ctx.rng.range(3.0, 8.0),
                })
            },
        )?)
        .decoration(support::deco_with(
            "resist-ring-b",
            LayerBand::Background,
            Style {
                frame: Some(at(0.78, 0.54, 0.14, 0.24)),
                opacity: Some(0.25),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#eff6ff".to_string(),
                    width: ctx.rng.range(2.0, 6.0),
                })
            },
        )?)
        .build()
}

fn copper() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("copper", "Copper", Category::ArtisanalCraft)
        .description("Hammered metal panel turning verdigris at the edges")
        .preview("#431407", "#2dd4bf")
        .contrast(palette("#431407", "#fdba74"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.2, 0.74, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.48, 0.56, 0.4)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "verdigris",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.82, 0.0, 0.18, 1.0)),
                opacity: Some(0.45),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#2dd4bf".to_string(),
                    to: "#43140700".to_string(),
                    angle_deg: ctx.rng.range(250.0, 290.0),
                })
            },
        )?)
        .build()
}

fn weave() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("weave", "Weave", Category::ArtisanalCraft)
        .description("Warp and weft bands in undyed wool tones")
        .preview("#f5f0e6", "#a16207")
        .contrast(palette("#f5f0e6", "#a16207"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.14, 0.8, 0.18)),
                font_size: Some(50.0),
                font_weight: Some(600),
                align: Some(Align::Center),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.16, 0.4, 0.68, 0.44)),
                font_size: Some(19.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "weft",
            LayerBand::Background,
            Style {
                frame: Some(at(0.0, 0.88, 1.0, 0.12)),
                ..Style::default()
            },
            |ctx| {
                let band = ctx.rng.range(8.0, 16.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(0deg, #a1620755 0 {band}px, #78350f33 {band}px {}px)",
                        band * 2
                    ),
                })
            },
        )?)
        .build()
}
