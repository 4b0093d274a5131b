//! Typography-and-print category: letterforms and press mechanics.

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
    vec![letterpress(), woodtype(), blackletter(), newsprint(), stencil()]
}

fn letterpress() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("letterpress", "Letterpress", Category::TypographyPrint)
        .description("Deep-impression type on cotton paper")
        .preview("#f2e9e4", "#1c1917")
        .contrast(palette("#f2e9e4", "#1c1917"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.2, 0.8, 0.22)),
                font_size: Some(58.0),
                font_weight: Some(700),
                align: Some(Align::Center),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.1, 0.2, 0.8, 0.22)),
                    font_size: Some(58.0),
                    font_weight: Some(700),
                    align: Some(Align::Center),
                    shadow: Some(format!(
                        "0 1px 0 #ffffff, 0 -1px {:.1}px rgba(0,0,0,0.35)",
                        ctx.rng.range(0.5, 1.5)
                    )),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.5, 0.6, 0.34)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.9)?)
        .rule("impression", |ctx| {
            json!(format!("{} of 250", ctx.rng.range(1.0, 251.0) as u32))
        })
        .build()
}

fn woodtype() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("woodtype", "Wood Type", Category::TypographyPrint)
        .description("Circus-poster condensed capitals, inked unevenly")
        .preview("#fef3c7", "#7f1d1d")
        .contrast(palette("#fef3c7", "#7f1d1d"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.1, 0.88, 0.3)),
                font_size: Some(92.0),
                font_weight: Some(900),
                align: Some(Align::Center),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.02),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.1, 0.88, 0.3)),
                    font_size: Some(ctx.rng.range(84.0, 100.0)),
                    font_weight: Some(900),
                    align: Some(Align::Center),
                    text_transform: Some(TextTransform::Uppercase),
                    letter_spacing: Some(0.02),
                    opacity: Some(ctx.rng.range(0.88, 1.0)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.14, 0.5, 0.72, 0.3)),
                font_size: Some(20.0),
                align: Some(Align::Center),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.08),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "rule-top",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#7f1d1d".to_string(),
                width: 4.0,
            },
            Style {
                frame: Some(at(0.1, 0.07, 0.8, 0.0)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "rule-bottom",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#7f1d1d".to_string(),
                width: 4.0,
            },
            Style {
                frame: Some(at(0.1, 0.88, 0.8, 0.0)),
                ..Style::default()
            },
        )?)
        .build()
}

fn blackletter() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("blackletter", "Blackletter", Category::TypographyPrint)
        .description("Gothic textura masthead over incunabula margins")
        .preview("#f5f0e6", "#111111")
        .contrast(palette("#f5f0e6", "#7f1d1d"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.1, 0.8, 0.2)),
                font_size: Some(62.0),
                font_weight: Some(800),
                align: Some(Align::Center),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.14, 0.4, 0.72, 0.46)),
                font_size: Some(18.0),
                line_height: Some(1.9),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "rubric",
            LayerBand::Decoration,
            DecorationShape::Rect {
                fill: "#7f1d1d".to_string(),
            },
            Style {
                frame: Some(at(0.14, 0.4, 0.006, 0.46)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "double-rule",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#111111".to_string(),
                width: 1.0,
            },
            Style {
                frame: Some(at(0.1, 0.34, 0.8, 0.0)),
                ..Style::default()
            },
        )?)
        .build()
}

fn newsprint() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("newsprint", "Newsprint", Category::TypographyPrint)
        .description("Broadsheet front page, columns and a banner headline")
        .preview("#f5f5f4", "#171717")
        .contrast(palette("#f5f5f4", "#171717"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.05, 0.12, 0.9, 0.16)),
                font_size: Some(56.0),
                font_weight: Some(900),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(-0.01),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.05, 0.34, 0.42, 0.58)),
                font_size: Some(15.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "column-rule",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#171717".to_string(),
                width: 0.75,
            },
            Style {
                frame: Some(at(0.5, 0.34, 0.0, 0.58)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "fold-rule",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#171717".to_string(),
                width: 2.0,
            },
            Style {
                frame: Some(at(0.05, 0.31, 0.9, 0.0)),
                ..Style::default()
            },
        )?)
        .rule("edition", |ctx| {
            json!(ctx.rng.pick(&["MORNING EDITION", "EVENING EDITION", "LATE FINAL"]))
        })
        .build()
}

fn stencil() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("stencil", "Stencil", Category::TypographyPrint)
        .description("Spray-cut crate lettering with overspray haze")
        .preview("#d6d3d1", "#1c1917")
        .contrast(palette("#d6d3d1", "#b91c1c"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.2, 0.86, 0.24)),
                font_size: Some(72.0),
                font_weight: Some(900),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.06),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.2, 0.86, 0.24)),
                    font_size: Some(72.0),
                    font_weight: Some(900),
                    text_transform: Some(TextTransform::Uppercase),
                    letter_spacing: Some(0.06),
                    rotate_deg: Some(ctx.rng.range(-2.0, 2.0)),
                    opacity: Some(ctx.rng.range(0.85, 1.0)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.52, 0.6, 0.38)),
                font_size: Some(19.0),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.04),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "overspray",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.6, 0.14, 0.36, 0.36)),
                opacity: Some(0.3),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#b91c1c", "#1c1917"])).to_string(),
                    to: "#d6d3d100".to_string(),
                    angle_deg: ctx.rng.range(0.0, 360.0),
                })
            },
        )?)
        .build()
}
