//! Cinematic category: film grammar as slide layout. Letterbox bars and
//! vignettes live at OVERLAY or above, which forces the editable text up to
//! CONTENT_TOP in every archetype here that uses them.

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
    vec![noir(), widescreen(), storyboard(), title_card(), signal()]
}

fn noir() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("noir", "Noir", Category::Cinematic)
        .description("Hard shadows, venetian-blind light, one red accent")
        .preview("#000000", "#dc2626")
        .contrast(palette("#0a0a0a", "#dc2626"))
        .region(support::title(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.08, 0.6, 0.84, 0.18)),
                font_size: Some(58.0),
                font_weight: Some(800),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.04),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.08, 0.8, 0.6, 0.14)),
                font_size: Some(17.0),
                line_height: Some(1.6),
                opacity: Some(0.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Background,
            at(0.0, 0.0, 1.0, 1.0),
        )?)
        .decoration(support::deco_with(
            "blinds",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                ..Style::default()
            },
            |ctx| {
                let gap = ctx.rng.range(24.0, 48.0) as u32;
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(170deg, #000000cc 0 {gap}px, transparent {gap}px {}px)",
                        gap * 2
                    ),
                })
            },
        )?)
        .build()
}

fn widescreen() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("widescreen", "Widescreen", Category::Cinematic)
        .description("Anamorphic frame with letterbox bars and a lower-third")
        .preview("#000000", "#fafafa")
        .contrast(palette("#000000", "#fbbf24"))
        .region(support::title(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.07, 0.68, 0.86, 0.1)),
                font_size: Some(40.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.07, 0.79, 0.6, 0.08)),
                font_size: Some(16.0),
                opacity: Some(0.75),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Background,
            at(0.0, 0.12, 1.0, 0.76),
        )?)
        .decoration(support::deco(
            "bar-top",
            LayerBand::Ui,
            DecorationShape::Rect {
                fill: "#000000".to_string(),
            },
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 0.12)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "bar-bottom",
            LayerBand::Ui,
            DecorationShape::Rect {
                fill: "#000000".to_string(),
            },
            Style {
                frame: Some(at(0.0, 0.88, 1.0, 0.12)),
                ..Style::default()
            },
        )?)
        .build()
}

fn storyboard() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("storyboard", "Storyboard", Category::Cinematic)
        .description("Pencilled production panels with scene annotations")
        .preview("#fafaf9", "#57534e")
        .background("#fafaf9")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.06, 0.7, 0.1)),
                font_size: Some(30.0),
                font_weight: Some(700),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.08),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.66, 0.88, 0.28)),
                font_size: Some(17.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .region(support::notes(at(0.78, 0.06, 0.16, 0.1))?)
        .region(support::media_with(
            LayerBand::Media,
            MediaPosition::Top,
            Style {
                frame: Some(at(0.06, 0.2, 0.88, 0.42)),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.2, 0.88, 0.42)),
                    border_color: Some("#57534e".to_string()),
                    border_width: Some(2.0),
                    rotate_deg: Some(ctx.rng.range(-0.6, 0.6)),
                    ..Style::default()
                })
            },
        )?)
        .rule("scene", |ctx| {
            json!(format!(
                "SC {:02} / TK {}",
                ctx.rng.range(1.0, 60.0) as u32,
                ctx.rng.range(1.0, 9.0) as u32
            ))
        })
        .build()
}

fn title_card() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("title-card", "Title Card", Category::Cinematic)
        .description("Silent-era intertitle, ornate border on black")
        .preview("#000000", "#e7e5e4")
        .contrast(palette("#0c0a09", "#e7e5e4"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.14, 0.34, 0.72, 0.2)),
                font_size: Some(48.0),
                font_weight: Some(400),
                align: Some(Align::Center),
                line_height: Some(1.5),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.58, 0.6, 0.2)),
                font_size: Some(18.0),
                align: Some(Align::Center),
                line_height: Some(1.8),
                opacity: Some(0.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "border-outer",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#e7e5e4".to_string(),
                width: 2.0,
            },
            Style {
                frame: Some(at(0.05, 0.07, 0.9, 0.86)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "border-inner",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#e7e5e4".to_string(),
                width: 0.75,
            },
            Style {
                frame: Some(at(0.07, 0.1, 0.86, 0.8)),
                ..Style::default()
            },
        )?)
        .decoration(support::texture(support::NOISE, 0.8)?)
        .build()
}

fn signal() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("signal", "Signal", Category::Cinematic)
        .description("Broadcast test pattern interrupted by the message")
        .preview("#111111", "#eab308")
        .contrast(palette("#111111", "#eab308"))
        .region(support::title_with(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.08, 0.4, 0.84, 0.18)),
                font_size: Some(52.0),
                font_weight: Some(800),
                background: Some("#111111".to_string()),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.08, 0.4, 0.84, 0.18)),
                    font_size: Some(52.0),
                    font_weight: Some(800),
                    background: Some("#111111".to_string()),
                    text_transform: Some(TextTransform::Uppercase),
                    translate: Some((ctx.rng.range(-0.008, 0.008), 0.0)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.08, 0.62, 0.7, 0.2)),
                font_size: Some(18.0),
                background: Some("#111111".to_string()),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "bars",
            LayerBand::Background,
            DecorationShape::Pattern {
                css: "linear-gradient(90deg, #eab308 0 14%, #0e7490 14% 28%, #15803d 28% 42%, \
                      #b91c1c 42% 56%, #7e22ce 56% 70%, #1d4ed8 70% 84%, #e7e5e4 84% 100%)"
                    .to_string(),
            },
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.35),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "static",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                ..Style::default()
            },
            |ctx| {
                let o = ctx.rng.range(0.04, 0.1);
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient(0deg, rgba(255,255,255,{o:.3}) 0 1px, transparent 1px 3px)"
                    ),
                })
            },
        )?)
        .build()
}
