//! Editorial category: magazine spreads, zines and print ephemera. These
//! lean hardest on the variation stream (tape angles, stamp text, ink picks)
//! and were the motivating case for seeding it per slide.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{Align, DecorationShape, MediaPosition, Style, TextTransform},
};

use super::support::{self, at, palette};

const TAPE_COLORS: [&str; 4] = ["#f59e0b99", "#84cc1699", "#ec489999", "#06b6d499"];
const RISO_INKS: [&str; 4] = ["#ff48b0", "#0078bf", "#f6a800", "#00a95c"];

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![
        editorial(),
        collage(),
        receipt(),
        risograph(),
        typographic(),
        zine(),
    ]
}

fn editorial() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("editorial", "Editorial", Category::Editorial)
        .description("Magazine spread with a serif masthead and a volume stamp")
        .preview("#f5f1e8", "#1c1917")
        .contrast(palette("#f5f1e8", "#b91c1c"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.1, 0.88, 0.2)),
                font_size: Some(64.0),
                font_weight: Some(400),
                letter_spacing: Some(-0.01),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.06, 0.38, 0.42, 0.52)),
                font_size: Some(18.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.54, 0.38, 0.4, 0.52),
        )?)
        .decoration(support::deco_with(
            "masthead-rule",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.06, 0.34, 0.88, 0.0)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: ctx.contrast.text.clone(),
                    width: 2.0,
                })
            },
        )?)
        .rule("volume", |ctx| {
            json!(format!("Vol. {:02}", ctx.rng.range(1.0, 100.0) as u32))
        })
        .build()
}

fn collage() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("collage", "Collage", Category::Editorial)
        .description("Scrapbook layout with taped photos at uneven angles")
        .preview("#fafaf9", "#f59e0b")
        .background("#fafaf9")
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.08, 0.6, 0.16)),
                font_size: Some(52.0),
                font_weight: Some(700),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.08, 0.6, 0.16)),
                    font_size: Some(52.0),
                    font_weight: Some(700),
                    rotate_deg: Some(ctx.rng.range(-1.5, 1.5)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.32, 0.44, 0.56)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .region(support::media_with(
            LayerBand::Media,
            MediaPosition::Right,
            Style {
                frame: Some(at(0.56, 0.28, 0.36, 0.56)),
                shadow: Some("4px 6px 0 rgba(0,0,0,0.15)".to_string()),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.56, 0.28, 0.36, 0.56)),
                    rotate_deg: Some(ctx.rng.range(-4.0, 4.0)),
                    border_color: Some("#ffffff".to_string()),
                    border_width: Some(8.0),
                    shadow: Some("4px 6px 0 rgba(0,0,0,0.15)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .decoration(support::deco_with(
            "tape",
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.68, 0.25, 0.12, 0.04)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&TAPE_COLORS)).to_string(),
                })
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.5)?)
        .build()
}

fn receipt() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("receipt", "Receipt", Category::Editorial)
        .description("Thermal-printer strip, monospaced, with a barcode footer")
        .preview("#ffffff", "#171717")
        .background("#e7e5e4")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.3, 0.1, 0.4, 0.1)),
                font_family: Some("monospace".to_string()),
                font_size: Some(26.0),
                align: Some(Align::Center),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.1),
                ..Style::default()
            },
        )?)
        .region(support::body_with(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.3, 0.24, 0.4, 0.58)),
                font_family: Some("monospace".to_string()),
                font_size: Some(15.0),
                line_height: Some(1.9),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.3, 0.24, 0.4, 0.58)),
                    font_family: Some("monospace".to_string()),
                    font_size: Some(15.0),
                    line_height: Some(1.9),
                    background: Some("#ffffff".to_string()),
                    rotate_deg: Some(ctx.rng.range(-1.0, 1.0)),
                    shadow: Some("0 2px 8px rgba(0,0,0,0.12)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .decoration(support::deco(
            "barcode",
            LayerBand::Decoration,
            DecorationShape::Pattern {
                css: "repeating-linear-gradient(90deg, #171717 0 2px, transparent 2px 5px)"
                    .to_string(),
            },
            Style {
                frame: Some(at(0.38, 0.84, 0.24, 0.05)),
                ..Style::default()
            },
        )?)
        .rule("order_no", |ctx| {
            json!(format!("#{:06}", (ctx.rng.next() * 1_000_000.0) as u32))
        })
        .build()
}

fn risograph() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("risograph", "Risograph", Category::Editorial)
        .description("Two-ink duplicator print with misregistered overlaps")
        .preview("#fdf4ff", "#ff48b0")
        .background("#fdf4ff")
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.14, 0.86, 0.24)),
                font_size: Some(72.0),
                font_weight: Some(800),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.14, 0.86, 0.24)),
                    font_size: Some(72.0),
                    font_weight: Some(800),
                    text_transform: Some(TextTransform::Uppercase),
                    color: Some((*ctx.rng.pick(&RISO_INKS)).to_string()),
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
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "misregister",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.6, 0.5, 0.32, 0.38)),
                opacity: Some(0.7),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&RISO_INKS)).to_string(),
                })
            },
        )?)
        .decoration(support::texture(support::NOISE, 0.6)?)
        .build()
}

fn typographic() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("typographic", "Typographic", Category::Editorial)
        .description("Type specimen: the title is the artwork")
        .preview("#ffffff", "#000000")
        .contrast(palette("#ffffff", "#000000"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.04, 0.1, 0.92, 0.5)),
                font_size: Some(140.0),
                font_weight: Some(900),
                letter_spacing: Some(-0.04),
                ..Style::default()
            },
            |ctx| {
                let upper = ctx.rng.chance(0.5);
                Ok(Style {
                    frame: Some(at(0.04, 0.1, 0.92, 0.5)),
                    font_size: Some(ctx.rng.range(120.0, 160.0)),
                    font_weight: Some(900),
                    letter_spacing: Some(-0.04),
                    text_transform: upper.then_some(TextTransform::Uppercase),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.04, 0.72, 0.5, 0.2)),
                font_size: Some(16.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .rule("specimen", |ctx| {
            json!(ctx.rng.pick(&["Aa", "Gg", "Qq", "Rr"]))
        })
        .build()
}

fn zine() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("zine", "Zine", Category::Editorial)
        .description("Photocopied punk zine, harsh black blocks over grain")
        .preview("#ffffff", "#000000")
        .contrast(palette("#ffffff", "#dc2626"))
        .region(support::title_with(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.05, 0.08, 0.8, 0.2)),
                font_size: Some(60.0),
                font_weight: Some(900),
                color: Some("#ffffff".to_string()),
                background: Some("#000000".to_string()),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.05, 0.08, 0.8, 0.2)),
                    font_size: Some(60.0),
                    font_weight: Some(900),
                    color: Some("#ffffff".to_string()),
                    background: Some("#000000".to_string()),
                    text_transform: Some(TextTransform::Uppercase),
                    rotate_deg: Some(ctx.rng.range(-2.5, 0.5)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            true,
            Style {
                frame: Some(at(0.08, 0.36, 0.55, 0.52)),
                font_size: Some(19.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "staple",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.02, 0.46, 0.02, 0.08)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: "#71717a".to_string(),
                    width: ctx.rng.range(2.0, 4.0),
                })
            },
        )?)
        .decoration(support::texture(support::NOISE, 0.9)?)
        .rule("issue", |ctx| {
            json!(format!("ISSUE {:02}", ctx.rng.range(1.0, 30.0) as u32))
        })
        .build()
}
