//! Historical-period category: decades treated as design systems.

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
    vec![atomic(), grunge(), victorian(), disco(), y2k()]
}

fn atomic() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("atomic", "Atomic Age", Category::HistoricalPeriod)
        .description("Fifties googie optimism, boomerangs and starbursts")
        .preview("#fef3c7", "#0d9488")
        .contrast(palette("#fef3c7", "#0d9488"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.14, 0.7, 0.22)),
                font_size: Some(58.0),
                font_weight: Some(700),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.14, 0.7, 0.22)),
                    font_size: Some(58.0),
                    font_weight: Some(700),
                    rotate_deg: Some(ctx.rng.range(-3.0, -0.5)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.44, 0.54, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "starburst",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.72, 0.18, 0.16, 0.28)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-conic-gradient({} 0deg 4deg, transparent 4deg 30deg)",
                        ctx.rng.pick(&["#0d9488", "#ea580c", "#ca8a04"])
                    ),
                })
            },
        )?)
        .build()
}

fn grunge() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("grunge", "Grunge", Category::HistoricalPeriod)
        .description("Nineties gig flyer, xeroxed and taped to a pole")
        .preview("#292524", "#eab308")
        .contrast(palette("#292524", "#eab308"))
        .region(support::title_with(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.06, 0.1, 0.84, 0.24)),
                font_size: Some(64.0),
                font_weight: Some(900),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.1, 0.84, 0.24)),
                    font_size: Some(64.0),
                    font_weight: Some(900),
                    text_transform: Some(TextTransform::Uppercase),
                    rotate_deg: Some(ctx.rng.range(-3.0, 3.0)),
                    letter_spacing: Some(ctx.rng.range(-0.02, 0.04)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            true,
            Style {
                frame: Some(at(0.08, 0.42, 0.6, 0.48)),
                font_size: Some(19.0),
                line_height: Some(1.6),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "wear",
            LayerBand::Overlay,
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.5),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Pattern {
                    css: format!(
                        "repeating-linear-gradient({}deg, #00000022 0 2px, transparent 2px 7px)",
                        ctx.rng.range(0.0, 180.0) as u32
                    ),
                })
            },
        )?)
        .decoration(support::texture(support::NOISE, 1.0)?)
        .build()
}

fn victorian() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("victorian", "Victorian", Category::HistoricalPeriod)
        .description("Engraved playbill with stacked ornamental type")
        .preview("#f5f0e6", "#44403c")
        .contrast(palette("#f5f0e6", "#7f1d1d"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.14, 0.16, 0.72, 0.2)),
                font_size: Some(52.0),
                font_weight: Some(700),
                align: Some(Align::Center),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.1),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.44, 0.6, 0.4)),
                font_size: Some(17.0),
                align: Some(Align::Center),
                line_height: Some(2.0),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "engraved-frame",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#44403c".to_string(),
                width: 2.0,
            },
            Style {
                frame: Some(at(0.08, 0.08, 0.84, 0.84)),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "divider",
            LayerBand::Decoration,
            DecorationShape::Line {
                stroke: "#7f1d1d".to_string(),
                width: 1.0,
            },
            Style {
                frame: Some(at(0.35, 0.4, 0.3, 0.0)),
                ..Style::default()
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.8)?)
        .rule("est", |ctx| {
            json!(format!("EST. {}", 1837 + ctx.rng.range(0.0, 64.0) as u32))
        })
        .build()
}

fn disco() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("disco", "Disco", Category::HistoricalPeriod)
        .description("Mirror-ball gradients and seventies chrome script")
        .preview("#1e1b4b", "#f0abfc")
        .contrast(palette("#1e1b4b", "#f0abfc"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.22, 0.84, 0.24)),
                font_size: Some(66.0),
                font_weight: Some(800),
                align: Some(Align::Center),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.08, 0.22, 0.84, 0.24)),
                    font_size: Some(66.0),
                    font_weight: Some(800),
                    align: Some(Align::Center),
                    color: Some((*ctx.rng.pick(&["#f0abfc", "#67e8f9", "#fde047"])).to_string()),
                    shadow: Some("0 4px 16px rgba(240,171,252,0.5)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.2, 0.54, 0.6, 0.3)),
                font_size: Some(19.0),
                align: Some(Align::Center),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "mirror-ball",
            LayerBand::Background,
            Style {
                frame: Some(at(0.42, 0.02, 0.16, 0.26)),
                opacity: Some(0.6),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#f0abfc".to_string(),
                    to: "#67e8f9".to_string(),
                    angle_deg: ctx.rng.range(0.0, 360.0),
                })
            },
        )?)
        .build()
}

fn y2k() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("y2k", "Y2K", Category::HistoricalPeriod)
        .description("Millennium-bug chrome, bubble type and cyan flares")
        .preview("#e0f2fe", "#2563eb")
        .contrast(palette("#e0f2fe", "#2563eb"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.16, 0.8, 0.22)),
                font_size: Some(60.0),
                font_weight: Some(800),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.16, 0.8, 0.22)),
                    font_size: Some(60.0),
                    font_weight: Some(800),
                    color: Some("#2563eb".to_string()),
                    shadow: Some("0 2px 0 #ffffff, 0 6px 14px rgba(37,99,235,0.4)".to_string()),
                    rotate_deg: Some(ctx.rng.range(-1.0, 1.0)),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body_with(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.44, 0.58, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.07, 0.44, 0.58, 0.46)),
                    font_size: Some(19.0),
                    line_height: Some(1.7),
                    background: Some("#ffffffaa".to_string()),
                    radius: Some(ctx.rng.range(16.0, 28.0)),
                    border_color: Some("#bae6fd".to_string()),
                    border_width: Some(2.0),
                    ..Style::default()
                })
            },
        )?)
        .decoration(support::deco_with(
            "flare",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.72, 0.5, 0.2, 0.34)),
                opacity: Some(0.7),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: "#67e8f9".to_string(),
                    to: "#e0f2fe00".to_string(),
                    angle_deg: ctx.rng.range(100.0, 260.0),
                })
            },
        )?)
        .build()
}
