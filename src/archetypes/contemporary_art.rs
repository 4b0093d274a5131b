//! Contemporary-art category: gallery, studio and installation space.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{DecorationShape, MediaPosition, Style},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![installation(), mixed_media(), canvas(), atelier(), terrazzo()]
}

fn installation() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("installation", "Installation", Category::ContemporaryArt)
        .description("White-cube gallery wall with a single placed work")
        .preview("#fafafa", "#18181b")
        .contrast(palette("#fafafa", "#18181b"))
        .region(support::title(
            LayerBand::ContentBase,
            Style {
                frame: Some(at(0.07, 0.78, 0.5, 0.08)),
                font_size: Some(22.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.07, 0.87, 0.5, 0.1)),
                font_size: Some(14.0),
                line_height: Some(1.6),
                opacity: Some(0.7),
                ..Style::default()
            },
        )?)
        .region(support::media_with(
            LayerBand::Media,
            MediaPosition::Top,
            Style {
                frame: Some(at(0.25, 0.1, 0.5, 0.58)),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.25, 0.1, 0.5, 0.58)),
                    shadow: Some(format!(
                        "0 {:.0}px {:.0}px rgba(0,0,0,0.18)",
                        ctx.rng.range(8.0, 16.0),
                        ctx.rng.range(24.0, 40.0)
                    )),
                    ..Style::default()
                })
            },
        )?)
        .rule("wall_label", |ctx| {
            json!(format!("{}, mixed media", ctx.slide.title))
        })
        .build()
}

fn mixed_media() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("mixedmedia", "Mixed Media", Category::ContemporaryArt)
        .description("Layered studio assemblage, torn edges and paint swipes")
        .preview("#f5f5f4", "#d97706")
        .background("#f5f5f4")
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.12, 0.7, 0.2)),
                font_size: Some(56.0),
                font_weight: Some(800),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.12, 0.7, 0.2)),
                    font_size: Some(56.0),
                    font_weight: Some(800),
                    rotate_deg: Some(ctx.rng.range(-1.8, 1.8)),
                    background: Some("#ffffff".to_string()),
                    shadow: Some("2px 3px 0 rgba(0,0,0,0.12)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.4, 0.52, 0.5)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "paint-swipe",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.6, 0.44, 0.34, 0.14)),
                opacity: Some(0.8),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Gradient {
                    from: (*ctx.rng.pick(&["#d97706", "#0891b2", "#be123c"])).to_string(),
                    to: "#f5f5f400".to_string(),
                    angle_deg: 90.0,
                })
            },
        )?)
        .decoration(support::deco_with(
            "torn-paper",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.64, 0.62, 0.28, 0.24)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#fde68a", "#e7e5e4", "#fecaca"])).to_string(),
                })
            },
        )?)
        .build()
}

fn canvas() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("canvas", "Canvas", Category::ContemporaryArt)
        .description("Raw linen ground with one confident field of color")
        .preview("#e7ded0", "#1e40af")
        .contrast(palette("#e7ded0", "#1e40af"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.6, 0.7, 0.16)),
                font_size: Some(48.0),
                font_weight: Some(500),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.78, 0.6, 0.16)),
                font_size: Some(17.0),
                line_height: Some(1.7),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "field",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.08, 0.1, 0.84, 0.42)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#1e40af", "#b91c1c", "#ca8a04", "#115e59"]))
                        .to_string(),
                })
            },
        )?)
        .decoration(support::texture(support::PAPER, 0.7)?)
        .build()
}

fn atelier() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("atelier", "Atelier", Category::ContemporaryArt)
        .description("Studio pinboard of sketches and working notes")
        .preview("#fafaf9", "#78716c")
        .background("#fafaf9")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.06, 0.08, 0.6, 0.12)),
                font_size: Some(38.0),
                font_weight: Some(600),
                ..Style::default()
            },
        )?)
        .region(support::body_with(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.06, 0.26, 0.5, 0.6)),
                font_size: Some(18.0),
                line_height: Some(1.8),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.06, 0.26, 0.5, 0.6)),
                    font_size: Some(18.0),
                    line_height: Some(1.8),
                    background: Some("#fffbeb".to_string()),
                    rotate_deg: Some(ctx.rng.range(-1.0, 1.0)),
                    shadow: Some("1px 2px 6px rgba(0,0,0,0.1)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .region(support::media_with(
            LayerBand::Media,
            MediaPosition::Right,
            Style {
                frame: Some(at(0.62, 0.26, 0.32, 0.5)),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.62, 0.26, 0.32, 0.5)),
                    rotate_deg: Some(ctx.rng.range(-2.5, 2.5)),
                    border_color: Some("#ffffff".to_string()),
                    border_width: Some(6.0),
                    shadow: Some("2px 4px 8px rgba(0,0,0,0.15)".to_string()),
                    ..Style::default()
                })
            },
        )?)
        .decoration(support::texture(support::GRID, 0.15)?)
        .decoration(support::deco_with(
            "pin",
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.77, 0.24, 0.015, 0.025)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#dc2626", "#2563eb", "#16a34a"])).to_string(),
                })
            },
        )?)
        .build()
}

fn terrazzo() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("terrazzo", "Terrazzo", Category::ContemporaryArt)
        .description("Polished aggregate chips scattered through the ground")
        .preview("#f5f5f4", "#ea580c")
        .background("#f5f5f4")
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.16, 0.74, 0.2)),
                font_size: Some(54.0),
                font_weight: Some(700),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.08, 0.44, 0.58, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "chip-a",
            LayerBand::Background,
            Style {
                frame: Some(at(0.74, 0.2, 0.06, 0.1)),
                rotate_deg: Some(24.0),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#ea580c", "#0d9488", "#be123c", "#a16207"]))
                        .to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "chip-b",
            LayerBand::Background,
            Style {
                frame: Some(at(0.84, 0.42, 0.05, 0.08)),
                rotate_deg: Some(-12.0),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Rect {
                    fill: (*ctx.rng.pick(&["#fda4af", "#5eead4", "#fcd34d"])).to_string(),
                })
            },
        )?)
        .decoration(support::deco_with(
            "chip-c",
            LayerBand::Background,
            Style {
                frame: Some(at(0.7, 0.62, 0.07, 0.12)),
                rotate_deg: Some(40.0),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Circle {
                    fill: (*ctx.rng.pick(&["#ea580c", "#1d4ed8"])).to_string(),
                })
            },
        )?)
        .build()
}
