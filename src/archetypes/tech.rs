//! Tech category: terminals, circuits and synthetic light. "terminal" keeps
//! its scanline overlay, which is why its text sits at the top band.

use serde_json::json;

use crate::{
    definition::{ArchetypeDefinition, Category},
    dsl::DefinitionBuilder,
    error::DeckforgeResult,
    layer::LayerBand,
    style::{DecorationShape, MediaPosition, Style, TextTransform},
};

use super::support::{self, at, palette};

pub(super) fn definitions() -> Vec<DeckforgeResult<ArchetypeDefinition>> {
    vec![circuit(), terminal(), neon(), hologram(), cyberdeck()]
}

fn circuit() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("circuit", "Circuit", Category::Tech)
        .description("PCB traces routed around a silkscreen title block")
        .preview("#052e16", "#4ade80")
        .contrast(palette("#052e16", "#4ade80"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.07, 0.12, 0.7, 0.18)),
                font_family: Some("monospace".to_string()),
                font_size: Some(46.0),
                font_weight: Some(700),
                text_transform: Some(TextTransform::Uppercase),
                letter_spacing: Some(0.06),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.07, 0.38, 0.54, 0.52)),
                font_family: Some("monospace".to_string()),
                font_size: Some(17.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .decoration(support::deco_with(
            "trace",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.68, 0.3, 0.26, 0.0)),
                opacity: Some(0.7),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Line {
                    stroke: "#4ade80".to_string(),
                    width: ctx.rng.range(1.0, 2.0),
                })
            },
        )?)
        .decoration(support::deco_with(
            "via",
            LayerBand::Decoration,
            Style {
                frame: Some(at(0.92, 0.28, 0.02, 0.035)),
                ..Style::default()
            },
            |ctx| {
                Ok(DecorationShape::Ring {
                    stroke: "#4ade80".to_string(),
                    width: ctx.rng.range(1.5, 2.5),
                })
            },
        )?)
        .rule("ref_designator", |ctx| {
            json!(format!("U{}", ctx.rng.range(1.0, 48.0) as u32))
        })
        .build()
}

fn terminal() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("terminal", "Terminal", Category::Tech)
        .description("Phosphor-green console under CRT scanlines")
        .preview("#0a0f0a", "#22c55e")
        .contrast(palette("#0a0f0a", "#22c55e"))
        .region(support::title(
            LayerBand::ContentTop,
            Style {
                frame: Some(at(0.06, 0.1, 0.88, 0.12)),
                font_family: Some("monospace".to_string()),
                font_size: Some(34.0),
                color: Some("#22c55e".to_string()),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentTop,
            false,
            Style {
                frame: Some(at(0.06, 0.28, 0.88, 0.6)),
                font_family: Some("monospace".to_string()),
                font_size: Some(18.0),
                color: Some("#22c55e".to_string()),
                line_height: Some(1.7),
                ..Style::default()
            },
        )?)
        .decoration(support::deco(
            "scanlines",
            LayerBand::Overlay,
            DecorationShape::Pattern {
                css: "repeating-linear-gradient(0deg, transparent 0 2px, #00000055 2px 4px)"
                    .to_string(),
            },
            Style {
                frame: Some(at(0.0, 0.0, 1.0, 1.0)),
                opacity: Some(0.4),
                ..Style::default()
            },
        )?)
        .rule("prompt", |ctx| {
            json!(format!("user@{}:~$", ctx.slide.id))
        })
        .build()
}

fn neon() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("neon", "Neon", Category::Tech)
        .description("Electric tube lettering against wet asphalt")
        .preview("#18181b", "#06b6d4")
        .contrast(palette("#18181b", "#06b6d4"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.08, 0.26, 0.84, 0.26)),
                font_size: Some(72.0),
                font_weight: Some(800),
                ..Style::default()
            },
            |ctx| {
                let hue = *ctx.rng.pick(&["#06b6d4", "#a855f7", "#f43f5e"]);
                Ok(Style {
                    frame: Some(at(0.08, 0.26, 0.84, 0.26)),
                    font_size: Some(72.0),
                    font_weight: Some(800),
                    color: Some(hue.to_string()),
                    shadow: Some(format!("0 0 18px {hue}, 0 0 48px {hue}")),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            false,
            Style {
                frame: Some(at(0.08, 0.6, 0.6, 0.3)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                opacity: Some(0.85),
                ..Style::default()
            },
        )?)
        .build()
}

fn hologram() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("hologram", "Hologram", Category::Tech)
        .description("Iridescent projection plates floating over void")
        .preview("#020617", "#818cf8")
        .contrast(palette("#020617", "#818cf8"))
        .region(support::title_with(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.1, 0.16, 0.8, 0.2)),
                font_size: Some(52.0),
                font_weight: Some(600),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.1, 0.16, 0.8, 0.2)),
                    font_size: Some(52.0),
                    font_weight: Some(600),
                    translate: Some((0.0, ctx.rng.range(-0.01, 0.01))),
                    ..Style::default()
                })
            },
        )?)
        .region(support::body_with(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.1, 0.42, 0.6, 0.46)),
                font_size: Some(19.0),
                line_height: Some(1.7),
                ..Style::default()
            },
            |ctx| {
                Ok(Style {
                    frame: Some(at(0.1, 0.42, 0.6, 0.46)),
                    font_size: Some(19.0),
                    line_height: Some(1.7),
                    background: Some("#818cf811".to_string()),
                    border_color: Some("#818cf866".to_string()),
                    border_width: Some(1.0),
                    radius: Some(ctx.rng.range(4.0, 10.0)),
                    ..Style::default()
                })
            },
        )?)
        .decoration(support::deco(
            "projection",
            LayerBand::Background,
            DecorationShape::Gradient {
                from: "#818cf822".to_string(),
                to: "#02061700".to_string(),
                angle_deg: 0.0,
            },
            Style {
                frame: Some(at(0.0, 0.5, 1.0, 0.5)),
                ..Style::default()
            },
        )?)
        .build()
}

fn cyberdeck() -> DeckforgeResult<ArchetypeDefinition> {
    DefinitionBuilder::new("cyberdeck", "Cyberdeck", Category::Tech)
        .description("Dense HUD panels, amber on carbon, data everywhere")
        .preview("#111111", "#f59e0b")
        .contrast(palette("#111111", "#f59e0b"))
        .region(support::title(
            LayerBand::ContentHero,
            Style {
                frame: Some(at(0.05, 0.07, 0.6, 0.12)),
                font_family: Some("monospace".to_string()),
                font_size: Some(32.0),
                font_weight: Some(700),
                color: Some("#f59e0b".to_string()),
                text_transform: Some(TextTransform::Uppercase),
                ..Style::default()
            },
        )?)
        .region(support::body(
            LayerBand::ContentBase,
            true,
            Style {
                frame: Some(at(0.05, 0.26, 0.56, 0.64)),
                font_family: Some("monospace".to_string()),
                font_size: Some(16.0),
                line_height: Some(1.8),
                ..Style::default()
            },
        )?)
        .region(support::media(
            LayerBand::Media,
            MediaPosition::Right,
            at(0.66, 0.26, 0.29, 0.5),
        )?)
        .decoration(support::deco(
            "hud-frame",
            LayerBand::Decoration,
            DecorationShape::Frame {
                stroke: "#f59e0b55".to_string(),
                width: 1.0,
            },
            Style {
                frame: Some(at(0.03, 0.04, 0.94, 0.92)),
                ..Style::default()
            },
        )?)
        .rule("uptime", |ctx| {
            json!(format!("{:.2}%", 97.0 + ctx.rng.next() * 3.0))
        })
        .build()
}
