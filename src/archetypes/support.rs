//! Shared construction helpers for the built-in catalog. Every archetype
//! funnels through these so regions keep uniform names ("title", "body",
//! "media", "notes") and always carry a layer band.

use crate::{
    context::RenderContext,
    contrast::ContrastOverride,
    definition::{DecorationSpec, RegionKind, RegionSpec},
    dsl::{DecorationBuilder, RegionBuilder},
    error::DeckforgeResult,
    layer::LayerBand,
    style::{DecorationShape, Frame, MediaPosition, Style},
};

// Texture patterns shared across archetypes, opaque to the engine.
pub(crate) const NOISE: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)' opacity='0.05'/%3E%3C/svg%3E\")";
pub(crate) const PAPER: &str = "url(\"data:image/svg+xml,%3Csvg width='100' height='100' viewBox='0 0 100 100' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='paper'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.8' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23paper)' opacity='0.1'/%3E%3C/svg%3E\")";
pub(crate) const GRID: &str = "url(\"data:image/svg+xml,%3Csvg width='40' height='40' viewBox='0 0 40 40' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='%239C92AC' fill-opacity='0.1' fill-rule='evenodd'%3E%3Cpath d='M0 40L40 0H20L0 20M40 40V20L20 40'/%3E%3C/g%3E%3C/svg%3E\")";
pub(crate) const DOTS: &str = "radial-gradient(#444 0.5px, transparent 0.5px)";

pub(crate) fn at(x: f64, y: f64, w: f64, h: f64) -> Frame {
    Frame::new(x, y, w, h)
}

/// Pinned background and accent. The contrast mode follows from the
/// background's luminance, so dark archetypes get light text for free.
pub(crate) fn palette(background: &str, accent: &str) -> ContrastOverride {
    ContrastOverride {
        background: Some(background.to_string()),
        accent: Some(accent.to_string()),
        ..ContrastOverride::default()
    }
}

pub(crate) fn placed(frame: Frame) -> Style {
    Style {
        frame: Some(frame),
        ..Style::default()
    }
}

pub(crate) fn title(band: LayerBand, style: Style) -> DeckforgeResult<RegionSpec> {
    RegionBuilder::new("title", RegionKind::Title)
        .band(band)
        .style(style)
        .build()
}

pub(crate) fn title_with<F>(band: LayerBand, fallback: Style, f: F) -> DeckforgeResult<RegionSpec>
where
    F: Fn(&RenderContext) -> DeckforgeResult<Style> + Send + Sync + 'static,
{
    RegionBuilder::new("title", RegionKind::Title)
        .band(band)
        .style_with(f)
        .fallback(fallback)
        .build()
}

pub(crate) fn body(band: LayerBand, bullets: bool, style: Style) -> DeckforgeResult<RegionSpec> {
    RegionBuilder::new("body", RegionKind::Body { bullets })
        .band(band)
        .style(style)
        .build()
}

pub(crate) fn body_with<F>(
    band: LayerBand,
    bullets: bool,
    fallback: Style,
    f: F,
) -> DeckforgeResult<RegionSpec>
where
    F: Fn(&RenderContext) -> DeckforgeResult<Style> + Send + Sync + 'static,
{
    RegionBuilder::new("body", RegionKind::Body { bullets })
        .band(band)
        .style_with(f)
        .fallback(fallback)
        .build()
}

pub(crate) fn media(
    band: LayerBand,
    position: MediaPosition,
    frame: Frame,
) -> DeckforgeResult<RegionSpec> {
    RegionBuilder::new("media", RegionKind::Media { position })
        .band(band)
        .style(placed(frame))
        .build()
}

pub(crate) fn media_with<F>(
    band: LayerBand,
    position: MediaPosition,
    fallback: Style,
    f: F,
) -> DeckforgeResult<RegionSpec>
where
    F: Fn(&RenderContext) -> DeckforgeResult<Style> + Send + Sync + 'static,
{
    RegionBuilder::new("media", RegionKind::Media { position })
        .band(band)
        .style_with(f)
        .fallback(fallback)
        .build()
}

pub(crate) fn notes(frame: Frame) -> DeckforgeResult<RegionSpec> {
    RegionBuilder::new("notes", RegionKind::Notes)
        .band(LayerBand::ContentBase)
        .style(Style {
            frame: Some(frame),
            font_size: Some(12.0),
            opacity: Some(0.8),
            ..Style::default()
        })
        .build()
}

pub(crate) fn deco(
    name: &str,
    band: LayerBand,
    shape: DecorationShape,
    style: Style,
) -> DeckforgeResult<DecorationSpec> {
    DecorationBuilder::new(name)
        .band(band)
        .shape(shape)
        .style(style)
        .build()
}

pub(crate) fn deco_with<F>(
    name: &str,
    band: LayerBand,
    style: Style,
    f: F,
) -> DeckforgeResult<DecorationSpec>
where
    F: Fn(&RenderContext) -> DeckforgeResult<DecorationShape> + Send + Sync + 'static,
{
    DecorationBuilder::new(name)
        .band(band)
        .shape_with(f)
        .style(style)
        .build()
}

/// Full-bleed texture pattern at the background band.
pub(crate) fn texture(css: &str, opacity: f64) -> DeckforgeResult<DecorationSpec> {
    DecorationBuilder::new("texture")
        .band(LayerBand::Background)
        .shape(DecorationShape::Pattern {
            css: css.to_string(),
        })
        .style(Style {
            frame: Some(Frame::FULL),
            opacity: Some(opacity),
            ..Style::default()
        })
        .build()
}
