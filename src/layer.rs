/// Shared z-order bands. Every region and decoration in every archetype
/// stacks by one of these, never by an ad-hoc numeric z-index: an element in
/// a higher band always draws over a lower one, regardless of which archetype
/// declared it or in what order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerBand {
    /// Texture, base colors, full-bleed imagery.
    Background,
    /// Shapes, lines, decorative motifs.
    Decoration,
    /// Images and other resolved media.
    Media,
    /// Standard content containers.
    ContentBase,
    /// Titles and hero text.
    ContentHero,
    /// Badges, floating tags, atmospheric effects (rain, blinds, bars).
    Overlay,
    /// Text that must stay interactive above atmospheric effects.
    ContentTop,
    /// Tooltips and drag handles.
    Ui,
}

impl LayerBand {
    pub const ALL: [LayerBand; 8] = [
        LayerBand::Background,
        LayerBand::Decoration,
        LayerBand::Media,
        LayerBand::ContentBase,
        LayerBand::ContentHero,
        LayerBand::Overlay,
        LayerBand::ContentTop,
        LayerBand::Ui,
    ];

    /// Concrete stacking value, derived from the band's ordinal position.
    pub fn z_index(self) -> i32 {
        match self {
            LayerBand::Background => 0,
            LayerBand::Decoration => 10,
            LayerBand::Media => 20,
            LayerBand::ContentBase => 30,
            LayerBand::ContentHero => 40,
            LayerBand::Overlay => 50,
            LayerBand::ContentTop => 60,
            LayerBand::Ui => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_totally_ordered() {
        for pair in LayerBand::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn z_index_is_strictly_monotonic_in_band_order() {
        for pair in LayerBand::ALL.windows(2) {
            assert!(pair[0].z_index() < pair[1].z_index());
        }
    }

    #[test]
    fn serde_names_are_stable() {
        let json = serde_json::to_string(&LayerBand::ContentTop).unwrap();
        assert_eq!(json, "\"CONTENT_TOP\"");
    }
}
