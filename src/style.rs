//! Strongly-typed style and shape vocabulary for regions and decorations.
//! Replaces the duck-typed style objects of older hand-written archetypes.

/// Placement rectangle in unit coordinates (the slide is the unit square).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub const FULL: Frame = Frame {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    };

    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> kurbo::Point {
        kurbo::Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    Start,
    Center,
    End,
}

/// Where a media region sits in the layout, consumed by the presentation
/// layer together with the node's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaPosition {
    Left,
    Right,
    Background,
    Bottom,
    Top,
    Custom,
}

/// Resolved (or declared) visual attributes of one node. All fields are
/// optional; unset fields are filled by the factory from contrast and theme.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Letter spacing in em.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    /// Rotation in degrees about the frame center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_deg: Option<f64>,
    /// Offset in unit coordinates, applied after rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

impl Style {
    /// Field-by-field merge; `over` wins where set.
    pub fn merged(&self, over: &Style) -> Style {
        macro_rules! pick {
            ($field:ident) => {
                over.$field.clone().or_else(|| self.$field.clone())
            };
        }
        Style {
            font_family: pick!(font_family),
            font_size: pick!(font_size),
            font_weight: pick!(font_weight),
            color: pick!(color),
            background: pick!(background),
            opacity: pick!(opacity),
            letter_spacing: pick!(letter_spacing),
            line_height: pick!(line_height),
            text_transform: pick!(text_transform),
            align: pick!(align),
            frame: pick!(frame),
            rotate_deg: pick!(rotate_deg),
            translate: pick!(translate),
            border_color: pick!(border_color),
            border_width: pick!(border_width),
            radius: pick!(radius),
            shadow: pick!(shadow),
        }
    }

    /// Affine placement of the node: rotation about the frame center, then
    /// the declared offset.
    pub fn transform(&self) -> kurbo::Affine {
        let mut t = kurbo::Affine::IDENTITY;
        if let Some(deg) = self.rotate_deg {
            let center = self.frame.unwrap_or(Frame::FULL).center();
            t = kurbo::Affine::rotate_about(deg.to_radians(), center);
        }
        if let Some((dx, dy)) = self.translate {
            t = kurbo::Affine::translate((dx, dy)) * t;
        }
        t
    }
}

/// Decorative element vocabulary. Shapes carry their own paint; placement
/// and rotation come from the decoration's [`Style`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DecorationShape {
    Rect {
        fill: String,
    },
    Circle {
        fill: String,
    },
    Ring {
        stroke: String,
        width: f64,
    },
    Line {
        stroke: String,
        width: f64,
    },
    /// Small decorative caption (volume numbers, stamps, coordinates).
    Label {
        text: String,
    },
    /// Opaque CSS-ish pattern (data URI, repeating gradient).
    Pattern {
        css: String,
    },
    Gradient {
        from: String,
        to: String,
        angle_deg: f64,
    },
    /// Stroked border frame around its style frame.
    Frame {
        stroke: String,
        width: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_is_field_by_field() {
        let base = Style {
            color: Some("#111".to_string()),
            font_size: Some(48.0),
            ..Style::default()
        };
        let over = Style {
            color: Some("#fff".to_string()),
            ..Style::default()
        };
        let m = base.merged(&over);
        assert_eq!(m.color.as_deref(), Some("#fff"));
        assert_eq!(m.font_size, Some(48.0));
    }

    #[test]
    fn transform_rotates_about_frame_center() {
        let style = Style {
            frame: Some(Frame::new(0.25, 0.25, 0.5, 0.5)),
            rotate_deg: Some(90.0),
            ..Style::default()
        };
        let t = style.transform();
        let moved = t * kurbo::Point::new(0.5, 0.5);
        assert!((moved.x - 0.5).abs() < 1e-9);
        assert!((moved.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn identity_transform_when_unset() {
        assert_eq!(Style::default().transform(), kurbo::Affine::IDENTITY);
    }

    #[test]
    fn shape_serde_is_tagged() {
        let s = serde_json::to_value(DecorationShape::Line {
            stroke: "#d4af37".to_string(),
            width: 2.0,
        })
        .unwrap();
        assert_eq!(s["kind"], "line");
    }
}
