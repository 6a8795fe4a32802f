/// `a * (1 - t) + b * t`: exact at both ends.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// A straight (non-premultiplied) color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            r: lerp(self.r, to.r, t),
            g: lerp(self.g, to.g, t),
            b: lerp(self.b, to.b, t),
            a: lerp(self.a, to.a, t),
        }
    }
}

/// Clip-region insets, in percent of the element's box (`inset()` in CSS terms).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipInset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl ClipInset {
    /// No clipping.
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Fully clipped from the bottom edge up (a "wipe" starting point).
    pub const HIDDEN_FROM_BOTTOM: Self = Self::new(0.0, 0.0, 100.0, 0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            top: lerp(self.top, to.top, t),
            right: lerp(self.right, to.right, t),
            bottom: lerp(self.bottom, to.bottom, t),
            left: lerp(self.left, to.left, t),
        }
    }
}

/// A sparse set of visual properties.
///
/// Only properties that are `Some` are written to the render tree; a phase that animates
/// opacity leaves an element's transform alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualState {
    pub opacity: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub scale: Option<f32>,
    /// Rotation in degrees.
    pub rotate: Option<f32>,
    pub color: Option<Rgba>,
    pub clip: Option<ClipInset>,
}

impl VisualState {
    pub const EMPTY: Self = Self {
        opacity: None,
        translate_x: None,
        translate_y: None,
        scale: None,
        rotate: None,
        color: None,
        clip: None,
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// The fully visible, untransformed state used when animation is unavailable.
    pub const fn visible() -> Self {
        Self {
            opacity: Some(1.0),
            translate_x: Some(0.0),
            translate_y: Some(0.0),
            scale: Some(1.0),
            rotate: Some(0.0),
            color: None,
            clip: Some(ClipInset::NONE),
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = Some(x);
        self.translate_y = Some(y);
        self
    }

    pub fn with_translate_x(mut self, x: f32) -> Self {
        self.translate_x = Some(x);
        self
    }

    pub fn with_translate_y(mut self, y: f32) -> Self {
        self.translate_y = Some(y);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_clip(mut self, clip: ClipInset) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn is_finite(&self) -> bool {
        let scalars = [
            self.opacity,
            self.translate_x,
            self.translate_y,
            self.scale,
            self.rotate,
        ];
        let color_ok = self.color.is_none_or(|c| {
            c.r.is_finite() && c.g.is_finite() && c.b.is_finite() && c.a.is_finite()
        });
        let clip_ok = self.clip.is_none_or(|c| {
            c.top.is_finite() && c.right.is_finite() && c.bottom.is_finite() && c.left.is_finite()
        });
        scalars.iter().flatten().all(|v| v.is_finite()) && color_ok && clip_ok
    }

    /// Overwrites every property that `other` names.
    pub fn merge(&mut self, other: &VisualState) {
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.translate_x.is_some() {
            self.translate_x = other.translate_x;
        }
        if other.translate_y.is_some() {
            self.translate_y = other.translate_y;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
        if other.rotate.is_some() {
            self.rotate = other.rotate;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.clip.is_some() {
            self.clip = other.clip;
        }
    }

    /// Interpolates every property named on either side.
    ///
    /// A property named on one side only is paired with its identity value (opacity 1,
    /// translation 0, scale 1, rotation 0, no clip). Color has no identity and is held.
    pub fn interpolate(from: &VisualState, to: &VisualState, t: f32) -> VisualState {
        VisualState {
            opacity: scalar(from.opacity, to.opacity, 1.0, t),
            translate_x: scalar(from.translate_x, to.translate_x, 0.0, t),
            translate_y: scalar(from.translate_y, to.translate_y, 0.0, t),
            scale: scalar(from.scale, to.scale, 1.0, t),
            rotate: scalar(from.rotate, to.rotate, 0.0, t),
            color: match (from.color, to.color) {
                (Some(a), Some(b)) => Some(a.lerp(b, t)),
                (a, b) => a.or(b),
            },
            clip: match (from.clip, to.clip) {
                (None, None) => None,
                (a, b) => Some(
                    a.unwrap_or(ClipInset::NONE)
                        .lerp(b.unwrap_or(ClipInset::NONE), t),
                ),
            },
        }
    }
}

fn scalar(from: Option<f32>, to: Option<f32>, identity: f32, t: f32) -> Option<f32> {
    match (from, to) {
        (None, None) => None,
        (a, b) => Some(lerp(a.unwrap_or(identity), b.unwrap_or(identity), t)),
    }
}
