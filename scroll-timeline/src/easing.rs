use crate::types::{abs, unit};

/// Maps local phase progress onto eased progress.
///
/// Every curve satisfies `sample(0.0) == 0.0` and `sample(1.0) == 1.0` exactly; inputs
/// outside `[0, 1]` are clamped first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    SmoothStep,
    /// `n` equal jumps, each taken at the end of its interval.
    Steps(u16),
    /// A CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    pub const EASE: Self = Self::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    pub const EASE_IN: Self = Self::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    pub const EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    pub const EASE_IN_OUT: Self = Self::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier {
            x1: unit(x1),
            y1,
            x2: unit(x2),
            y2,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()
            }
            _ => true,
        }
    }

    pub fn sample(self, t: f32) -> f32 {
        let t = unit(t);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u) / 2.0
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::Steps(n) => {
                let n = n.max(1) as f32;
                ((t * n) as u32) as f32 / n
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                solve_cubic_bezier(unit(x1), y1, unit(x2), y2, t)
            }
        }
    }
}

const BEZIER_EPSILON: f32 = 1e-6;

fn solve_cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve_x = |s: f32| ((ax * s + bx) * s + cx) * s;
    let curve_y = |s: f32| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f32| (3.0 * ax * s + 2.0 * bx) * s + cx;

    // Newton first; fall back to bisection where the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = curve_x(s) - x;
        if abs(err) < BEZIER_EPSILON {
            return curve_y(s);
        }
        let d = slope_x(s);
        if abs(d) < BEZIER_EPSILON {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let cur = curve_x(s);
        if abs(cur - x) < BEZIER_EPSILON {
            break;
        }
        if cur < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    curve_y(s)
}
