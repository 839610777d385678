/// Shaping function applied to a movement's progress ratio.
///
/// Built-in curves map `[0, 1]` onto `[0, 1]` monotonically with `curve(0) == 0` and
/// `curve(1) == 1`.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Identity.
    #[default]
    Linear,
    /// `t²`, slow start.
    Quadratic,
    /// `t³`, slower start.
    Cubic,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Caller-supplied function. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Curve {
    /// Shape `t`, clamped into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
            Self::Cubic => t * t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
