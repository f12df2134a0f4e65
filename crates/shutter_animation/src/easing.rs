//! Easing curves

/// Maps linear progress `t` in 0..=1 onto an eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, slowing towards the end (quadratic)
    Decelerate,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}
