/// Rotating angle for indeterminate/circular progress indicators.
///
/// Each [`step`](Self::step) adds a fixed increment; the angle wraps back to
/// `0` once it reaches a full turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpinnerPhase {
    angle: f32,
    step_deg: f32,
}

impl SpinnerPhase {
    pub const DEFAULT_STEP_DEG: f32 = 5.0;

    pub fn new(step_deg: f32) -> Self {
        let step_deg = if step_deg.is_finite() && step_deg > 0.0 {
            step_deg
        } else {
            log::warn!("invalid spinner step {step_deg}; using {}", Self::DEFAULT_STEP_DEG);
            Self::DEFAULT_STEP_DEG
        };
        Self { angle: 0.0, step_deg }
    }

    /// Current angle in degrees, in `[0, 360)`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn step_deg(&self) -> f32 {
        self.step_deg
    }

    pub fn step(&mut self) {
        self.angle += self.step_deg;
        if self.angle >= 360.0 {
            self.angle = 0.0;
        }
    }
}

impl Default for SpinnerPhase {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP_DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_wraps_to_zero() {
        let mut p = SpinnerPhase::default();
        for _ in 0..71 {
            p.step();
        }
        assert_eq!(p.angle(), 355.0);
        p.step();
        assert_eq!(p.angle(), 0.0);
    }

    #[test]
    fn bad_step_uses_default() {
        assert_eq!(SpinnerPhase::new(0.0).step_deg(), 5.0);
        assert_eq!(SpinnerPhase::new(f32::NAN).step_deg(), 5.0);
    }
}
