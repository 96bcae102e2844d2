/// How fast an [`AnimatedValue`] closes the gap to its target on each tick.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum MotionProfile {
    /// Constant `step_unit` per tick.
    #[default]
    Linear,
    /// A tenth of the remaining distance, never less than `step_unit`.
    Smooth,
    /// A fifth of the remaining distance, halved near the end. Never overshoots.
    Bounce,
}

/// Closed interval a target is clamped into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueDomain {
    pub min: f32,
    pub max: f32,
}

impl ValueDomain {
    /// Creates a domain; swapped bounds are reordered.
    pub fn new(a: f32, b: f32) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    /// Percent domain `[0, 100]`.
    pub const fn percent() -> Self {
        Self { min: 0.0, max: 100.0 }
    }

    #[inline]
    pub fn clamp(self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self::percent()
    }
}

/// Construction parameters for an [`AnimatedValue`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationConfig {
    pub step_unit: f32,
    pub profile: MotionProfile,
    pub domain: ValueDomain,
    /// When `false`, targets are applied immediately.
    pub enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_unit: 1.0,
            profile: MotionProfile::Linear,
            domain: ValueDomain::percent(),
            enabled: true,
        }
    }
}

impl AnimationConfig {
    pub fn step_unit(mut self, v: f32) -> Self {
        self.step_unit = v;
        self
    }

    pub fn profile(mut self, v: MotionProfile) -> Self {
        self.profile = v;
        self
    }

    pub fn domain(mut self, v: ValueDomain) -> Self {
        self.domain = v;
        self
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }
}

/// Whether an [`AnimatedValue`] still has work to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Advancing,
}

/// A scalar that walks toward its target one tick at a time.
///
/// After every [`advance`](Self::advance) the current value lies between its
/// previous value and the target, and it reaches the target exactly.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    profile: MotionProfile,
    step_unit: f32,
    domain: ValueDomain,
    enabled: bool,
}

impl AnimatedValue {
    /// Creates a value resting at `initial` (clamped to the domain).
    pub fn new(initial: f32, config: AnimationConfig) -> Self {
        let default_step = AnimationConfig::default().step_unit;
        let step_unit = if config.step_unit.is_finite() && config.step_unit > 0.0 {
            config.step_unit
        } else {
            log::warn!(
                "invalid animation step {}; using {default_step}",
                config.step_unit
            );
            default_step
        };
        let domain = if config.domain.min.is_finite() && config.domain.max.is_finite() {
            config.domain
        } else {
            log::warn!("non-finite value domain {:?}; using [0, 100]", config.domain);
            ValueDomain::percent()
        };
        let start = if initial.is_finite() { domain.clamp(initial) } else { domain.min };

        Self {
            current: start,
            target: start,
            profile: config.profile,
            step_unit,
            domain,
            enabled: config.enabled,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn profile(&self) -> MotionProfile {
        self.profile
    }

    #[inline]
    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        if self.current == self.target {
            AnimationState::Idle
        } else {
            AnimationState::Advancing
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state() == AnimationState::Idle
    }

    /// Rounded value for display.
    #[inline]
    pub fn displayed(&self) -> i32 {
        self.current.round() as i32
    }

    pub fn set_profile(&mut self, profile: MotionProfile) {
        self.profile = profile;
    }

    /// Sets a new target, clamped to the domain.
    ///
    /// Returns `true` when the current value changed immediately, which only
    /// happens with animation disabled. Non-finite targets are ignored.
    pub fn set_target(&mut self, v: f32) -> bool {
        if !v.is_finite() {
            log::warn!("ignoring non-finite animation target {v}");
            return false;
        }
        self.target = self.domain.clamp(v);
        if self.enabled {
            false
        } else {
            self.snap_current()
        }
    }

    /// Jumps straight to `v` (clamped); both current and target change.
    pub fn snap_to(&mut self, v: f32) {
        if !v.is_finite() {
            log::warn!("ignoring non-finite animation snap {v}");
            return;
        }
        let v = self.domain.clamp(v);
        self.current = v;
        self.target = v;
    }

    /// Turns animation on or off. Disabling completes any pending transition.
    ///
    /// Returns `true` if the current value moved.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        if enabled { false } else { self.snap_current() }
    }

    fn snap_current(&mut self) -> bool {
        let moved = self.current != self.target;
        self.current = self.target;
        moved
    }

    /// Moves one tick toward the target.
    ///
    /// Returns `true` only when the current value changed; an idle value is
    /// left untouched. A step too small to register at the current magnitude
    /// lands on the target.
    pub fn advance(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }

        let remaining = (self.target - self.current).abs();
        let step = self.step_size(remaining);

        let before = self.current;
        self.current = if self.current < self.target {
            (self.current + step).min(self.target)
        } else {
            (self.current - step).max(self.target)
        };
        // The step vanished in f32 rounding at this magnitude.
        if self.current == before {
            self.current = self.target;
        }

        log::trace!("animated value {before} -> {} (target {})", self.current, self.target);
        true
    }

    fn step_size(&self, remaining: f32) -> f32 {
        let unit = self.step_unit;
        match self.profile {
            MotionProfile::Linear => unit,
            MotionProfile::Smooth => unit.max(remaining / 10.0),
            MotionProfile::Bounce => {
                let step = unit.max(remaining / 5.0);
                if remaining < 2.0 * step { unit.max(step / 2.0) } else { step }
            }
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0, AnimationConfig::default())
    }
}
