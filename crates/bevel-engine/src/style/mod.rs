//! Interaction-state color resolution.

use crate::paint::{named, Color};

/// Inputs that affect how a control is colored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InteractionState {
    pub enabled: bool,
    pub hovered: bool,
    /// Checked, for toggles and radios.
    pub toggled: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self { enabled: true, hovered: false, toggled: false }
    }
}

impl InteractionState {
    pub fn hovered(mut self, v: bool) -> Self {
        self.hovered = v;
        self
    }

    pub fn toggled(mut self, v: bool) -> Self {
        self.toggled = v;
        self
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }
}

/// Background, border and text color of one visual state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorTriple {
    pub background: Color,
    pub border: Color,
    pub text: Color,
}

impl ColorTriple {
    pub const fn new(background: Color, border: Color, text: Color) -> Self {
        Self { background, border, text }
    }
}

/// One [`ColorTriple`] per visual state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StylePalette {
    pub normal: ColorTriple,
    pub hover: ColorTriple,
    pub toggled: ColorTriple,
    pub disabled: ColorTriple,
}

impl Default for StylePalette {
    fn default() -> Self {
        let accent = named::medium_slate_blue();
        let border = named::light_sky_blue();
        Self {
            normal: ColorTriple::new(accent, border, Color::WHITE),
            hover: ColorTriple::new(accent.lighten(0.2), border, Color::WHITE),
            toggled: ColorTriple::new(Color::from_rgb8(72, 61, 139), border, Color::WHITE),
            disabled: ColorTriple::new(named::gainsboro(), named::gray(), named::gray()),
        }
    }
}

impl StylePalette {
    /// Palette where every state uses `triple`.
    pub fn uniform(triple: ColorTriple) -> Self {
        Self { normal: triple, hover: triple, toggled: triple, disabled: triple }
    }

    pub fn normal(mut self, v: ColorTriple) -> Self {
        self.normal = v;
        self
    }

    pub fn hover(mut self, v: ColorTriple) -> Self {
        self.hover = v;
        self
    }

    pub fn toggled(mut self, v: ColorTriple) -> Self {
        self.toggled = v;
        self
    }

    pub fn disabled(mut self, v: ColorTriple) -> Self {
        self.disabled = v;
        self
    }
}

/// Picks the colors for `state`: disabled, then toggled, then hover, then normal.
pub fn resolve_colors(state: InteractionState, palette: &StylePalette) -> ColorTriple {
    if !state.enabled {
        palette.disabled
    } else if state.toggled {
        palette.toggled
    } else if state.hovered {
        palette.hover
    } else {
        palette.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> StylePalette {
        let t = |v: u8| ColorTriple::new(Color::from_rgb8(v, 0, 0), Color::BLACK, Color::WHITE);
        StylePalette::uniform(t(0)).normal(t(1)).hover(t(2)).toggled(t(3)).disabled(t(4))
    }

    fn resolved(state: InteractionState) -> ColorTriple {
        resolve_colors(state, &palette())
    }

    #[test]
    fn plain_state_is_normal() {
        assert_eq!(resolved(InteractionState::default()), palette().normal);
    }

    #[test]
    fn hover_applies_when_nothing_stronger() {
        assert_eq!(resolved(InteractionState::default().hovered(true)), palette().hover);
    }

    #[test]
    fn toggled_beats_hover() {
        let s = InteractionState::default().hovered(true).toggled(true);
        assert_eq!(resolved(s), palette().toggled);
    }

    #[test]
    fn disabled_beats_everything() {
        let s = InteractionState::default().hovered(true).toggled(true).enabled(false);
        assert_eq!(resolved(s), palette().disabled);
        assert_eq!(resolved(InteractionState::default().enabled(false)), palette().disabled);
    }
}
