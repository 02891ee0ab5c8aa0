//! Glass text input

use crate::components::glass_surface::GlassSurface;
use vitrine_glass::{GlassConfig, GlassIntensity, OpacityTier};

pub struct GlassInput {
    pub placeholder: String,
    pub value: String,
    pub invalid: bool,
    pub surface: GlassSurface,
}

impl GlassInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            invalid: false,
            surface: GlassSurface::new(
                GlassConfig::new()
                    .intensity(GlassIntensity::Light)
                    .opacity(OpacityTier::Light),
            ),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn inline_style(&self) -> String {
        let mut style = format!(
            "{} padding: 10px 14px; border-radius: 10px;",
            self.surface.inline_style()
        );
        if self.invalid {
            style.push_str(" outline: 1px solid rgba(239, 68, 68, 0.8);");
        }
        style
    }
}
