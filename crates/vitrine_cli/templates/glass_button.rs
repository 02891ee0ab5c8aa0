//! Glass button

use crate::components::glass_surface::GlassSurface;
use vitrine_glass::{GlassConfig, GlassIntensity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn padding(&self) -> &'static str {
        match self {
            ButtonSize::Small => "4px 12px",
            ButtonSize::Medium => "8px 16px",
            ButtonSize::Large => "12px 24px",
        }
    }

    fn font_size(&self) -> &'static str {
        match self {
            ButtonSize::Small => "13px",
            ButtonSize::Medium => "14px",
            ButtonSize::Large => "16px",
        }
    }
}

pub struct GlassButton {
    pub label: String,
    pub size: ButtonSize,
    pub disabled: bool,
    pub surface: GlassSurface,
}

impl GlassButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            size: ButtonSize::default(),
            disabled: false,
            surface: GlassSurface::new(
                GlassConfig::new()
                    .intensity(GlassIntensity::Light)
                    .interactive(true),
            ),
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn inline_style(&self) -> String {
        format!(
            "{} padding: {}; font-size: {}; border-radius: 12px; cursor: {}; opacity: {};",
            self.surface.inline_style(),
            self.size.padding(),
            self.size.font_size(),
            if self.disabled { "not-allowed" } else { "pointer" },
            if self.disabled { "0.5" } else { "1" },
        )
    }
}
