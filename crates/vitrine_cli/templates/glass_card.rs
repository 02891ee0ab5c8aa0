//! Glass card

use crate::components::glass_surface::GlassSurface;
use vitrine_glass::{GlassConfig, GlassVariant, OpacityTier};

pub struct GlassCard {
    pub title: Option<String>,
    pub surface: GlassSurface,
}

impl GlassCard {
    pub fn new() -> Self {
        Self::with_config(
            GlassConfig::new()
                .variant(GlassVariant::Frosted)
                .opacity(OpacityTier::Regular),
        )
    }

    pub fn with_config(config: GlassConfig) -> Self {
        Self {
            title: None,
            surface: GlassSurface::new(config),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn inline_style(&self) -> String {
        format!(
            "{} padding: 24px; border-radius: 20px;",
            self.surface.inline_style()
        )
    }
}

impl Default for GlassCard {
    fn default() -> Self {
        Self::new()
    }
}
