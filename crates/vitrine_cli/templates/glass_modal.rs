//! Glass modal
//!
//! A card on top of a dimmed, blurred backdrop.

use crate::components::glass_card::GlassCard;
use vitrine_glass::{GlassConfig, GlassIntensity, GlassVariant, OpacityTier};

pub struct GlassModal {
    pub open: bool,
    pub card: GlassCard,
}

impl GlassModal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            open: false,
            card: GlassCard::with_config(
                GlassConfig::new()
                    .variant(GlassVariant::Frosted)
                    .intensity(GlassIntensity::Strong)
                    .opacity(OpacityTier::Medium),
            )
            .title(title),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn overlay_style(&self) -> &'static str {
        "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); backdrop-filter: blur(4px);"
    }

    pub fn inline_style(&self) -> String {
        format!("{} max-width: 480px; margin: auto;", self.card.inline_style())
    }
}
