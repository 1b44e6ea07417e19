use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use super::animation::WidthAnimation;
use super::model::{
    SIDEBAR_ANIMATION_DURATION, SIDEBAR_EXPANDED_WIDTH, SidebarAction,
    SidebarButton, build_registry, toggle_target,
};

/// Internal runtime state for sidebar width and button registry.
#[derive(Debug)]
pub(super) struct SidebarState {
    width: f32,
    animation: Option<WidthAnimation>,
    buttons: Vec<SidebarButton>,
}

impl SidebarState {
    pub(super) fn with_width(width: f32) -> Self {
        Self {
            width,
            animation: None,
            buttons: build_registry(),
        }
    }

    /// Width as of the last animation step.
    pub(super) fn width(&self) -> f32 {
        self.width
    }

    /// Width at `now`, sampling the in-flight animation if any.
    pub(super) fn width_at(&self, now: Instant) -> f32 {
        self.animation
            .map(|animation| animation.value_at(now))
            .unwrap_or(self.width)
    }

    #[cfg(test)]
    pub(super) fn animation_target(&self) -> Option<f32> {
        self.animation.map(|animation| animation.target())
    }

    pub(super) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(super) fn buttons(&self) -> &[SidebarButton] {
        &self.buttons
    }

    pub(super) fn button(&self, name: &str) -> Option<&SidebarButton> {
        self.buttons.iter().find(|button| button.name() == name)
    }

    pub(super) fn action_for_shortcut(
        &self,
        key: &Key,
        modifiers: Modifiers,
    ) -> Option<SidebarAction> {
        self.buttons
            .iter()
            .find(|button| {
                button
                    .shortcut()
                    .is_some_and(|shortcut| shortcut.matches(key, modifiers))
            })
            .map(SidebarButton::action)
    }

    /// Start sliding towards the opposite state and return the target width.
    ///
    /// A toggle during an in-flight animation replaces it, starting from
    /// the width reached so far.
    pub(super) fn toggle(&mut self, now: Instant) -> f32 {
        let current = self.width_at(now);
        let target = toggle_target(current);

        self.width = current;
        self.animation = Some(WidthAnimation::new(
            current,
            target,
            now,
            SIDEBAR_ANIMATION_DURATION,
        ));
        target
    }

    /// Advance the in-flight animation to `now`.
    pub(super) fn advance(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };

        if animation.is_finished(now) {
            self.width = animation.target();
            self.animation = None;
        } else {
            self.width = animation.value_at(now);
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::with_width(SIDEBAR_EXPANDED_WIDTH)
    }
}
