use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::scroll::{
    KEY_SCROLL_SPEED, LINE_SCROLL_STEP, PAGE_SCROLL_STEP, PIXEL_SCROLL_STEP, SCROLL_DAMPING,
};

/// Normalised progress through the experience. `target` is where the raw
/// input has scrolled to; `offset` eases toward it and is what the flight
/// follower reads. Both stay inside [0, 1].
#[derive(Resource, Default)]
pub struct ScrollState {
    pub offset: f32,
    pub target: f32,
}

impl ScrollState {
    /// Damped step of `offset` toward `target`.
    pub fn ease(&mut self, delta: f32) {
        let alpha = (delta / SCROLL_DAMPING).min(1.0);
        self.offset += (self.target - self.offset) * alpha;
    }
}

pub fn scroll_input(
    time: Res<Time>,
    mut scroll: ResMut<ScrollState>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let mut advance = 0.0;

    // Mouse wheel scroll accumulation (pixel and line scroll)
    for ev in scroll_events.read() {
        advance -= match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_SCROLL_STEP,
            MouseScrollUnit::Pixel => ev.y * PIXEL_SCROLL_STEP,
        };
    }

    // Keyboard scrolling for platforms without a wheel
    if keyboard.pressed(KeyCode::ArrowDown) {
        advance += KEY_SCROLL_SPEED * time.delta_secs();
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        advance -= KEY_SCROLL_SPEED * time.delta_secs();
    }
    if keyboard.just_pressed(KeyCode::PageDown) {
        advance += PAGE_SCROLL_STEP;
    }
    if keyboard.just_pressed(KeyCode::PageUp) {
        advance -= PAGE_SCROLL_STEP;
    }

    if advance != 0.0 {
        scroll.target = (scroll.target + advance).clamp(0.0, 1.0);
    }

    scroll.ease(time.delta_secs());
}

#[cfg(test)]
mod scroll_state_tests {
    use super::*;

    #[test]
    fn ease_converges_on_target() {
        let mut state = ScrollState {
            offset: 0.0,
            target: 1.0,
        };
        for _ in 0..200 {
            state.ease(1.0 / 60.0);
        }
        assert!((state.offset - 1.0).abs() < 1e-3);
    }

    #[test]
    fn large_delta_lands_exactly_on_target() {
        let mut state = ScrollState {
            offset: 0.25,
            target: 0.75,
        };
        state.ease(10.0);
        assert_eq!(state.offset, 0.75);
    }
}
