/// Virtual page count of the scroll experience. Progress 0..1 maps onto
/// this many screen heights of scrolling.
pub const SCROLL_PAGES: f32 = 80.0;

/// Damping time constant (seconds) for easing the published offset toward
/// the raw scroll target.
pub const SCROLL_DAMPING: f32 = 0.3;

/// Progress contributed by one mouse-wheel line event.
pub const LINE_SCROLL_STEP: f32 = 1.0 / (SCROLL_PAGES * 12.0);

/// Progress contributed by one pixel of wheel scroll (trackpads).
pub const PIXEL_SCROLL_STEP: f32 = 1.0 / (SCROLL_PAGES * 240.0);

/// Progress per second while an arrow key is held.
pub const KEY_SCROLL_SPEED: f32 = 1.0 / SCROLL_PAGES;

/// Progress contributed by a single PageUp/PageDown press.
pub const PAGE_SCROLL_STEP: f32 = 1.0 / SCROLL_PAGES;
