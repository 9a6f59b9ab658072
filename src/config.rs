// Interaction tuning shared across components. Values here are the only
// place thresholds and timings are defined.

/// Scroll offset past which the header switches to its elevated treatment.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Viewport width above which the mobile menu no longer applies.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Fraction of the scroll offset applied to the hero ornament.
pub const PARALLAX_RATE: f64 = 0.5;

/// Visible fraction at which an observed element counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the reveal line 100px above the bottom viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Delay before the hero content fades in after mount.
pub const HERO_REVEAL_DELAY_MS: u32 = 300;

/// Quiet window required before a resize is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Minimum spacing between parallax style writes, roughly one frame.
pub const PARALLAX_THROTTLE_MS: u32 = 16;

/// Stagger step between decorative dot animations.
pub const DOT_STAGGER_STEP_S: f64 = 0.2;
