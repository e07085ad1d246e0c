// Shared tuning for scroll effects and animations.

/// Counter update interval, roughly one tick per frame at 60fps.
pub const COUNTER_TICK_MS: u32 = 16;
/// Default wall-clock length of one counter ramp.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Half of the hero must be in view before the stats batch fires.
pub const HERO_STATS_THRESHOLD: f64 = 0.5;

/// Cards reveal early, as soon as a sliver scrolls in past the margin.
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;
pub const CARD_REVEAL_ROOT_MARGIN: &str = "-100px";

/// Scroll depth at which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
/// Extra slack under the navbar when resolving the active section.
pub const ACTIVE_LINK_OFFSET: f64 = 50.0;

pub const PARALLAX_FACTOR: f64 = 0.5;

pub const NOTIFICATION_VISIBLE_MS: u32 = 4_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
