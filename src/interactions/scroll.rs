use crate::config;

/// Strictly-greater threshold test for the header's elevated treatment.
pub fn header_elevated(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD_PX
}

/// Background, blur and shadow for the fixed header in either scroll state.
pub fn header_surface_style(elevated: bool) -> &'static str {
    if elevated {
        "background: rgba(255, 255, 255, 0.98); backdrop-filter: blur(20px); box-shadow: 0 4px 30px rgba(10, 37, 64, 0.15);"
    } else {
        "background: rgba(255, 255, 255, 0.96); backdrop-filter: blur(20px); box-shadow: none;"
    }
}

/// Ornament offset while the hero is still on screen. `None` once a full
/// viewport height has scrolled past, which freezes the ornament at its
/// last written position.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * config::PARALLAX_RATE)
}

/// Scroll destination for an in-page anchor, compensating for the fixed
/// header so the section heading is not hidden behind it. May come out
/// negative near the top of the page; the browser clamps to zero.
pub fn scroll_target(section_top: i32, header_height: i32) -> f64 {
    f64::from(section_top - header_height)
}

/// Animation-delay for the nth decorative dot.
pub fn dot_delay_style(index: usize) -> String {
    format!(
        "animation-delay: {:.1}s;",
        index as f64 * config::DOT_STAGGER_STEP_S
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_elevates_past_threshold_only() {
        assert!(!header_elevated(0.0));
        assert!(!header_elevated(50.0));
        assert!(!header_elevated(100.0));
        assert!(header_elevated(100.1));
        assert!(header_elevated(150.0));
    }

    #[test]
    fn header_styles_differ_by_state() {
        let elevated = header_surface_style(true);
        let resting = header_surface_style(false);
        assert!(elevated.contains("0.98"));
        assert!(elevated.contains("box-shadow: 0 4px 30px"));
        assert!(resting.contains("0.96"));
        assert!(resting.contains("box-shadow: none"));
    }

    #[test]
    fn parallax_moves_at_half_scroll_speed() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(400.0, 800.0), Some(200.0));
        assert_eq!(parallax_offset(799.0, 800.0), Some(399.5));
    }

    #[test]
    fn parallax_freezes_below_the_hero() {
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(2400.0, 800.0), None);
    }

    #[test]
    fn anchor_target_subtracts_header_height() {
        assert_eq!(scroll_target(500, 80), 420.0);
        assert_eq!(scroll_target(80, 80), 0.0);
        // Sections above one header height scroll to a clamped top.
        assert_eq!(scroll_target(40, 80), -40.0);
    }

    #[test]
    fn dot_delays_step_by_fifths() {
        assert_eq!(dot_delay_style(0), "animation-delay: 0.0s;");
        assert_eq!(dot_delay_style(1), "animation-delay: 0.2s;");
        assert_eq!(dot_delay_style(3), "animation-delay: 0.6s;");
        assert_eq!(dot_delay_style(5), "animation-delay: 1.0s;");
    }
}
