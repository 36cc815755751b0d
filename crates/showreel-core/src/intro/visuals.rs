//! Derived visual parameters for the intro
//!
//! Everything here is a pure function of progress. Each parameter animates
//! over its own window of the eased value so the reveal happens in stages.

/// Cubic ease-in-out
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Remap `e` so that `[start, start + span]` becomes `[0, 1]`, clamped
#[inline]
pub fn window(e: f64, start: f64, span: f64) -> f64 {
    ((e - start) / span).clamp(0.0, 1.0)
}

/// Style values the presentation layer applies to the hero, nav and title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroVisuals {
    /// Clamped raw progress
    pub progress: f64,
    /// Eased progress
    pub eased: f64,
    /// Hero frame inset in px (56 → 0)
    pub inset: f64,
    /// Hero frame corner radius in px (28 → 0)
    pub corner_radius: f64,
    pub shadow_opacity: f64,
    pub overlay_opacity: f64,
    pub nav_opacity: f64,
    /// Nav bar vertical offset in px (0 → -32)
    pub nav_translate_y: f64,
    /// Nav bar height in px (64 → 0)
    pub nav_height: f64,
    pub title_opacity: f64,
    /// Title vertical offset in px (0 → -22)
    pub title_translate_y: f64,
}

impl IntroVisuals {
    pub fn from_progress(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let e = ease_in_out_cubic(p);

        let nav = window(e, 0.1, 0.55);
        let nav_collapse = window(e, 0.12, 0.55);
        let title = window(e, 0.05, 0.35);

        Self {
            progress: p,
            eased: e,
            inset: lerp(56.0, 0.0, e).round(),
            corner_radius: lerp(28.0, 0.0, e).round(),
            shadow_opacity: lerp(0.35, 0.0, e),
            overlay_opacity: lerp(0.45, 0.2, e),
            nav_opacity: lerp(1.0, 0.0, nav),
            nav_translate_y: lerp(0.0, -32.0, nav),
            nav_height: lerp(64.0, 0.0, nav_collapse).round(),
            title_opacity: lerp(1.0, 0.0, title),
            title_translate_y: lerp(0.0, -22.0, title),
        }
    }

    /// Nav links stop accepting clicks once they are mostly faded out
    #[inline]
    pub fn nav_interactive(&self) -> bool {
        self.nav_opacity >= 0.1
    }
}
