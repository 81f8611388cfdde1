//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every consumer is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit the full rate table after each refresh attempt.
    pub print_rate_updates: bool,
    /// Emit one line per price tag rewritten during a sync.
    pub print_price_sync: bool,
    /// Emit UI interaction logs (toggle clicks, selector clicks, manual refresh).
    pub print_ui_interactions: bool,
    /// Emit preference load/save details.
    pub print_preferences: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_rate_updates: false,
    print_price_sync: false,
    print_ui_interactions: false,
    print_preferences: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_off_by_default() {
        assert!(!DEBUG_FLAGS.print_rate_updates);
        assert!(!DEBUG_FLAGS.print_price_sync);
        assert!(!DEBUG_FLAGS.print_ui_interactions);
        assert!(!DEBUG_FLAGS.print_preferences);
    }
}
