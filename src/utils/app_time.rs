// Monotonic clock shared by native and browser builds.
// std::time::Instant panics on wasm32-unknown-unknown, web_time forwards to
// performance.now() there and to std everywhere else.

pub use web_time::Instant as AppInstant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let earlier = now();
        let later = now();
        assert!(later >= earlier);
    }
}
