/// Wall-clock stopwatch: `Date.now()` in the browser, `Instant` elsewhere.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        let started_at = js_sys::Date::now();
        #[cfg(not(target_arch = "wasm32"))]
        let started_at = std::time::Instant::now();
        PerfTimer { started_at }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        return js_sys::Date::now() - self.started_at;
        #[cfg(not(target_arch = "wasm32"))]
        return self.started_at.elapsed().as_secs_f64() * 1000.0;
    }
}
