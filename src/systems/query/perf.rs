use std::cell::Cell;

thread_local! {
    pub static PERF_WALL_TESTS: Cell<u64> = Cell::new(0);
    pub static PERF_FALLBACK_SCANS: Cell<u64> = Cell::new(0);
}

#[inline(always)]
pub(crate) fn count_wall_tests(n: usize) {
    PERF_WALL_TESTS.with(|c| c.set(c.get().saturating_add(n as u64)));
}

#[inline(always)]
pub(crate) fn count_fallback_scan() {
    PERF_FALLBACK_SCANS.with(|c| c.set(c.get().saturating_add(1)));
}

pub fn reset_query_perf_counters() {
    PERF_WALL_TESTS.with(|c| c.set(0));
    PERF_FALLBACK_SCANS.with(|c| c.set(0));
}

/// Returns (wall_tests, fallback_scans) and zeroes both counters.
pub fn take_query_perf_counters() -> (u64, u64) {
    let tests = PERF_WALL_TESTS.with(|c| c.replace(0));
    let scans = PERF_FALLBACK_SCANS.with(|c| c.replace(0));
    (tests, scans)
}
