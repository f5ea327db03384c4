use super::perf_stats::PerfStats;
use super::TrackCore;

pub(super) fn enable_perf_metrics(track: &mut TrackCore, enabled: bool) {
    track.perf_enabled = enabled;
    if !enabled {
        track.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(track: &TrackCore) -> PerfStats {
    track.perf_stats.clone()
}

pub(super) fn set_reset_on_collision(track: &mut TrackCore, reset: bool) {
    track.config.reset_on_collision = reset;
}
