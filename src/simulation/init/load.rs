use crate::domain::{Segment, TrackBundle, TrackConfig, TrackError, TrackLayout};
use crate::spatial::chunks::ChunkGrid;

use super::TrackCore;

/// Fresh grid every time: nothing from a previous build survives.
fn prepare(layout: &TrackLayout, config: &TrackConfig) -> Result<(ChunkGrid, Vec<Segment>), TrackError> {
    config.validate()?;
    let walls = layout.walls()?;
    let gates = layout.gates()?;
    let grid = ChunkGrid::build(config, walls)?;
    Ok((grid, gates))
}

pub(super) fn build(track: &mut TrackCore, layout: &TrackLayout, config: TrackConfig) -> Result<(), TrackError> {
    let (grid, gates) = match prepare(layout, &config) {
        Ok(parts) => parts,
        Err(e) => {
            console_warn!("track build rejected: {}", e);
            return Err(e);
        }
    };

    console_log!(
        "track built: {}x{} chunks, {} walls ({} chunk refs), {} gates",
        grid.dimensions().0,
        grid.dimensions().1,
        grid.wall_count(),
        grid.wall_refs(),
        gates.len(),
    );

    track.grid = grid;
    track.gates = gates;
    track.config = config;
    track.built = true;
    track.perf_stats.reset();
    Ok(())
}

pub(super) fn build_from_json(track: &mut TrackCore, json: &str) -> Result<(), TrackError> {
    let bundle = TrackBundle::from_json(json).map_err(|e| {
        console_warn!("track bundle rejected: {}", e);
        e
    })?;
    build(track, &bundle.layout(), bundle.config)
}
