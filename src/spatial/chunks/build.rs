use crate::domain::Segment;

use super::Chunk;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Walls touching `chunk`, in arena order.
#[inline]
fn collect_walls(chunk: &mut Chunk, walls: &[Segment]) {
    chunk.walls.clear();
    for (idx, wall) in walls.iter().enumerate() {
        if chunk.rect.touches(wall) {
            chunk.walls.push(idx as u32);
        }
    }
}

/// Assign every wall to each chunk it touches.
///
/// A wall touches a chunk when an endpoint lies inside the chunk rectangle or
/// the wall crosses one of its four edges; the second case catches walls that
/// pass straight through without ending there.
/// Chunks are independent and fill in parallel under the `parallel` feature.
pub fn populate_chunks(chunks: &mut [Chunk], walls: &[Segment]) {
    #[cfg(feature = "parallel")]
    {
        chunks.par_iter_mut().for_each(|chunk| collect_walls(chunk, walls));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for chunk in chunks.iter_mut() {
            collect_walls(chunk, walls);
        }
    }
}
