//! Row-parallel sweep applying the pixel combiner across two input buffers.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::codec::ImageBuffer;
use crate::combine::{self, NO_DATA};

/// Outcome of one sweep: the combined buffer plus how many positions had
/// to fall back to the light pixel because an input lookup failed.
#[derive(Debug)]
pub struct SweepOutput {
    pub buffer: ImageBuffer,
    pub substituted: usize,
}

/// Combines `a` and `b` pixel by pixel into a new buffer of the given
/// dimensions.
///
/// Each row is one unit of work; rows are fanned out across all available
/// threads and write disjoint slices of the preallocated output, so no
/// synchronization beyond the final join is needed. A failed input lookup
/// substitutes [`NO_DATA`] for both operands and the sweep continues.
/// Returns after every row has finished.
pub fn run(a: &ImageBuffer, b: &ImageBuffer, width: usize, height: usize) -> SweepOutput {
    let mut pixels = vec![0u16; width * height];
    let substituted = AtomicUsize::new(0);

    info!(width, height, "starting parallel sweep");

    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let mut row_misses = 0usize;

            for (x, out) in row.iter_mut().enumerate() {
                let index = a.index(x, y);
                let (pa, pb) = match (a.pixels.get(index), b.pixels.get(index)) {
                    (Some(&pa), Some(&pb)) => (pa, pb),
                    _ => {
                        row_misses += 1;
                        (NO_DATA, NO_DATA)
                    }
                };

                *out = combine::combine(pa, pb);
            }

            if row_misses > 0 {
                warn!(y, misses = row_misses, "input lookups failed in row");
                substituted.fetch_add(row_misses, Ordering::Relaxed);
            }
        });

    let substituted = substituted.into_inner();
    info!(substituted, "sweep finished");

    SweepOutput {
        buffer: ImageBuffer::new(width, height, pixels),
        substituted,
    }
}
