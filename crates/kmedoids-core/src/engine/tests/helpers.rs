//! Dataset builders for engine tests.

use crate::config::EngineConfig;
use crate::dataset::Dataset;
use crate::executor::Scheduler;

/// Build a 1D dataset from a coordinate list.
pub fn dataset_1d(coords: &[f32]) -> Dataset {
    Dataset::new(coords.to_vec(), coords.len(), 1)
        .unwrap_or_else(|e| panic!("test dataset invalid: {e}"))
}

/// 100 2D points in five well-separated blobs of 20 points each.
///
/// Blob c is centered at (10c, 10c); members sit on a fixed 5x4 grid of
/// 0.1-unit offsets, so the dataset is fully deterministic. Blobs are
/// interleaved so that the first K=5 points (the engine's seeds) fall
/// into five distinct blobs.
pub fn five_blob_dataset() -> Dataset {
    let mut coords = Vec::with_capacity(100 * 2);
    for i in 0..20 {
        let dx = (i % 5) as f32 * 0.1;
        let dy = (i / 5) as f32 * 0.1;
        for blob in 0..5 {
            let center = (blob * 10) as f32;
            coords.push(center + dx);
            coords.push(center + dy);
        }
    }
    Dataset::new(coords, 100, 2).unwrap_or_else(|e| panic!("test dataset invalid: {e}"))
}

/// Config with an explicit scheduler and thread count.
pub fn config(k: usize, num_threads: usize, scheduler: Scheduler) -> EngineConfig {
    EngineConfig::new(k, num_threads)
        .unwrap_or_else(|e| panic!("test config invalid: {e}"))
        .with_scheduler(scheduler)
}
