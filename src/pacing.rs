use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use log::info;
use rand::Rng;

/// Human-like pause between live fetches, uniform within the configured
/// range. A `0..=0` range disables the pause.
pub fn think(range: &RangeInclusive<u64>) {
    let mut rng = rand::thread_rng();
    let delay_secs = rng.gen_range(range.clone());
    if delay_secs == 0 {
        return;
    }
    info!("Waiting for {} seconds (think time)...", delay_secs);
    thread::sleep(Duration::from_secs(delay_secs));
}
