use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use rand::Rng;

use crate::config::SpawnerSettings;

/// Produces random trips at a random cadence. All validation and
/// throttling happens on the receiving side; this thread knows nothing
/// about the car.
pub fn main(num_floors: u8, settings: SpawnerSettings, trip_tx: Sender<(u8, u8)>) {
    let mut rng = rand::thread_rng();
    let min_delay = settings.min_delay.as_millis() as u64;
    let max_delay = settings.max_delay.as_millis() as u64;

    loop {
        thread::sleep(Duration::from_millis(rng.gen_range(min_delay..=max_delay)));

        let origin = rng.gen_range(0..num_floors);
        let mut destination = rng.gen_range(0..num_floors);
        while destination == origin {
            destination = rng.gen_range(0..num_floors);
        }
        trip_tx.send((origin, destination)).unwrap();
    }
}
