use std::time::Duration;

use crossbeam_channel::{select, Receiver, Sender};

use crate::config::Config;
use crate::elevator::Elevator;
use crate::timer::{ChannelScheduler, TimerEvent};
use crate::utilities::event::SimEvent;
use crate::utilities::status::ElevatorStatus;

/// The single decision-loop context. Every mutation of the car, the floor
/// registry and the admission queue happens here, one stimulus at a time:
/// either a new trip from the spawner or a fired timer.
pub fn main(
    config: Config,
    trip_rx: Receiver<(u8, u8)>,
    timer_fired_rx: Receiver<TimerEvent>,
    timer_start_tx: Sender<(Duration, TimerEvent)>,
    event_tx: Sender<SimEvent>,
    status_tx: Sender<ElevatorStatus>,
) {
    let mut scheduler = ChannelScheduler::new(timer_start_tx);
    let mut elevator = Elevator::new(&config.elevator, &config.timing, event_tx);

    loop {
        select! {
            recv(trip_rx) -> msg => {
                let (origin, destination) = msg.unwrap();
                // spawn throttle: a saturated floor takes no new passengers
                if elevator.waiting_count(origin) >= config.spawner.max_queue_per_floor {
                    continue;
                }
                if let Err(error) = elevator.accept_trip(origin, destination, &mut scheduler) {
                    println!("rejected trip {}->{}: {}", origin, destination, error);
                }
            },
            recv(timer_fired_rx) -> msg => {
                elevator
                    .on_timer(msg.unwrap(), &mut scheduler)
                    .expect("simulation state corrupted");
            },
        }
        status_tx.send(elevator.status()).unwrap();
    }
}
