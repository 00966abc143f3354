use std::thread;

use crossbeam_channel::{select, unbounded};

pub mod building;
pub mod config;
pub mod debug;
pub mod elevator;
pub mod fsm;
pub mod inputs;
pub mod spawner;
pub mod timer;
pub mod utilities;

fn main() {
    // READ CONFIGURATION
    let config = config::Config::get();

    // INITIALIZE CHANNELS
    let (trip_tx, trip_rx) = unbounded();
    let (timer_start_tx, timer_start_rx) = unbounded();
    let (timer_fired_tx, timer_fired_rx) = unbounded();
    let (event_tx, event_rx) = unbounded();
    let (status_tx, status_rx) = unbounded();
    let (quit_tx, quit_rx) = unbounded();

    // INITIALIZE THREAD FOR TIMERS
    thread::spawn(move || timer::main(timer_start_rx, timer_fired_tx));

    // INITIALIZE THREAD FOR PASSENGER SPAWNING
    {
        let settings = config.spawner.clone();
        let num_floors = config.elevator.num_floors;
        thread::spawn(move || spawner::main(num_floors, settings, trip_tx));
    }

    // INITIALIZE THREAD FOR THE DISPATCH ENGINE
    {
        let config = config.clone();
        thread::spawn(move || fsm::main(
            config,
            trip_rx,
            timer_fired_rx,
            timer_start_tx,
            event_tx,
            status_tx,
        ));
    }

    // INITIALIZE THREAD FOR STATUS DISPLAY
    {
        let num_floors = config.elevator.num_floors;
        thread::spawn(move || debug::main(num_floors, status_rx, event_rx));
    }

    // INITIALIZE THREAD FOR KEYBOARD INPUT
    thread::spawn(move || inputs::main(quit_tx));

    loop {
        select! {
            recv(quit_rx) -> _ => {
                println!("STOPPING SIMULATION...");
                return
            }
        }
    }
}
