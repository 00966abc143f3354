use std::time::{Duration, Instant};

use crossbeam_channel::{select, Receiver, Sender};

/// Callbacks the dispatch engine schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    PassengerReady(u64),
    TravelFinished,
    DoorsClosing,
}

/// The engine never sleeps; it asks a scheduler to fire an event after a
/// duration and reacts when the event comes back. The runtime scheduler
/// goes through the timer thread, tests substitute a manual one.
pub trait Scheduler {
    fn after(&mut self, duration: Duration, event: TimerEvent);
}

pub struct ChannelScheduler {
    timer_start_tx: Sender<(Duration, TimerEvent)>,
}

impl ChannelScheduler {
    pub fn new(timer_start_tx: Sender<(Duration, TimerEvent)>) -> Self {
        ChannelScheduler { timer_start_tx }
    }
}

impl Scheduler for ChannelScheduler {
    fn after(&mut self, duration: Duration, event: TimerEvent) {
        self.timer_start_tx.send((duration, event)).unwrap();
    }
}

const IDLE_POLL: Duration = Duration::from_millis(250);

pub fn main(
    timer_start_rx: Receiver<(Duration, TimerEvent)>,
    timer_fired_tx: Sender<TimerEvent>,
) {
    let mut pending: Vec<(Instant, TimerEvent)> = Vec::new();

    loop {
        let timeout = pending
            .iter()
            .map(|(due, _)| due.saturating_duration_since(Instant::now()))
            .min()
            .unwrap_or(IDLE_POLL);

        select! {
            recv(timer_start_rx) -> msg => {
                let (duration, event) = msg.unwrap();
                pending.push((Instant::now() + duration, event));
            },
            default(timeout) => (),
        }

        pending.sort_by_key(|(due, _)| *due);
        while pending.first().map_or(false, |(due, _)| *due <= Instant::now()) {
            let (_, event) = pending.remove(0);
            timer_fired_tx.send(event).unwrap();
        }
    }
}

#[cfg(test)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, TimerEvent)>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler { now: Duration::ZERO, pending: Vec::new() }
    }

    /// Advances the simulated clock to the earliest pending deadline and
    /// returns its event. Equal deadlines fire in scheduling order.
    pub fn fire_next(&mut self) -> Option<TimerEvent> {
        if self.pending.is_empty() {
            return None;
        }
        let mut earliest = 0;
        for index in 1..self.pending.len() {
            if self.pending[index].0 < self.pending[earliest].0 {
                earliest = index;
            }
        }
        let (due, event) = self.pending.remove(earliest);
        self.now = due;
        Some(event)
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn after(&mut self, duration: Duration, event: TimerEvent) {
        self.pending.push((self.now + duration, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_fires_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.after(Duration::from_millis(500), TimerEvent::DoorsClosing);
        scheduler.after(Duration::from_millis(100), TimerEvent::TravelFinished);
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::TravelFinished));
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::DoorsClosing));
        assert_eq!(scheduler.fire_next(), None);
    }

    #[test]
    fn manual_scheduler_breaks_ties_by_scheduling_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.after(Duration::from_millis(900), TimerEvent::PassengerReady(1));
        scheduler.after(Duration::from_millis(900), TimerEvent::PassengerReady(2));
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::PassengerReady(1)));
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::PassengerReady(2)));
    }

    #[test]
    fn later_events_are_relative_to_the_advanced_clock() {
        let mut scheduler = ManualScheduler::new();
        scheduler.after(Duration::from_millis(600), TimerEvent::TravelFinished);
        scheduler.fire_next();
        scheduler.after(Duration::from_millis(100), TimerEvent::DoorsClosing);
        scheduler.after(Duration::from_millis(50), TimerEvent::PassengerReady(7));
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::PassengerReady(7)));
        assert_eq!(scheduler.fire_next(), Some(TimerEvent::DoorsClosing));
    }
}
