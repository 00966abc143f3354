use std::time::Duration;

use crossbeam_channel::Sender;

use crate::building::Building;
use crate::config::{ElevatorSettings, TimingSettings};
use crate::timer::{Scheduler, TimerEvent};
use crate::utilities::direction::Direction;
use crate::utilities::error::SimError;
use crate::utilities::event::SimEvent;
use crate::utilities::request::{Request, RequestState};
use crate::utilities::status::ElevatorStatus;

/// The dispatch engine. Owns the car state, the onboard passengers and the
/// floor registry, and runs the SCAN sweep: serve everything in the current
/// direction, reverse once the sweep is exhausted, park when nothing is left.
///
/// All methods run on the fsm thread, so one decision is in flight at a
/// time. Time never passes inside the engine; travel and door dwell go
/// through the injected scheduler and come back as `TimerEvent`s.
pub struct Elevator {
    building: Building,
    current_floor: u8,
    direction: Direction,
    next_floor: Option<u8>,
    onboard: Vec<Request>,
    boarding_queue: Vec<u64>,
    moving: bool,
    capacity: u8,
    travel_per_floor: Duration,
    door_dwell: Duration,
    boarding_walk: Duration,
    next_request_id: u64,
    transported: u32,
    event_tx: Sender<SimEvent>,
}

impl Elevator {
    pub fn new(
        settings: &ElevatorSettings,
        timing: &TimingSettings,
        event_tx: Sender<SimEvent>,
    ) -> Self {
        Elevator {
            building: Building::new(settings.num_floors),
            current_floor: 0,
            direction: Direction::Stop,
            next_floor: None,
            onboard: Vec::new(),
            boarding_queue: Vec::new(),
            moving: false,
            capacity: settings.capacity,
            travel_per_floor: timing.travel_per_floor,
            door_dwell: timing.door_dwell,
            boarding_walk: timing.boarding_walk,
            next_request_id: 1,
            transported: 0,
            event_tx,
        }
    }

    /// Validates a trip and places it in the floor registry as `Waiting`.
    /// The passenger walks to the car for `boarding_walk`, after which the
    /// `PassengerReady` callback puts it in the admission queue.
    pub fn accept_trip(
        &mut self,
        origin: u8,
        destination: u8,
        scheduler: &mut dyn Scheduler,
    ) -> Result<u64, SimError> {
        let request = Request::new(self.next_request_id, origin, destination, self.building.num_floors())?;
        let id = request.id;
        self.next_request_id += 1;
        self.event_tx
            .send(SimEvent::RequestCreated {
                id,
                origin,
                destination,
                direction: request.travel_direction,
            })
            .unwrap();
        self.building.place(request);
        scheduler.after(self.boarding_walk, TimerEvent::PassengerReady(id));
        Ok(id)
    }

    pub fn on_timer(
        &mut self,
        event: TimerEvent,
        scheduler: &mut dyn Scheduler,
    ) -> Result<(), SimError> {
        match event {
            TimerEvent::PassengerReady(id) => self.enqueue_boarder(id, scheduler),
            TimerEvent::TravelFinished => self.finish_travel(scheduler),
            TimerEvent::DoorsClosing => self.close_doors(scheduler),
        }
    }

    /// A passenger has reached the boarding area. Only now does the request
    /// become visible to the dispatch policy; an admission arriving while
    /// the car is moving is deferred until the current stop completes.
    fn enqueue_boarder(
        &mut self,
        id: u64,
        scheduler: &mut dyn Scheduler,
    ) -> Result<(), SimError> {
        let floor = match self.building.find_mut(id) {
            Some(request) if request.state == RequestState::Waiting => {
                request.state = RequestState::Boarding;
                request.current_floor
            }
            _ => return Ok(()),
        };
        self.event_tx
            .send(SimEvent::RequestStateChanged { id, state: RequestState::Boarding, floor })
            .unwrap();
        if !self.boarding_queue.contains(&id) {
            self.boarding_queue.push(id);
        }
        if self.direction == Direction::Stop && !self.moving {
            self.update_direction(scheduler)?;
        }
        Ok(())
    }

    /// Direction selection: an empty car follows the longest-waiting queued
    /// passenger, a stopped car with passengers heads toward the first
    /// onboard destination. Then recompute the target and start moving.
    fn update_direction(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), SimError> {
        if self.onboard.is_empty() && !self.boarding_queue.is_empty() {
            let id = *self.boarding_queue.iter().min().unwrap();
            let request = self
                .building
                .find_mut(id)
                .ok_or(SimError::UnknownRequest { id })?;
            let direction = request.travel_direction;
            self.set_direction(direction);
        } else if self.direction == Direction::Stop && !self.onboard.is_empty() {
            let destination = self.onboard[0].destination_floor;
            self.set_direction(Direction::of_travel(self.current_floor, destination));
        }
        self.next_floor = self.choose_next_floor();
        if self.next_floor.is_some() && !self.moving {
            self.travel(scheduler)?;
        }
        Ok(())
    }

    /// A floor has action when somebody onboard exits there, or when there
    /// is free capacity and a boardable request there matches the car's
    /// direction (any direction while the car is empty). A full car passes
    /// boarder-only floors by.
    fn has_action_at(&self, floor: u8) -> bool {
        let somebody_exits = self
            .onboard
            .iter()
            .any(|request| request.destination_floor == floor);
        let filter = if self.onboard.is_empty() { None } else { Some(self.direction) };
        let somebody_boards = self.free_capacity() > 0
            && self.building.count_boarders_matching(floor, filter) > 0;
        somebody_exits || somebody_boards
    }

    /// SCAN floor selection. Never leaves a floor with unfinished business,
    /// otherwise takes the first actionable floor strictly ahead, reversing
    /// once before giving up. The direction is updated before each scan so
    /// the matching rule sees the direction the car would travel in.
    fn choose_next_floor(&mut self) -> Option<u8> {
        if self.has_action_at(self.current_floor) {
            return Some(self.current_floor);
        }
        if let Some(floor) = self.scan_ahead(self.direction) {
            return Some(floor);
        }
        self.set_direction(self.direction.opposite());
        if let Some(floor) = self.scan_ahead(self.direction) {
            return Some(floor);
        }
        self.set_direction(Direction::Stop);
        None
    }

    fn scan_ahead(&self, direction: Direction) -> Option<u8> {
        match direction {
            Direction::Up => {
                (self.current_floor + 1..self.building.num_floors()).find(|&f| self.has_action_at(f))
            }
            Direction::Down => (0..self.current_floor).rev().find(|&f| self.has_action_at(f)),
            Direction::Stop => None,
        }
    }

    fn travel(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), SimError> {
        let next = match self.next_floor {
            Some(floor) => floor,
            None => return Ok(()), // parked until the next admission
        };
        if next == self.current_floor {
            return self.stop_at_floor(scheduler);
        }
        self.moving = true;
        let distance = u32::from(next.abs_diff(self.current_floor));
        scheduler.after(self.travel_per_floor * distance, TimerEvent::TravelFinished);
        Ok(())
    }

    fn finish_travel(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), SimError> {
        let next = match self.next_floor {
            Some(floor) => floor,
            None => return Ok(()),
        };
        self.moving = false;
        self.current_floor = next;
        for request in &mut self.onboard {
            request.current_floor = next;
        }
        self.event_tx.send(SimEvent::Arrived { floor: next }).unwrap();
        self.stop_at_floor(scheduler)
    }

    /// Settles the car at the current floor: exits first, then admissions
    /// in ascending id order up to free capacity. If that made progress and
    /// the floor still has action (exits freed capacity for more boarders),
    /// settle again in place; otherwise hold the doors for the dwell time.
    fn stop_at_floor(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), SimError> {
        let floor = self.current_floor;
        let mut progressed = false;

        let mut index = 0;
        while index < self.onboard.len() {
            if self.onboard[index].destination_floor == floor {
                let request = self.onboard.remove(index);
                self.deliver(request);
                progressed = true;
            } else {
                index += 1;
            }
        }

        let filter = if self.onboard.is_empty() { None } else { Some(self.direction) };
        let free = self.free_capacity() as usize;
        let admitted: Vec<u64> = self
            .building
            .boarders_at(floor)
            .filter(|request| filter.map_or(true, |d| request.travel_direction == d))
            .take(free)
            .map(|request| request.id)
            .collect();
        for id in admitted {
            self.board(id, floor)?;
            progressed = true;
        }
        if self.onboard.len() > self.capacity as usize {
            return Err(SimError::CapacityExceeded { capacity: self.capacity });
        }

        if progressed && self.has_action_at(floor) {
            self.next_floor = self.choose_next_floor();
            return self.travel(scheduler);
        }

        self.event_tx.send(SimEvent::DoorsOpened { floor }).unwrap();
        scheduler.after(self.door_dwell, TimerEvent::DoorsClosing);
        Ok(())
    }

    fn close_doors(&mut self, scheduler: &mut dyn Scheduler) -> Result<(), SimError> {
        self.event_tx
            .send(SimEvent::DoorsClosed { floor: self.current_floor })
            .unwrap();
        self.update_direction(scheduler)
    }

    /// Single atomic handoff: the request leaves the floor registry and
    /// enters the onboard set in one step.
    fn board(&mut self, id: u64, floor: u8) -> Result<(), SimError> {
        let mut request = self.building.remove(floor, id)?;
        request.state = RequestState::Onboard;
        self.boarding_queue.retain(|&queued| queued != id);
        self.event_tx
            .send(SimEvent::RequestStateChanged { id, state: RequestState::Onboard, floor })
            .unwrap();
        self.onboard.push(request);
        Ok(())
    }

    fn deliver(&mut self, mut request: Request) {
        request.state = RequestState::Delivered;
        request.current_floor = self.current_floor;
        self.transported += 1;
        self.event_tx
            .send(SimEvent::RequestStateChanged {
                id: request.id,
                state: RequestState::Delivered,
                floor: request.current_floor,
            })
            .unwrap();
        self.event_tx
            .send(SimEvent::Delivered {
                id: request.id,
                floor: request.current_floor,
                transported: self.transported,
            })
            .unwrap();
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            self.direction = direction;
            self.event_tx.send(SimEvent::DirectionChanged { direction }).unwrap();
        }
    }

    fn free_capacity(&self) -> u8 {
        self.capacity - self.onboard.len() as u8
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_floor(&self) -> Option<u8> {
        self.next_floor
    }

    pub fn onboard_destinations(&self) -> Vec<u8> {
        self.onboard.iter().map(|request| request.destination_floor).collect()
    }

    pub fn waiting_count(&self, floor: u8) -> usize {
        self.building.waiting_count(floor)
    }

    /// Requests still outside the car at `floor`, in boarding order.
    pub fn waiting_at(&self, floor: u8) -> &[Request] {
        self.building.requests_at(floor)
    }

    pub fn transported(&self) -> u32 {
        self.transported
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            floor: self.current_floor,
            direction: self.direction,
            next_floor: self.next_floor,
            onboard_destinations: self.onboard_destinations(),
            waiting_per_floor: (0..self.building.num_floors())
                .map(|floor| self.building.waiting_count(floor))
                .collect(),
            transported: self.transported,
        }
    }
}
