use crate::utilities::direction::Direction;
use crate::utilities::error::SimError;
use crate::utilities::request::{Request, RequestState};

/// Per-floor registry of requests that are not yet inside the car.
/// Each floor keeps its requests in ascending id order, which doubles as
/// boarding order and as the longest-waiting tie-break.
#[derive(Debug, Clone)]
pub struct Building {
    floors: Vec<Vec<Request>>,
}

impl Building {
    pub fn new(num_floors: u8) -> Self {
        Building {
            floors: vec![Vec::new(); num_floors as usize],
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    pub fn place(&mut self, request: Request) {
        let queue = &mut self.floors[request.current_floor as usize];
        let position = queue
            .iter()
            .position(|other| other.id > request.id)
            .unwrap_or(queue.len());
        queue.insert(position, request);
    }

    /// Removes a request from its floor queue and hands it back by value.
    /// The caller takes over ownership; a missing request means the two
    /// collections disagree and the simulation cannot continue.
    pub fn remove(&mut self, floor: u8, id: u64) -> Result<Request, SimError> {
        let queue = &mut self.floors[floor as usize];
        match queue.iter().position(|request| request.id == id) {
            Some(position) => Ok(queue.remove(position)),
            None => Err(SimError::UnknownRequest { id }),
        }
    }

    pub fn requests_at(&self, floor: u8) -> &[Request] {
        &self.floors[floor as usize]
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Request> {
        self.floors
            .iter_mut()
            .flatten()
            .find(|request| request.id == id)
    }

    /// Requests at `floor` that have reached the car and can be admitted,
    /// in ascending id order.
    pub fn boarders_at(&self, floor: u8) -> impl Iterator<Item = &Request> {
        self.floors[floor as usize]
            .iter()
            .filter(|request| request.state == RequestState::Boarding)
    }

    /// Boardable requests at `floor` whose travel direction matches the
    /// filter; `None` matches any direction (empty car).
    pub fn count_boarders_matching(&self, floor: u8, direction: Option<Direction>) -> usize {
        self.boarders_at(floor)
            .filter(|request| direction.map_or(true, |d| request.travel_direction == d))
            .count()
    }

    /// All requests held at `floor`, boardable or still approaching.
    /// Used by the spawn throttle, never by the dispatch policy.
    pub fn waiting_count(&self, floor: u8) -> usize {
        self.floors[floor as usize].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waiting(id: u64, origin: u8, destination: u8) -> Request {
        Request::new(id, origin, destination, 7).unwrap()
    }

    fn boarding(id: u64, origin: u8, destination: u8) -> Request {
        let mut request = waiting(id, origin, destination);
        request.state = RequestState::Boarding;
        request
    }

    #[test]
    fn floor_queues_stay_in_id_order() {
        let mut building = Building::new(7);
        building.place(waiting(5, 3, 0));
        building.place(waiting(2, 3, 6));
        building.place(waiting(9, 3, 1));
        let ids: Vec<u64> = building.requests_at(3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn remove_hands_back_the_request() {
        let mut building = Building::new(7);
        building.place(waiting(1, 2, 5));
        let request = building.remove(2, 1).unwrap();
        assert_eq!(request.id, 1);
        assert!(building.requests_at(2).is_empty());
    }

    #[test]
    fn removing_an_unknown_request_is_an_error() {
        let mut building = Building::new(7);
        assert_eq!(building.remove(2, 42), Err(SimError::UnknownRequest { id: 42 }));
    }

    #[test]
    fn direction_filter_only_counts_matching_boarders() {
        let mut building = Building::new(7);
        building.place(boarding(1, 3, 6));
        building.place(boarding(2, 3, 0));
        building.place(waiting(3, 3, 5)); // still approaching, never counted
        assert_eq!(building.count_boarders_matching(3, Some(Direction::Up)), 1);
        assert_eq!(building.count_boarders_matching(3, Some(Direction::Down)), 1);
        assert_eq!(building.count_boarders_matching(3, None), 2);
    }

    #[test]
    fn waiting_count_includes_approaching_requests() {
        let mut building = Building::new(7);
        building.place(boarding(1, 4, 6));
        building.place(waiting(2, 4, 0));
        assert_eq!(building.waiting_count(4), 2);
        assert_eq!(building.waiting_count(5), 0);
    }
}
