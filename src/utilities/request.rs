use super::direction::Direction;
use super::error::SimError;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Waiting,
    Boarding,
    Onboard,
    Delivered,
}

/// A passenger trip from an origin floor to a destination floor.
/// The trip itself is fixed at creation; only `state` and `current_floor`
/// change as the passenger moves through the system.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: u64,
    pub origin_floor: u8,
    pub destination_floor: u8,
    pub travel_direction: Direction,
    pub state: RequestState,
    pub current_floor: u8,
}

impl Request {
    pub fn new(id: u64, origin: u8, destination: u8, num_floors: u8) -> Result<Self, SimError> {
        if origin >= num_floors {
            return Err(SimError::InvalidFloor { floor: origin, num_floors });
        }
        if destination >= num_floors {
            return Err(SimError::InvalidFloor { floor: destination, num_floors });
        }
        if origin == destination {
            return Err(SimError::DegenerateTrip { floor: origin });
        }
        Ok(Request {
            id,
            origin_floor: origin,
            destination_floor: destination,
            travel_direction: Direction::of_travel(origin, destination),
            state: RequestState::Waiting,
            current_floor: origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_starts_waiting_at_its_origin() {
        let request = Request::new(1, 2, 5, 7).unwrap();
        assert_eq!(request.travel_direction, Direction::Up);
        assert_eq!(request.state, RequestState::Waiting);
        assert_eq!(request.current_floor, 2);
    }

    #[test]
    fn downward_trip_derives_down() {
        let request = Request::new(1, 6, 0, 7).unwrap();
        assert_eq!(request.travel_direction, Direction::Down);
    }

    #[test]
    fn out_of_bounds_floors_are_rejected() {
        assert_eq!(
            Request::new(1, 7, 0, 7),
            Err(SimError::InvalidFloor { floor: 7, num_floors: 7 })
        );
        assert_eq!(
            Request::new(1, 0, 9, 7),
            Err(SimError::InvalidFloor { floor: 9, num_floors: 7 })
        );
    }

    #[test]
    fn degenerate_trip_is_rejected() {
        assert_eq!(Request::new(1, 2, 2, 7), Err(SimError::DegenerateTrip { floor: 2 }));
    }
}
