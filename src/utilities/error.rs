#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("floor {floor} is outside the building (0..{num_floors})")]
    InvalidFloor { floor: u8, num_floors: u8 },

    #[error("trip starts and ends at floor {floor}")]
    DegenerateTrip { floor: u8 },

    // The two below indicate a logic bug in the engine, never bad input.
    #[error("car holds more passengers than its capacity of {capacity}")]
    CapacityExceeded { capacity: u8 },

    #[error("request {id} is missing from the collection that should own it")]
    UnknownRequest { id: u64 },
}
