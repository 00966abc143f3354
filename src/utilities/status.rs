use super::direction::Direction;

/// Snapshot of the car and the floor queues, sent to the debug display
/// after every handled stimulus.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ElevatorStatus {
    pub floor: u8,
    pub direction: Direction,
    pub next_floor: Option<u8>,
    pub onboard_destinations: Vec<u8>,
    pub waiting_per_floor: Vec<usize>,
    pub transported: u32,
}
