use super::direction::Direction;
use super::request::RequestState;

/// State-change notifications emitted synchronously by the dispatch engine.
/// Presentation code subscribes to these; nothing in the engine waits on a
/// subscriber.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    RequestCreated { id: u64, origin: u8, destination: u8, direction: Direction },
    RequestStateChanged { id: u64, state: RequestState, floor: u8 },
    DirectionChanged { direction: Direction },
    Arrived { floor: u8 },
    DoorsOpened { floor: u8 },
    DoorsClosed { floor: u8 },
    Delivered { id: u64, floor: u8, transported: u32 },
}
