#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Stop,
    Up,
}

impl Direction {
    pub fn of_travel(origin: u8, destination: u8) -> Self {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Stop => Direction::Stop,
            Direction::Up => Direction::Down,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Stop => "stop",
            Direction::Up => "up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn travel_direction_follows_destination() {
        assert_eq!(Direction::of_travel(0, 3), Direction::Up);
        assert_eq!(Direction::of_travel(5, 1), Direction::Down);
    }

    #[test]
    fn opposite_swaps_up_and_down() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Stop.opposite(), Direction::Stop);
    }
}
