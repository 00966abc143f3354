use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub elevator: HashMap<String, u8>,
    pub timing: HashMap<String, u64>,
    pub spawner: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct ElevatorSettings {
    pub num_floors: u8,
    pub capacity: u8,
}

#[derive(Debug, Clone)]
pub struct TimingSettings {
    pub travel_per_floor: Duration,
    pub door_dwell: Duration,
    pub boarding_walk: Duration,
}

#[derive(Debug, Clone)]
pub struct SpawnerSettings {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub max_queue_per_floor: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub elevator: ElevatorSettings,
    pub timing: TimingSettings,
    pub spawner: SpawnerSettings,
}

fn read_config_file() -> Result<ConfigFile, serde_json::Error> {
    let file_path = "config.json";
    let fallback_file_path = "_config.json";
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(_) => {
            println!("No configuration file provided, using default settings...");
            fs::read_to_string(fallback_file_path).unwrap()
        },
    };
    serde_json::from_str(&config_contents)
}

fn parse_env_args(default_floors: u8, default_capacity: u8) -> (u8, u8) {
    let (mut num_floors, mut capacity) = (default_floors, default_capacity);

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--floors" => {
                num_floors = match arg_pair[1].parse::<u8>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("floors {} is not a number, skipping...", arg_pair[1]);
                        num_floors
                    },
                };
            },
            "--capacity" => {
                capacity = match arg_pair[1].parse::<u8>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("capacity {} is not a number, skipping...", arg_pair[1]);
                        capacity
                    },
                };
            },
            _ => { println!("illegal argument {}, skipping...", arg_pair[0]); },
        }
    }
    (num_floors.clamp(4, 10), capacity.clamp(2, 4))
}

impl Config {
    pub fn get() -> Self {
        let config_file = read_config_file().unwrap();
        let (num_floors, capacity) = parse_env_args(
            config_file.elevator["num_floors"],
            config_file.elevator["capacity"],
        );

        Config {
            elevator: ElevatorSettings {
                num_floors,
                capacity,
            },
            timing: TimingSettings {
                travel_per_floor: Duration::from_millis(config_file.timing["travel_per_floor_ms"]),
                door_dwell: Duration::from_millis(config_file.timing["door_dwell_ms"]),
                boarding_walk: Duration::from_millis(config_file.timing["boarding_walk_ms"]),
            },
            spawner: SpawnerSettings {
                min_delay: Duration::from_millis(config_file.spawner["min_delay_ms"]),
                max_delay: Duration::from_millis(config_file.spawner["max_delay_ms"]),
                max_queue_per_floor: config_file.spawner["max_queue_per_floor"] as usize,
            },
        }
    }
}
