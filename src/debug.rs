use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};

use crossbeam_channel::{select, Receiver};
use crossterm::{cursor, terminal, ExecutableCommand, Result};

use crate::utilities::event::SimEvent;
use crate::utilities::status::ElevatorStatus;

const EVENT_LOG_SIZE: usize = 5;

pub fn main(
    num_floors: u8,
    status_rx: Receiver<ElevatorStatus>,
    event_rx: Receiver<SimEvent>,
) -> Result<()> {
    let mut stdout = stdout();

    let mut status: Option<ElevatorStatus> = None;
    let mut recent_events: VecDeque<String> = VecDeque::new();

    loop {
        select! {
            recv(status_rx) -> msg => {
                status = Some(msg.unwrap());
            },
            recv(event_rx) -> msg => {
                recent_events.push_back(format!("{:?}", msg.unwrap()));
                if recent_events.len() > EVENT_LOG_SIZE {
                    recent_events.pop_front();
                }
            },
        }
        if let Some(status) = &status {
            printstatus(&mut stdout, num_floors, status, &recent_events)?;
        }
    }
}

fn printstatus(
    stdout: &mut Stdout,
    num_floors: u8,
    status: &ElevatorStatus,
    recent_events: &VecDeque<String>,
) -> Result<()> {
    stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    let mut lines: u16 = 0;

    writeln!(stdout, "+------------------------------------------------------+")?;
    writeln!(stdout, "| ELEVATOR                                             |")?;
    writeln!(stdout, "+------------+------------+------------+---------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<13} |", "FLOOR", "DIRECTION", "NEXT", "TRANSPORTED")?;
    writeln!(stdout, "+------------+------------+------------+---------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<13} |",
        status.floor,
        status.direction.as_str(),
        status.next_floor.map_or(String::from("-"), |floor| floor.to_string()),
        status.transported)?;
    writeln!(stdout, "+------------+------------+------------+---------------+")?;
    writeln!(stdout, "| ONBOARD: {0:<43} |", format!("{:?}", status.onboard_destinations))?;
    writeln!(stdout, "+------------------------------------------------------+")?;
    lines += 9;

    writeln!(stdout, "| {0:<10} | {1:<39} |", "FLOOR", "WAITING")?;
    for floor in (0..num_floors).rev() {
        writeln!(stdout, "| {0:<10} | {1:<39} |",
            floor,
            "#".repeat(status.waiting_per_floor[floor as usize]))?;
        lines += 1;
    }
    writeln!(stdout, "+------------------------------------------------------+")?;
    lines += 2;

    for event in recent_events {
        writeln!(stdout, "  {}", event)?;
        lines += 1;
    }

    stdout.execute(cursor::MoveUp(lines))?;
    Ok(())
}
