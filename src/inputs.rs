use crossbeam_channel::Sender;
use crossterm::event::{read, Event, KeyCode};

/// Forwards a quit signal when the user presses 'q' or Esc.
pub fn main(quit_tx: Sender<bool>) {
    loop {
        if let Ok(Event::Key(key)) = read() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    quit_tx.send(true).unwrap();
                    return;
                },
                _ => (),
            }
        }
    }
}
