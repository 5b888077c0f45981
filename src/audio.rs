/// Sound shell. The terminal has no mixer, so cues that mark a phase change
/// ring the bell and the rest are only logged.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};
use laser_dodger::entities::Sound;

const BELL: &str = "\x07";

pub fn play<W: Write>(out: &mut W, sound: Sound) -> std::io::Result<()> {
    log::debug!("sound: {:?}", sound);
    match sound {
        Sound::Countdown | Sound::GameOver => {
            out.queue(Print(BELL))?;
        }
        Sound::Laser => {}
    }
    Ok(())
}

/// Play everything the game queued this frame.
pub fn play_all<W: Write>(out: &mut W, sounds: &[Sound]) -> std::io::Result<()> {
    for &sound in sounds {
        play(out, sound)?;
    }
    Ok(())
}
