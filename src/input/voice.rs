//! Spoken place names
//!
//! Speech recognition is an outside service; the rest of the crate only sees
//! a [`Transcriber`] handing back one recognized phrase or nothing.

use super::{Console, Prompter};

use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Attempts allowed for each location before a query is abandoned
pub const DEFAULT_ATTEMPTS: usize = 3;


/// Source of transcribed place names
pub trait Transcriber {
    /// Listen for one phrase
    /// None on timeout, unrecognized speech or a service error
    fn listen(&mut self, prompt: &str) -> Option<String>;

    /// Called when a phrase was heard but is not a known location
    fn rejected(&mut self, _heard: &str) {}
}

// Typed lines stand in for speech
impl<R: BufRead, W: Write> Transcriber for Prompter<R, W> {

    fn listen(&mut self, prompt: &str) -> Option<String> {
        match self.ask(prompt) {
            Ok(heard) if !heard.is_empty() => Some(heard),
            Ok(_) => {
                if let Err(e) = self.say("Could not understand. Please try again.") {
                    warn!(error = %e, "could not show message");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "no transcription");
                None
            }
        }
    }

    fn rejected(&mut self, heard: &str) {
        if let Err(e) = self.say(&format!("'{heard}' is not a valid location. Please try again.")) {
            warn!(error = %e, heard, "could not show message");
        }
    }
}


/// Ask for a location until the transcriber returns one accepted by `is_known`
/// Gives up with None after `attempts` tries
pub fn prompt_location<T, K>(transcriber: &mut T, prompt: &str, attempts: usize, is_known: K) -> Option<String>
where
    T: Transcriber + ?Sized,
    K: Fn(&str) -> bool,
{
    for attempt in 1..=attempts {
        match transcriber.listen(prompt) {
            Some(heard) if is_known(&heard) => return Some(heard),
            Some(heard) => {
                debug!(attempt, heard = %heard, "unknown location");
                transcriber.rejected(&heard);
            }
            None => debug!(attempt, "nothing heard"),
        }
    }
    None
}
