use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Instant;

use arcade_common::games::SessionRng;
use arcade_common::games::reaction::{ReactionPhase, ReactionTimer};

#[derive(Debug, Clone)]
pub struct KeyPress {
    pub at: Instant,
    pub text: String,
}

/// Reads lines on a background thread and stamps each with its arrival
/// time, so a press made while the screen is still red is seen as early.
pub fn spawn_key_listener<R: BufRead + Send + 'static>(input: R) -> Receiver<KeyPress> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in input.lines() {
            let Ok(text) = line else { break };
            let press = KeyPress {
                at: Instant::now(),
                text: text.trim().to_string(),
            };
            if tx.send(press).is_err() {
                break;
            }
        }
    });
    rx
}

fn say<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    writeln!(output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
}

/// Waits out the red phase and returns the phase after the next press,
/// or `None` once input is closed. Presses are judged by their own
/// timestamp, so one made just before `ready_at` stays early even if it is
/// read after the screen turns green.
fn await_press<W: Write>(
    output: &mut W,
    timer: &mut ReactionTimer,
    ready_at: Instant,
    presses: &Receiver<KeyPress>,
) -> Result<Option<ReactionPhase>, String> {
    let wait = ready_at.saturating_duration_since(Instant::now());
    match presses.recv_timeout(wait) {
        Ok(press) => Ok(Some(timer.click(press.at))),
        Err(RecvTimeoutError::Timeout) => {
            say(output, "GREEN! Press Enter now!")?;
            Ok(presses.recv().ok().map(|press| timer.click(press.at)))
        }
        Err(RecvTimeoutError::Disconnected) => Ok(None),
    }
}

/// Plays rounds until `q` or end of input. Returns the measured reaction
/// times of successful rounds.
pub fn run_reaction_game<W: Write>(
    output: &mut W,
    presses: &Receiver<KeyPress>,
    rng: &mut SessionRng,
) -> Result<Vec<u64>, String> {
    let mut results = Vec::new();

    loop {
        say(output, "Press Enter to start, q to quit.")?;
        let Ok(press) = presses.recv() else { break };
        if press.text.eq_ignore_ascii_case("q") {
            break;
        }

        let mut timer = ReactionTimer::new();
        let started = Instant::now();
        let ready_at = started + timer.start(started, rng);
        say(output, "Wait for green...")?;

        let Some(phase) = await_press(output, &mut timer, ready_at, presses)? else {
            break;
        };
        match phase {
            ReactionPhase::TooEarly => say(output, "Too early!")?,
            ReactionPhase::Clicked { reaction_ms } => {
                say(output, &format!("Reaction time: {} ms", reaction_ms))?;
                results.push(reaction_ms);
            }
            ReactionPhase::Idle | ReactionPhase::Waiting { .. } | ReactionPhase::Ready { .. } => {}
        }

        // Extra presses from the finished round must not start the next one.
        while presses.try_recv().is_ok() {}
    }

    Ok(results)
}
