//! Transition timers on a virtual clock
//!
//! Nothing here sleeps. The host advances the clock from its own event
//! loop (frame callback, tick message, test) and gets back the messages
//! whose timers came due, in firing order.

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::Msg;

#[derive(Debug, Clone)]
struct Timer {
    due: Duration,
    /// Insertion order, breaks ties between timers due at the same instant
    seq: u64,
    msg: Msg,
}

/// Pending transition timers
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    seq: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue the timers a command asks for
    pub fn schedule(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.schedule(cmd);
                }
            }
            Cmd::CompleteTransition {
                panel_id,
                generation,
                delay_ms,
            } => {
                self.seq += 1;
                self.pending.push(Timer {
                    due: self.now + Duration::from_millis(delay_ms),
                    seq: self.seq,
                    msg: Msg::TransitionComplete {
                        panel_id,
                        generation,
                    },
                });
            }
        }
    }

    /// Move the clock forward, returning messages for every timer now due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Msg> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.pending.drain(..).partition(|timer| timer.due <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.due, timer.seq));
        due.into_iter().map(|timer| timer.msg).collect()
    }

    /// Time until the next timer fires, if any are pending
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|timer| timer.due.saturating_sub(self.now))
            .min()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
