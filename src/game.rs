//! Game controller: roster, round state and the round clock.
//!
//! Owns the only [`TickTimer`]. Starting a round drops the previous timer
//! before spawning a new one, and a terminal guess drops it exactly once, so
//! at most one ticker is ever alive.

use phee_core::{GuessOutcome, Roster, Session, SessionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, instrument};

use crate::timer::{TICK_PERIOD, TickTimer};

/// Events delivered to the game loop.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The roster fetch finished (possibly empty on failure).
    RosterLoaded(Roster),
    /// One second passed for the given round.
    Tick {
        /// Round the tick belongs to.
        round: u64,
    },
}

/// Game controller.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    roster: Roster,
    session: Session,
    rng: R,
    round: u64,
    timer: Option<TickTimer>,
    events: mpsc::UnboundedSender<GameEvent>,
    tick_period: Duration,
}

impl Game<StdRng> {
    /// Creates a controller with an OS-seeded RNG and no roster yet.
    pub fn new(events: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self::with_rng(events, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a controller with the given RNG.
    pub fn with_rng(events: mpsc::UnboundedSender<GameEvent>, rng: R) -> Self {
        Self {
            roster: Roster::default(),
            session: Session::new(),
            rng,
            round: 0,
            timer: None,
            events,
            tick_period: TICK_PERIOD,
        }
    }

    /// Overrides the clock period.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// The loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current round state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of rounds started so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// True while a ticker is alive.
    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Applies an event from the loop.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), SessionError> {
        match event {
            GameEvent::RosterLoaded(roster) => self.load_roster(roster),
            GameEvent::Tick { round } => {
                self.on_tick(round);
                Ok(())
            }
        }
    }

    /// Installs the roster and starts the first round.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyRoster`] when nothing was loaded. Any running
    /// round is abandoned and the game stays idle.
    #[instrument(skip(self, roster), fields(roster_len = roster.len()))]
    pub fn load_roster(&mut self, roster: Roster) -> Result<(), SessionError> {
        info!("Roster installed");
        self.roster = roster;
        if self.roster.is_empty() {
            self.stop_timer();
            self.session = Session::new();
            return Err(SessionError::EmptyRoster);
        }
        self.play_again()
    }

    /// Draws a new target from the loaded roster and restarts the clock.
    ///
    /// Never re-fetches the roster.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.session.pick_random_target(&self.roster, &mut self.rng)?;
        self.start_timer();
        Ok(())
    }

    /// Submits a typed name. Stops the clock when the round ends.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, raw_name: &str) -> GuessOutcome {
        let outcome = self.session.submit_guess(&self.roster, raw_name);
        if outcome.is_terminal() {
            self.stop_timer();
        }
        outcome
    }

    /// Flips the silhouette reveal.
    pub fn toggle_silhouette(&mut self) -> bool {
        self.session.toggle_silhouette()
    }

    /// Counts a tick if it belongs to the running round.
    ///
    /// Ticks that were queued before their timer was dropped are discarded.
    pub fn on_tick(&mut self, round: u64) -> bool {
        match &self.timer {
            Some(timer) if timer.round() == round => self.session.tick(),
            _ => {
                debug!(round, current = self.round, "Discarding stale tick");
                false
            }
        }
    }

    fn start_timer(&mut self) {
        // Drop the old ticker before the new one exists.
        self.timer = None;
        self.round += 1;
        self.timer = Some(TickTimer::start(
            self.round,
            self.tick_period,
            self.events.clone(),
        ));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            info!(round = timer.round(), elapsed = *self.session.elapsed(), "Round clock stopped");
        }
    }
}
