//! A game session: one live state plus its observers

use log::trace;

use super::observers::{JsonlObserver, LogObserver};
use crate::{
    Error, Result,
    config::SessionConfig,
    ports::Observer,
    tictactoe::{Action, Event, GameState, Player, Snapshot},
};

/// What happened to a dispatched action
#[derive(Debug)]
pub enum Outcome {
    /// The action changed the state.
    Applied(Event),
    /// The engine rejected the action; the state is unchanged.
    Ignored(Error),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Exclusive owner of one game state.
///
/// All mutation goes through `&mut self`, so a session is the single
/// serialization point for its game. Observer failures are the only errors a
/// session reports; rule violations come back as [`Outcome::Ignored`].
///
/// # Examples
///
/// ```
/// use t3::session::{Outcome, Session};
/// use t3::tictactoe::{Action, Player};
///
/// let mut session = Session::new(Player::X);
/// assert!(session.dispatch(Action::Place(4))?.is_applied());
/// assert!(matches!(session.dispatch(Action::Place(4))?, Outcome::Ignored(_)));
/// assert_eq!(session.state().current(), Player::O);
/// session.finish()?;
/// # Ok::<(), t3::Error>(())
/// ```
pub struct Session {
    state: GameState,
    observers: Vec<Box<dyn Observer>>,
    started: bool,
    finished: bool,
}

impl Session {
    /// Create a session with no observers
    pub fn new(first_player: Player) -> Self {
        Self {
            state: GameState::new_with_player(first_player),
            observers: Vec::new(),
            started: false,
            finished: false,
        }
    }

    /// Create a session and attach the observers the configuration asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the transcript file
    /// cannot be created.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(config.first_player);
        if config.log_events {
            session = session.with_observer(Box::new(LogObserver::new()));
        }
        if let Some(path) = &config.transcript {
            session = session.with_observer(Box::new(JsonlObserver::create(path)?));
        }
        Ok(session)
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Announce the initial state to observers. Called implicitly by the first
    /// dispatch; calling it again has no effect.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        let state = &self.state;
        notify_all(&mut self.observers, |o| o.on_session_start(state))
    }

    /// Apply an action and notify observers.
    ///
    /// The new state is committed before observers run. If any observer
    /// fails, the rest are still notified and the first error is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        self.start()?;
        trace!("dispatching {action}");

        let step = match self.state.try_apply(action) {
            Ok(step) => step,
            Err(reason) if reason.is_rejection() => {
                let state = &self.state;
                notify_all(&mut self.observers, |o| o.on_ignored(state, action, &reason))?;
                return Ok(Outcome::Ignored(reason));
            }
            Err(other) => return Err(other),
        };

        self.state = step.state;
        let state = &self.state;
        match step.event {
            Event::Placed {
                placed,
                evicted,
                winner,
            } => notify_all(&mut self.observers, |o| {
                o.on_placed(state, placed, evicted)?;
                match &winner {
                    Some(win) => o.on_win(state, win),
                    None => Ok(()),
                }
            })?,
            Event::Undone { undone } => {
                notify_all(&mut self.observers, |o| o.on_undone(state, undone))?
            }
            Event::Reset => notify_all(&mut self.observers, |o| o.on_reset(state))?,
        }

        Ok(Outcome::Applied(step.event))
    }

    pub fn place(&mut self, idx: usize) -> Result<Outcome> {
        self.dispatch(Action::Place(idx))
    }

    pub fn undo(&mut self) -> Result<Outcome> {
        self.dispatch(Action::Undo)
    }

    pub fn reset(&mut self) -> Result<Outcome> {
        self.dispatch(Action::Reset)
    }

    /// Tell observers the session is over. Calling it again has no effect.
    pub fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        let started = self.start();
        self.finished = true;
        let state = &self.state;
        let ended = notify_all(&mut self.observers, |o| o.on_session_end(state));
        started.and(ended)
    }
}

/// Deliver one event to every observer, then report the first failure.
///
/// A failing observer does not stop later observers from seeing the event.
fn notify_all<F>(observers: &mut [Box<dyn Observer>], mut notify: F) -> Result<()>
where
    F: FnMut(&mut dyn Observer) -> Result<()>,
{
    let mut first_error = None;
    for observer in observers.iter_mut() {
        if let Err(err) = notify(observer.as_mut()) {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{tictactoe::Move, types::Position};

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl Observer for Recorder {
        fn on_session_start(&mut self, _state: &GameState) -> Result<()> {
            self.push("start".to_string());
            Ok(())
        }

        fn on_placed(
            &mut self,
            _state: &GameState,
            placed: Move,
            evicted: Option<Position>,
        ) -> Result<()> {
            self.push(format!("placed {} {:?}", placed.position, evicted.map(|p| p.value())));
            Ok(())
        }

        fn on_win(&mut self, _state: &GameState, win: &crate::tictactoe::WinResult) -> Result<()> {
            self.push(format!("win {}", win.player));
            Ok(())
        }

        fn on_undone(&mut self, _state: &GameState, undone: Move) -> Result<()> {
            self.push(format!("undone {}", undone.position));
            Ok(())
        }

        fn on_reset(&mut self, _state: &GameState) -> Result<()> {
            self.push("reset".to_string());
            Ok(())
        }

        fn on_ignored(&mut self, _state: &GameState, action: Action, _reason: &Error) -> Result<()> {
            self.push(format!("ignored {action}"));
            Ok(())
        }

        fn on_session_end(&mut self, _state: &GameState) -> Result<()> {
            self.push("end".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_event_sequence() {
        let recorder = Recorder::default();
        let mut session = Session::new(Player::X).with_observer(Box::new(recorder.clone()));

        for idx in [0, 3, 1, 4] {
            session.place(idx).unwrap();
        }
        session.undo().unwrap();
        session.place(4).unwrap();
        session.place(2).unwrap();
        session.place(5).unwrap();
        session.reset().unwrap();
        session.finish().unwrap();
        session.finish().unwrap();

        assert_eq!(
            recorder.take(),
            vec![
                "start",
                "placed 0 None",
                "placed 3 None",
                "placed 1 None",
                "placed 4 None",
                "undone 4",
                "placed 4 None",
                "placed 2 None",
                "win X",
                "ignored place 5",
                "reset",
                "end",
            ]
        );
    }

    #[test]
    fn test_ignored_actions_leave_state() {
        let mut session = Session::new(Player::O);
        let before = session.state().clone();

        let outcome = session.undo().unwrap();
        assert!(matches!(outcome, Outcome::Ignored(Error::NothingToUndo)));
        let outcome = session.place(11).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Ignored(Error::InvalidPosition { position: 11 })
        ));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_from_config_uses_first_player() {
        let config = SessionConfig::default()
            .with_first_player(Player::O)
            .with_log_events(false);
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.state().current(), Player::O);
        assert_eq!(session.snapshot().to_move, Some(Player::O));
    }

    /// Observer that rejects every placement.
    struct FailingOnPlace;

    impl Observer for FailingOnPlace {
        fn on_placed(
            &mut self,
            _state: &GameState,
            _placed: Move,
            _evicted: Option<Position>,
        ) -> Result<()> {
            Err(std::io::Error::other("sink unavailable").into())
        }
    }

    #[test]
    fn test_failing_observer_does_not_starve_later_ones() {
        let recorder = Recorder::default();
        let mut session = Session::new(Player::X)
            .with_observer(Box::new(FailingOnPlace))
            .with_observer(Box::new(recorder.clone()));

        let err = session.place(4).unwrap_err();
        assert!(err.to_string().contains("sink unavailable"));

        // The state change stands and the second observer saw it.
        assert_eq!(session.state().cell(4), Some(crate::tictactoe::Cell::X));
        assert_eq!(recorder.take(), vec!["start", "placed 4 None"]);

        session.finish().unwrap();
        assert_eq!(recorder.take(), vec!["end"]);
    }
}
