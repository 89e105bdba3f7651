//! Observer adapters for game sessions
//!
//! Observers allow composable data collection during a session without
//! coupling the engine to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{Action, GameState, Move, Player, Snapshot, WinResult},
    types::Position,
};

/// Log observer - reports session events through the `log` facade
///
/// State changes and wins are logged at `info`, ignored actions at `debug`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn on_session_start(&mut self, state: &GameState) -> Result<()> {
        info!("session started, {} to move", state.current());
        Ok(())
    }

    fn on_placed(&mut self, state: &GameState, placed: Move, evicted: Option<Position>) -> Result<()> {
        match evicted {
            Some(old) => info!(
                "{} placed at {}, oldest mark at {} removed (board {})",
                placed.player,
                placed.position,
                old,
                state.board().encode()
            ),
            None => info!(
                "{} placed at {} (board {})",
                placed.player,
                placed.position,
                state.board().encode()
            ),
        }
        Ok(())
    }

    fn on_win(&mut self, _state: &GameState, win: &WinResult) -> Result<()> {
        info!("{} wins on {:?}", win.player, win.cells);
        Ok(())
    }

    fn on_undone(&mut self, state: &GameState, undone: Move) -> Result<()> {
        info!(
            "undid {} at {}, {} to move",
            undone.player,
            undone.position,
            state.current()
        );
        Ok(())
    }

    fn on_reset(&mut self, state: &GameState) -> Result<()> {
        info!("game reset, {} to move", state.current());
        Ok(())
    }

    fn on_ignored(&mut self, _state: &GameState, action: Action, reason: &Error) -> Result<()> {
        debug!("ignored {action}: {reason}");
        Ok(())
    }

    fn on_session_end(&mut self, state: &GameState) -> Result<()> {
        info!(
            "session ended ({:?}, {} live moves)",
            state.phase(),
            state.moves().len()
        );
        Ok(())
    }
}

/// Kind of a transcript record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptEvent {
    Start,
    Placed,
    Undone,
    Reset,
    Ignored,
    End,
}

/// One line of a JSON Lines transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Sequence number, starting at 0 for the `start` record
    pub seq: usize,
    pub event: TranscriptEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evicted: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<WinResult>,
    /// State after the event
    pub snapshot: Snapshot,
}

impl TranscriptRecord {
    fn new(seq: usize, event: TranscriptEvent, state: &GameState) -> Self {
        Self {
            seq,
            event,
            player: None,
            position: None,
            evicted: None,
            reason: None,
            winner: None,
            snapshot: state.snapshot(),
        }
    }
}

/// JSONL observer - writes one JSON object per session event
pub struct JsonlObserver {
    writer: Box<dyn Write + Send>,
    seq: usize,
}

impl JsonlObserver {
    /// Create a transcript file at `path`, truncating any existing file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create transcript {}", path.display()),
            source,
        })?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Write the transcript to any writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            seq: 0,
        }
    }

    fn write(&mut self, record: TranscriptRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)
            .and_then(|_| self.writer.flush())
            .map_err(|source| Error::Io {
                operation: "write transcript".to_string(),
                source,
            })?;
        self.seq += 1;
        Ok(())
    }

    fn record(&self, event: TranscriptEvent, state: &GameState) -> TranscriptRecord {
        TranscriptRecord::new(self.seq, event, state)
    }
}

impl Observer for JsonlObserver {
    fn on_session_start(&mut self, state: &GameState) -> Result<()> {
        let record = self.record(TranscriptEvent::Start, state);
        self.write(record)
    }

    fn on_placed(&mut self, state: &GameState, placed: Move, evicted: Option<Position>) -> Result<()> {
        let record = TranscriptRecord {
            player: Some(placed.player),
            position: Some(placed.position.value()),
            evicted: evicted.map(|p| p.value()),
            winner: state.winner().copied(),
            ..self.record(TranscriptEvent::Placed, state)
        };
        self.write(record)
    }

    fn on_undone(&mut self, state: &GameState, undone: Move) -> Result<()> {
        let record = TranscriptRecord {
            player: Some(undone.player),
            position: Some(undone.position.value()),
            ..self.record(TranscriptEvent::Undone, state)
        };
        self.write(record)
    }

    fn on_reset(&mut self, state: &GameState) -> Result<()> {
        let record = self.record(TranscriptEvent::Reset, state);
        self.write(record)
    }

    fn on_ignored(&mut self, state: &GameState, action: Action, reason: &Error) -> Result<()> {
        let position = match action {
            Action::Place(idx) => Some(idx),
            Action::Undo | Action::Reset => None,
        };
        let record = TranscriptRecord {
            position,
            reason: Some(reason.to_string()),
            ..self.record(TranscriptEvent::Ignored, state)
        };
        self.write(record)
    }

    fn on_session_end(&mut self, state: &GameState) -> Result<()> {
        let record = self.record(TranscriptEvent::End, state);
        self.write(record)
    }
}

/// Summary of session counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub placements: usize,
    pub evictions: usize,
    pub undos: usize,
    pub resets: usize,
    pub ignored: usize,
    pub x_wins: usize,
    pub o_wins: usize,
}

impl MetricsSummary {
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// Read side of a [`MetricsObserver`] that stays usable after the observer
/// has been moved into a session.
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    inner: Arc<Mutex<MetricsSummary>>,
}

impl MetricsHandle {
    pub fn summary(&self) -> MetricsSummary {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Metrics observer - counts session events
#[derive(Debug, Default)]
pub struct MetricsObserver {
    inner: Arc<Mutex<MetricsSummary>>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> MetricsHandle {
        MetricsHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    fn update(&self, f: impl FnOnce(&mut MetricsSummary)) {
        let mut summary = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut summary);
    }
}

impl Observer for MetricsObserver {
    fn on_placed(&mut self, _state: &GameState, _placed: Move, evicted: Option<Position>) -> Result<()> {
        self.update(|m| {
            m.placements += 1;
            if evicted.is_some() {
                m.evictions += 1;
            }
        });
        Ok(())
    }

    fn on_win(&mut self, _state: &GameState, win: &WinResult) -> Result<()> {
        self.update(|m| match win.player {
            Player::X => m.x_wins += 1,
            Player::O => m.o_wins += 1,
        });
        Ok(())
    }

    fn on_undone(&mut self, _state: &GameState, _undone: Move) -> Result<()> {
        self.update(|m| m.undos += 1);
        Ok(())
    }

    fn on_reset(&mut self, _state: &GameState) -> Result<()> {
        self.update(|m| m.resets += 1);
        Ok(())
    }

    fn on_ignored(&mut self, _state: &GameState, _action: Action, _reason: &Error) -> Result<()> {
        self.update(|m| m.ignored += 1);
        Ok(())
    }
}
