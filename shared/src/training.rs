//! Model training progress, fed by the backend's server-sent log stream.
//!
//! The backend forwards the training script's stdout line by line and closes
//! with a single `__TRAIN_EXIT__ <code>` message carrying the exit status.

pub const EXIT_SENTINEL: &str = "__TRAIN_EXIT__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainEvent {
    Log(String),
    /// Terminal message; `None` when the code could not be read.
    Exit(Option<i32>),
}

impl TrainEvent {
    pub fn parse(data: &str) -> Self {
        match data.strip_prefix(EXIT_SENTINEL) {
            Some(rest) => TrainEvent::Exit(
                rest.split_whitespace()
                    .next()
                    .and_then(|code| code.parse::<i32>().ok()),
            ),
            None => TrainEvent::Log(data.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TrainEvent::Exit(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrainingStatus {
    #[default]
    Idle,
    Streaming,
    Succeeded,
    Failed(Option<i32>),
    ConnectionLost,
}

impl TrainingStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            TrainingStatus::Idle => None,
            TrainingStatus::Streaming => Some("Training in progress...".to_string()),
            TrainingStatus::Succeeded => Some("Model trained successfully".to_string()),
            TrainingStatus::Failed(Some(code)) => Some(format!("Training exited with code {}", code)),
            TrainingStatus::Failed(None) => Some("Training exited with an unknown code".to_string()),
            TrainingStatus::ConnectionLost => {
                Some("Lost connection to the training log stream".to_string())
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TrainingStatus::Failed(_) | TrainingStatus::ConnectionLost)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSession {
    pub transcript: Vec<String>,
    pub status: TrainingStatus,
}

impl TrainingSession {
    /// Starts a fresh run, dropping the previous transcript.
    pub fn start(&mut self) {
        self.transcript.clear();
        self.status = TrainingStatus::Streaming;
    }

    pub fn is_training(&self) -> bool {
        self.status == TrainingStatus::Streaming
    }

    /// Applies one stream message. Returns `true` once the stream is over and
    /// the connection should be closed.
    pub fn apply(&mut self, event: TrainEvent) -> bool {
        if !self.is_training() {
            return true;
        }
        match event {
            TrainEvent::Log(line) => {
                self.transcript.push(line);
                false
            }
            TrainEvent::Exit(Some(0)) => {
                self.status = TrainingStatus::Succeeded;
                true
            }
            TrainEvent::Exit(code) => {
                self.status = TrainingStatus::Failed(code);
                true
            }
        }
    }

    pub fn connection_lost(&mut self) {
        if self.is_training() {
            self.status = TrainingStatus::ConnectionLost;
        }
    }

    pub fn output(&self) -> String {
        let mut out = self.transcript.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
