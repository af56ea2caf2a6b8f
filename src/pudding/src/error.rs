#[derive(Debug, thiserror::Error)]
pub enum PuddingError {
	#[error("failed to spawn simulation thread: {0}")]
	Spawn(#[from] std::io::Error),
	#[error("simulation thread panicked")]
	RunnerPanicked,
	#[error("simulation lock poisoned")]
	Poisoned,
}

pub type Result<T> = std::result::Result<T, PuddingError>;
