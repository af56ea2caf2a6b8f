pub mod color;
pub mod pr_model;
pub mod user_event;

use pr_model::PrModel;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
	#[error("failed to encode message: {0}")]
	Encode(bincode::Error),
	#[error("failed to decode message: {0}")]
	Decode(bincode::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
		bincode::serialize(&self).map_err(ProtocolError::Encode)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
		bincode::deserialize(bytes).map_err(ProtocolError::Decode)
	}
}
