use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateInfo {
	// tick time over frame period, > 1 means the driver is falling behind
	pub load: f32,
	pub node_len: usize,
	pub pointer_len: usize,
}
