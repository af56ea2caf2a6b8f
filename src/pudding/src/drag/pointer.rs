use crate::V2;

pub type PointerId = i32;

#[derive(Clone, Debug, PartialEq)]
pub struct DraggedNode {
	pub index: usize,
	// node position when the drag started
	pub anchor: V2,
}

#[derive(Clone, Debug)]
pub struct Pointer {
	start_pos: V2,
	current_pos: V2,
	nodes: Vec<DraggedNode>,
}

impl Pointer {
	pub fn new(pos: V2) -> Self {
		Self {
			start_pos: pos,
			current_pos: pos,
			nodes: Vec::new(),
		}
	}

	pub fn get_current_pos(&self) -> V2 {
		self.current_pos
	}

	pub fn set_current_pos(&mut self, pos: V2) {
		self.current_pos = pos;
	}

	// how far the pointer moved since the drag started
	pub fn displacement(&self) -> V2 {
		self.current_pos - self.start_pos
	}

	pub fn nodes(&self) -> &[DraggedNode] {
		&self.nodes
	}

	pub fn add_node(&mut self, index: usize, anchor: V2) {
		self.nodes.push(DraggedNode { index, anchor });
	}

	pub fn remove_node(&mut self, index: usize) {
		self.nodes.retain(|x| x.index != index);
	}

	pub fn target_of(&self, node: &DraggedNode) -> V2 {
		node.anchor + self.displacement()
	}
}
