use crate::config::{gravity_from_accelerometer, sanitize, sanitize_v2, SimulationConfig};
use crate::controller_message::ControllerMessage;
use crate::drag::{DragController, Pointer, PointerId};
use crate::force::ForceModel;
use crate::integrator::Integrator;
use crate::node_ring::NodeRing;
use crate::pair_map::PairMap;
use crate::posbox::Posbox;
use crate::{Color, PrModel, RenderMode, NODE_MASS, V2};

#[derive(Debug)]
pub struct Simulation {
	config: SimulationConfig,
	ring: NodeRing,
	force_model: ForceModel,
	drag: DragController,
	iteration: u64,
}

impl Default for Simulation {
	fn default() -> Self {
		Self::new(SimulationConfig::default())
	}
}

impl Simulation {
	pub fn new(mut config: SimulationConfig) -> Self {
		let ring = NodeRing::new(
			config.num_nodes,
			config.radius,
			config.bounding_rect.center(),
		);
		config.num_nodes = ring.len();
		log::info!(
			"new simulation: {} nodes, radius {}, box {:?}",
			ring.len(),
			config.radius,
			config.bounding_rect
		);
		let mut force_model = ForceModel::default();
		force_model.reset(ring.len());
		let drag = DragController::new(ring.len());
		Self {
			config,
			ring,
			force_model,
			drag,
			iteration: 0,
		}
	}

	// forces, drag, velocity, position
	pub fn tick(&mut self) {
		self.ring.reset_accelerations();
		self.force_model.apply(&mut self.ring, &self.config);
		self.drag.apply_drag_forces(&mut self.ring, &self.config);
		Integrator::new(self.config.damping_factor, self.config.bounding_rect)
			.step(&mut self.ring);
		self.iteration += 1;
	}

	pub fn iteration(&self) -> u64 {
		self.iteration
	}

	pub fn config(&self) -> &SimulationConfig {
		&self.config
	}

	pub fn ring(&self) -> &NodeRing {
		&self.ring
	}

	pub fn node_count(&self) -> usize {
		self.ring.len()
	}

	pub fn positions(&self) -> Vec<V2> {
		self.ring.nodes().iter().map(|x| x.pos).collect()
	}

	pub fn velocities(&self) -> Vec<V2> {
		self.ring.nodes().iter().map(|x| x.veloc).collect()
	}

	pub fn stress(&self) -> &PairMap {
		self.force_model.stress()
	}

	pub fn rest_length(&self, i: usize, j: usize) -> f64 {
		self.ring.rest_length(i, j)
	}

	pub fn kinetic_energy(&self) -> f64 {
		self.ring
			.nodes()
			.iter()
			.map(|x| x.kinetic_energy(NODE_MASS))
			.sum()
	}

	pub fn active_pointers(&self) -> usize {
		self.drag.len()
	}

	pub fn pointer(&self, id: PointerId) -> Option<&Pointer> {
		self.drag.pointer(id)
	}

	pub fn owner_of(&self, node: usize) -> Option<PointerId> {
		self.drag.owner_of(node)
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			positions: self.ring.nodes().iter().map(|x| x.render()).collect(),
			stress: self.force_model.stress().as_slice().to_vec(),
			render_mode: self.config.render_mode,
			fill_color: self.config.fill_color,
			background_color: self.config.background_color,
		}
	}

	// layout changes invalidate captured indices and drag anchors
	fn relayout(&mut self, recompute_rest: bool) {
		let center = self.config.bounding_rect.center();
		if recompute_rest {
			self.ring.refresh(self.config.radius, center);
		} else {
			self.ring.reposition(self.config.radius, center);
		}
		self.reset_derived();
	}

	fn reset_derived(&mut self) {
		self.force_model.reset(self.ring.len());
		self.drag.clear(self.ring.len());
		log::info!(
			"relayout: {} nodes around {:?}, radius {}",
			self.ring.len(),
			self.config.bounding_rect.center(),
			self.config.radius
		);
	}

	pub fn set_num_nodes(&mut self, n: usize) {
		let center = self.config.bounding_rect.center();
		self.config.num_nodes =
			self.ring.set_node_count(n, self.config.radius, center);
		self.reset_derived();
	}

	pub fn set_bounding_rect(&mut self, rect: Posbox) {
		self.config.bounding_rect = rect;
		self.relayout(false);
	}

	// drag radius follows the size of the pudding
	pub fn set_radius(&mut self, radius: f64) {
		self.config.radius = sanitize("radius", self.config.radius, radius, 0., f64::MAX);
		self.config.drag_radius = self.config.radius;
		self.relayout(true);
	}

	pub fn refresh_nodes(&mut self) {
		self.relayout(true);
	}

	pub fn set_binding_elasticity(&mut self, k: f64) {
		let c = &mut self.config;
		c.binding_elasticity =
			sanitize("binding elasticity", c.binding_elasticity, k, 0., f64::MAX);
	}

	pub fn set_pinning_elasticity(&mut self, k: f64) {
		let c = &mut self.config;
		c.pinning_elasticity =
			sanitize("pinning elasticity", c.pinning_elasticity, k, 0., f64::MAX);
	}

	pub fn set_damping_factor(&mut self, damping: f64) {
		let c = &mut self.config;
		c.damping_factor = sanitize("damping factor", c.damping_factor, damping, 0., 1.);
	}

	pub fn set_gravity(&mut self, gravity: V2) {
		self.config.gravity = sanitize_v2("gravity", self.config.gravity, gravity);
	}

	pub fn set_gravity_from_accelerometer(&mut self, ax: f64, ay: f64) {
		self.set_gravity(gravity_from_accelerometer(ax, ay));
	}

	pub fn set_gravity_enabled(&mut self, on: bool) {
		self.config.is_gravity_enabled = on;
	}

	pub fn set_pinned(&mut self, on: bool) {
		self.config.is_pinned = on;
	}

	pub fn set_drag_radius(&mut self, r: f64) {
		let c = &mut self.config;
		c.drag_radius = sanitize("drag radius", c.drag_radius, r, 0., f64::MAX);
	}

	pub fn set_drag_falloff(&mut self, on: bool) {
		self.config.drag_falloff = on;
	}

	pub fn set_render_mode(&mut self, mode: RenderMode) {
		self.config.render_mode = mode;
	}

	pub fn set_fill_color(&mut self, color: Color) {
		self.config.fill_color = color;
	}

	pub fn set_background_color(&mut self, color: Color) {
		self.config.background_color = color;
	}

	pub fn start_drag(&mut self, id: PointerId, pos: V2) -> usize {
		self.drag
			.start_drag(id, pos, &self.ring, self.config.drag_radius)
	}

	pub fn update_pointer(&mut self, id: PointerId, pos: V2) {
		self.drag.update_pointer(id, pos);
	}

	pub fn stop_drag(&mut self, id: PointerId) {
		self.drag.stop_drag(id);
	}

	pub fn pointer_down(&mut self, id: PointerId, x: f64, y: f64) {
		let pos = V2::new(x, y);
		self.start_drag(id, pos);
		self.update_pointer(id, pos);
	}

	pub fn pointer_move(&mut self, id: PointerId, x: f64, y: f64) {
		self.update_pointer(id, V2::new(x, y));
	}

	pub fn pointer_up(&mut self, id: PointerId) {
		self.stop_drag(id);
	}

	pub fn pointer_cancel(&mut self, id: PointerId) {
		self.stop_drag(id);
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		use ControllerMessage::*;
		match msg {
			PointerDown(id, [x, y]) => self.pointer_down(id, x, y),
			PointerMove(id, [x, y]) => self.pointer_move(id, x, y),
			PointerUp(id) => self.pointer_up(id),
			PointerCancel(id) => self.pointer_cancel(id),
			SetNumNodes(n) => self.set_num_nodes(n),
			SetRadius(r) => self.set_radius(r),
			SetBindingElasticity(k) => self.set_binding_elasticity(k),
			SetPinningElasticity(k) => self.set_pinning_elasticity(k),
			SetDampingFactor(d) => self.set_damping_factor(d),
			SetGravity([x, y]) => self.set_gravity(V2::new(x, y)),
			SetAccelerometer([x, y]) => self.set_gravity_from_accelerometer(x, y),
			SetGravityEnabled(on) => self.set_gravity_enabled(on),
			SetPinned(on) => self.set_pinned(on),
			SetDragRadius(r) => self.set_drag_radius(r),
			SetDragFalloff(on) => self.set_drag_falloff(on),
			SetRenderMode(mode) => self.set_render_mode(mode),
			SetFillColor(color) => self.set_fill_color(color),
			SetBackgroundColor(color) => self.set_background_color(color),
			SetBoundingRect(rect) => self.set_bounding_rect(rect),
			Refresh => self.refresh_nodes(),
		}
	}
}
