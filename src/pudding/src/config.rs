use crate::posbox::Posbox;
use crate::{Color, RenderMode, V2};

pub const DEFAULT_NUM_NODES: usize = 12;
pub const DEFAULT_RADIUS: f64 = 100.0;
pub const DEFAULT_BINDING_ELASTICITY: f64 = 10.0;
pub const DEFAULT_PINNING_ELASTICITY: f64 = 0.1;
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.8;
// strength of the force a pointer drags its nodes with
pub const DRAGGING_FORCE_SCALE: f64 = 0.5;
// sensor readings are much stronger than what looks good on screen
pub const GRAVITY_SCALER: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
	pub num_nodes: usize,
	pub radius: f64,
	pub binding_elasticity: f64,
	pub pinning_elasticity: f64,
	pub damping_factor: f64,
	pub gravity: V2,
	pub is_gravity_enabled: bool,
	pub is_pinned: bool,
	// nodes within this distance of a new pointer are captured by it
	pub drag_radius: f64,
	pub drag_stiffness: f64,
	// fade drag force as a node nears the edge of the capture radius
	pub drag_falloff: bool,
	pub render_mode: RenderMode,
	pub fill_color: Color,
	pub background_color: Color,
	pub bounding_rect: Posbox,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			num_nodes: DEFAULT_NUM_NODES,
			radius: DEFAULT_RADIUS,
			binding_elasticity: DEFAULT_BINDING_ELASTICITY,
			pinning_elasticity: DEFAULT_PINNING_ELASTICITY,
			damping_factor: DEFAULT_DAMPING_FACTOR,
			gravity: V2::zeros(),
			is_gravity_enabled: true,
			is_pinned: false,
			drag_radius: DEFAULT_RADIUS,
			drag_stiffness: DRAGGING_FORCE_SCALE,
			drag_falloff: false,
			render_mode: RenderMode::Normal,
			fill_color: Color::DEFAULT_FILL,
			background_color: Color::DEFAULT_BACKGROUND,
			bounding_rect: Posbox::default(),
		}
	}
}

// non-finite input keeps the old value, everything else is clamped
pub(crate) fn sanitize(name: &str, old: f64, new: f64, min: f64, max: f64) -> f64 {
	if !new.is_finite() {
		log::warn!("ignoring non-finite {}: {}", name, new);
		return old;
	}
	new.clamp(min, max)
}

pub(crate) fn sanitize_v2(name: &str, old: V2, new: V2) -> V2 {
	if !new.iter().all(|x| x.is_finite()) {
		log::warn!("ignoring non-finite {}: {:?}", name, new);
		return old;
	}
	new
}

pub fn gravity_from_accelerometer(ax: f64, ay: f64) -> V2 {
	// sensor x axis points the other way than screen x
	V2::new(-ax * GRAVITY_SCALER, ay * GRAVITY_SCALER)
}

impl SimulationConfig {
	pub fn with_num_nodes(mut self, n: usize) -> Self {
		self.num_nodes = crate::node_ring::clamp_node_count(n);
		self
	}

	// also moves the drag radius along, like `Simulation::set_radius`
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.radius = sanitize("radius", self.radius, radius, 0., f64::MAX);
		self.drag_radius = self.radius;
		self
	}

	pub fn with_binding_elasticity(mut self, k: f64) -> Self {
		self.binding_elasticity =
			sanitize("binding elasticity", self.binding_elasticity, k, 0., f64::MAX);
		self
	}

	pub fn with_pinning_elasticity(mut self, k: f64) -> Self {
		self.pinning_elasticity =
			sanitize("pinning elasticity", self.pinning_elasticity, k, 0., f64::MAX);
		self
	}

	pub fn with_damping_factor(mut self, damping: f64) -> Self {
		self.damping_factor =
			sanitize("damping factor", self.damping_factor, damping, 0., 1.);
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = sanitize_v2("gravity", self.gravity, gravity);
		self
	}

	pub fn with_gravity_enabled(mut self, on: bool) -> Self {
		self.is_gravity_enabled = on;
		self
	}

	pub fn with_pinned(mut self, on: bool) -> Self {
		self.is_pinned = on;
		self
	}

	pub fn with_drag_radius(mut self, r: f64) -> Self {
		self.drag_radius = sanitize("drag radius", self.drag_radius, r, 0., f64::MAX);
		self
	}

	pub fn with_drag_stiffness(mut self, k: f64) -> Self {
		self.drag_stiffness =
			sanitize("drag stiffness", self.drag_stiffness, k, 0., f64::MAX);
		self
	}

	pub fn with_drag_falloff(mut self, on: bool) -> Self {
		self.drag_falloff = on;
		self
	}

	pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
		self.render_mode = mode;
		self
	}

	pub fn with_fill_color(mut self, color: Color) -> Self {
		self.fill_color = color;
		self
	}

	pub fn with_background_color(mut self, color: Color) -> Self {
		self.background_color = color;
		self
	}

	pub fn with_bounding_rect(mut self, rect: Posbox) -> Self {
		self.bounding_rect = rect;
		self
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::node_ring::{MAX_NODES, MIN_NODES};

	#[test]
	fn test_builder_clamps() {
		let config = SimulationConfig::default()
			.with_num_nodes(1)
			.with_damping_factor(1.5)
			.with_binding_elasticity(-3.)
			.with_radius(f64::NAN);
		assert_eq!(config.num_nodes, MIN_NODES);
		assert_eq!(config.damping_factor, 1.0);
		assert_eq!(config.binding_elasticity, 0.0);
		assert_eq!(config.radius, DEFAULT_RADIUS);
		assert_eq!(
			SimulationConfig::default().with_num_nodes(500).num_nodes,
			MAX_NODES
		);
	}

	#[test]
	fn test_radius_moves_drag_radius() {
		let config = SimulationConfig::default().with_radius(40.);
		assert_eq!(config.drag_radius, 40.);
		let config = config.with_drag_radius(10.);
		assert_eq!(config.radius, 40.);
		assert_eq!(config.drag_radius, 10.);
	}

	#[test]
	fn test_gravity_from_accelerometer() {
		assert_eq!(gravity_from_accelerometer(2., 9.8), V2::new(-1., 4.9));
		let config = SimulationConfig::default()
			.with_gravity(V2::new(f64::INFINITY, 0.));
		assert_eq!(config.gravity, V2::zeros());
	}
}
