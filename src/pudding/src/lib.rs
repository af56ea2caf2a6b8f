pub mod config;
pub mod controller_message;
pub mod drag;
pub mod error;
pub mod force;
pub mod integrator;
pub mod node;
pub mod node_ring;
pub mod pair_map;
pub mod posbox;
pub mod runner;
pub mod simulation;

pub type V2 = nalgebra::Vector2<f64>;

// mass of every node, used to turn forces into accelerations
pub const NODE_MASS: f64 = 1.0;
// minimal distance for directions and divisors, prevents blowups from
// floating error when nodes coincide
pub const NODE_DISTANCE_THRESHOLD: f64 = 0.01;

pub use protocol::color::Color;
pub use protocol::pr_model::{PrModel, RenderMode};
