use std::time::Instant;

use protocol::Message;
use pudding::config::SimulationConfig;
use pudding::node_ring::MAX_NODES;
use pudding::posbox::Posbox;
use pudding::simulation::Simulation;
use pudding::{RenderMode, V2};
use rand::Rng;

fn main() {
	env_logger::init();
	let mut iter = std::env::args();
	iter.next();
	let rframes: usize = iter.next().and_then(|x| x.parse().ok()).unwrap_or(10_000);
	let config = SimulationConfig::default()
		.with_num_nodes(MAX_NODES)
		.with_bounding_rect(Posbox::new(0., 0., 1080., 1920.))
		.with_gravity(V2::new(0., 0.5))
		.with_pinned(true)
		.with_render_mode(RenderMode::Wireframe);
	let mut sim = Simulation::new(config);
	let mut rng = rand::thread_rng();
	let center = sim.config().bounding_rect.center();
	let start = Instant::now();
	for frame in 0..rframes {
		// a fresh two finger gesture every 100 frames
		if frame % 100 == 0 {
			for id in 0..2 {
				sim.pointer_up(id);
				let angle = rng.gen_range(0.0..std::f64::consts::TAU);
				let p = center + V2::new(angle.cos(), angle.sin()) * 100.;
				sim.pointer_down(id, p[0], p[1]);
			}
		}
		for id in 0..2 {
			let jitter = V2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
			if let Some(p) = sim.pointer(id).map(|x| x.get_current_pos()) {
				sim.pointer_move(id, p[0] + jitter[0], p[1] + jitter[1]);
			}
		}
		sim.tick();
	}
	let duration = start.elapsed().as_secs_f64();
	let bytes = match Message::WorldUpdate(sim.pr_model()).to_bytes() {
		Ok(b) => b.len(),
		Err(e) => {
			eprintln!("{}", e);
			std::process::exit(1);
		}
	};
	eprintln!(
		"{} ticks, {} nodes: {:.3} us/tick, frame {} bytes, energy {:.3}",
		rframes,
		sim.node_count(),
		duration * 1e6 / rframes as f64,
		bytes,
		sim.kinetic_energy(),
	);
}
