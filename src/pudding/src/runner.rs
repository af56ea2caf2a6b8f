use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use protocol::user_event::{UpdateInfo, UserEvent};

use crate::controller_message::ControllerMessage;
use crate::drag::PointerId;
use crate::error::{PuddingError, Result};
use crate::simulation::Simulation;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
	// zero means tick as fast as possible
	pub frame_period: Duration,
	pub thread_name: String,
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self {
			frame_period: Duration::from_micros(16_667),
			thread_name: "pudding".to_string(),
		}
	}
}

impl RunnerConfig {
	pub fn with_frame_period(mut self, frame_period: Duration) -> Self {
		self.frame_period = frame_period;
		self
	}
}

// queued until the next tick boundary, never blocks
#[derive(Clone)]
pub struct Controller {
	tx: Sender<ControllerMessage>,
}

impl Controller {
	// false once the runner is gone
	pub fn send(&self, msg: ControllerMessage) -> bool {
		self.tx.send(msg).is_ok()
	}

	pub fn pointer_down(&self, id: PointerId, x: f64, y: f64) -> bool {
		self.send(ControllerMessage::PointerDown(id, [x, y]))
	}

	pub fn pointer_move(&self, id: PointerId, x: f64, y: f64) -> bool {
		self.send(ControllerMessage::PointerMove(id, [x, y]))
	}

	pub fn pointer_up(&self, id: PointerId) -> bool {
		self.send(ControllerMessage::PointerUp(id))
	}

	pub fn pointer_cancel(&self, id: PointerId) -> bool {
		self.send(ControllerMessage::PointerCancel(id))
	}
}

pub struct Runner {
	sim: Arc<Mutex<Simulation>>,
	stop_flag: Arc<AtomicBool>,
	handle: Option<JoinHandle<()>>,
	tx: Sender<ControllerMessage>,
}

impl Runner {
	pub fn spawn(
		sim: Simulation,
		config: RunnerConfig,
		publisher: Option<Sender<UserEvent>>,
	) -> Result<Self> {
		let sim = Arc::new(Mutex::new(sim));
		let stop_flag = Arc::new(AtomicBool::new(false));
		let (tx, rx) = channel();
		let thread_sim = sim.clone();
		let thread_stop = stop_flag.clone();
		let frame_period = config.frame_period;
		let handle = std::thread::Builder::new()
			.name(config.thread_name.clone())
			.spawn(move || {
				run_loop(thread_sim, thread_stop, rx, publisher, frame_period)
			})?;
		log::info!(
			"runner {} started, frame period {:?}",
			config.thread_name,
			frame_period
		);
		Ok(Self {
			sim,
			stop_flag,
			handle: Some(handle),
			tx,
		})
	}

	pub fn controller(&self) -> Controller {
		Controller {
			tx: self.tx.clone(),
		}
	}

	pub fn is_running(&self) -> bool {
		self.handle.as_ref().map_or(false, |x| !x.is_finished())
	}

	pub fn with_simulation<T>(&self, f: impl FnOnce(&mut Simulation) -> T) -> Result<T> {
		let mut sim = self.sim.lock().map_err(|_| PuddingError::Poisoned)?;
		Ok(f(&mut sim))
	}

	// waits for the in-flight tick
	pub fn stop(mut self) -> Result<Simulation> {
		self.shutdown()?;
		let sim = self.sim.clone();
		drop(self);
		let mutex = Arc::try_unwrap(sim).map_err(|_| PuddingError::RunnerPanicked)?;
		mutex.into_inner().map_err(|_| PuddingError::Poisoned)
	}

	fn shutdown(&mut self) -> Result<()> {
		let handle = match self.handle.take() {
			Some(h) => h,
			None => return Ok(()),
		};
		self.stop_flag.store(true, Ordering::Release);
		// cut a pending frame sleep short
		handle.thread().unpark();
		handle.join().map_err(|_| PuddingError::RunnerPanicked)?;
		log::info!("runner stopped");
		Ok(())
	}
}

impl Drop for Runner {
	fn drop(&mut self) {
		if let Err(e) = self.shutdown() {
			log::error!("{}", e);
		}
	}
}

fn run_loop(
	sim: Arc<Mutex<Simulation>>,
	stop_flag: Arc<AtomicBool>,
	rx: Receiver<ControllerMessage>,
	mut publisher: Option<Sender<UserEvent>>,
	frame_period: Duration,
) {
	while !stop_flag.load(Ordering::Acquire) {
		let start_time = Instant::now();
		let snapshot = {
			let mut sim = match sim.lock() {
				Ok(s) => s,
				Err(_) => {
					log::error!("simulation lock poisoned, runner exits");
					return;
				}
			};
			while let Ok(msg) = rx.try_recv() {
				sim.handle_message(msg);
			}
			sim.tick();
			publisher
				.as_ref()
				.map(|_| (sim.pr_model(), sim.node_count(), sim.active_pointers()))
		};
		let duration = start_time.elapsed();
		if let Some((model, node_len, pointer_len)) = snapshot {
			let load = if frame_period.is_zero() {
				0.
			} else {
				duration.as_secs_f32() / frame_period.as_secs_f32()
			};
			let info = UpdateInfo {
				load,
				node_len,
				pointer_len,
			};
			let sent = publisher
				.as_ref()
				.map_or(false, |tx| tx.send(UserEvent::Update(model, info)).is_ok());
			if !sent {
				log::debug!("render side hung up, no more snapshots");
				publisher = None;
			}
		}
		// park instead of sleep so stop() does not wait out the frame
		let deadline = start_time + frame_period;
		loop {
			let now = Instant::now();
			if now >= deadline || stop_flag.load(Ordering::Acquire) {
				break;
			}
			std::thread::park_timeout(deadline - now);
		}
	}
}
