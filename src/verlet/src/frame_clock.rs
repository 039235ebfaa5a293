use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Turns measured frame intervals into the `dt` fed to `World::tick`.
///
/// `dt` is `1 / fps` with the frame rate averaged over the last `window`
/// intervals. Time spent paused does not count towards an interval.
pub struct FrameClock {
	window: usize,
	intervals: VecDeque<Duration>,
	last: Option<Instant>,
	pause_start: Option<Instant>,
	total_pause: Duration,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new(30)
	}
}

impl FrameClock {
	pub const INITIAL_DT: f64 = 1.0;

	pub fn new(window: usize) -> Self {
		let window = window.max(1);
		Self {
			window,
			intervals: VecDeque::with_capacity(window),
			last: None,
			pause_start: None,
			total_pause: Duration::ZERO,
		}
	}

	pub fn is_paused(&self) -> bool {
		self.pause_start.is_some()
	}

	pub fn pause_at(&mut self, now: Instant) {
		if self.pause_start.is_none() {
			self.pause_start = Some(now);
		}
	}

	pub fn resume_at(&mut self, now: Instant) {
		if let Some(start) = self.pause_start.take() {
			self.total_pause += now.saturating_duration_since(start);
		}
	}

	pub fn fps(&self) -> Option<f64> {
		let total: Duration = self.intervals.iter().sum();
		if total.is_zero() {
			return None;
		}
		Some(self.intervals.len() as f64 / total.as_secs_f64())
	}

	pub fn dt(&self) -> f64 {
		match self.fps() {
			Some(fps) => 1.0 / fps,
			None => Self::INITIAL_DT,
		}
	}

	/// Mark the start of a frame and return the `dt` to simulate it with.
	///
	/// A pause still running at `now` is split there, the part after `now`
	/// counts against the next interval.
	pub fn tick_at(&mut self, now: Instant) -> f64 {
		if let Some(start) = self.pause_start {
			self.total_pause += now.saturating_duration_since(start);
			self.pause_start = Some(now);
		}
		if let Some(last) = self.last {
			let passed = now
				.saturating_duration_since(last)
				.saturating_sub(self.total_pause);
			if self.intervals.len() == self.window {
				self.intervals.pop_front();
			}
			self.intervals.push_back(passed);
		}
		self.total_pause = Duration::ZERO;
		self.last = Some(now);
		self.dt()
	}

	pub fn tick(&mut self) -> f64 {
		self.tick_at(Instant::now())
	}
}
