use rayon::prelude::*;

use crate::particle::PointMass;
use crate::V2;

/// Advance every unpinned point mass by one tick.
///
/// Points do not read each other, so the update runs in parallel and the
/// result does not depend on scheduling.
pub fn step(points: &mut [PointMass], gravity: f64, dt: f64) {
	let dp = V2::new(0., gravity * dt);
	points.par_iter_mut().for_each(|p| p.update(dp));
}
