use crate::constraint::{Constraint, Relax};
use crate::particle::PointMass;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelaxStats {
	pub passes: usize,
	pub corrections: usize,
	pub degenerate: usize,
}

/// Gauss-Seidel relaxation of all constraints.
///
/// Constraints are visited in order within a pass, each one seeing the
/// positions left by the previous ones. Lengths may stay above
/// `max_length` when `iterations` is too small to propagate corrections
/// along a chain.
///
/// # Panics
///
/// Every endpoint in `constraints` must index into `points`. The world
/// keeps that true for its own arena.
pub fn relax(
	points: &mut [PointMass],
	constraints: &[Constraint],
	max_length: f64,
	iterations: usize,
) -> RelaxStats {
	let mut stats = RelaxStats::default();
	for _ in 0..iterations {
		for constraint in constraints.iter() {
			match constraint.relax(points, max_length) {
				Relax::Slack => {}
				Relax::Corrected => stats.corrections += 1,
				Relax::Degenerate => {
					tracing::trace!(
						"skip coincident constraint {:?}-{:?}",
						constraint.p1,
						constraint.p2
					);
					stats.degenerate += 1;
				}
			}
		}
		stats.passes += 1;
	}
	stats
}
