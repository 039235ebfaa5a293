use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use verlet::{SimConfig, World, V2};

// A pinned curtain with a few random ropes hanging off it.
fn build(world: &mut World) -> Result<(), Box<dyn std::error::Error>> {
	let mesh = world.add_mesh(V2::new(-400., 300.), V2::new(400., 0.), 20.)?;
	let top: Vec<_> = world.meshes()[mesh.0].row(0).to_vec();
	for id in top.iter().step_by(4) {
		world.toggle_pinned(*id)?;
	}
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..16 {
		let anchor = top[rng.gen_range(0..top.len())];
		let mut prev = anchor;
		for _ in 0..rng.gen_range(4..12) {
			let pos = V2::new(rng.gen_range(-400.0..400.0), rng.gen_range(0.0..300.0));
			let p = world.add_point(pos, false);
			world.connect(prev, p)?;
			prev = p;
		}
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let subscriber = FmtSubscriber::builder()
		.with_max_level(Level::INFO)
		.with_target(false)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut world = World::default();
	build(&mut world)?;
	let config = SimConfig::default().with_gravity_enabled(true);
	let dt = 1.0 / 60.0;
	let rframes = 1000;
	let start = Instant::now();
	let mut corrections = 0;
	for _ in 0..rframes {
		if let Some(stats) = world.tick(dt, &config) {
			corrections += stats.corrections;
		}
	}
	let duration = start.elapsed().as_secs_f64();
	info!(
		"{} points, {} constraints, {} corrections",
		world.points().len(),
		world.constraints().len(),
		corrections
	);
	// simulated time is rframes * dt
	info!("load {:.3}%", duration / (rframes as f64 * dt) * 100.0);
	Ok(())
}
