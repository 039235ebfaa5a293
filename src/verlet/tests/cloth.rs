use approx::assert_relative_eq;
use verlet::{integrator, solver, MeshError, PointId, SimConfig, World, V2};

fn running() -> SimConfig {
	SimConfig::default().with_gravity_enabled(true)
}

// The gravity displacement is counted twice on a point at rest. This is the
// characteristic motion of the simulation and must not turn into
// textbook Verlet.
#[test]
fn first_step_doubles_gravity_displacement() {
	let mut world = World::default();
	let starts = [V2::new(0., 0.), V2::new(-12.5, 3.), V2::new(7., -40.)];
	for s in starts.iter() {
		world.add_point(*s, false);
	}
	let mut points = world.points().to_vec();
	integrator::step(&mut points, 10., 1.);
	for (p, s) in points.iter().zip(starts.iter()) {
		assert_eq!(p.get_pos() - s, V2::new(0., 20.));
		assert_eq!(p.get_ppos(), *s);
	}
}

#[test]
fn pinned_points_are_bit_identical() {
	let mut world = World::default();
	world
		.add_mesh(V2::new(0., 0.), V2::new(100., 60.), 20.)
		.unwrap();
	let top: Vec<PointId> = world.meshes()[0].row(0).to_vec();
	for id in top.iter() {
		world.toggle_pinned(*id).unwrap();
	}
	let before: Vec<_> = top
		.iter()
		.map(|id| world.point(*id).unwrap().clone())
		.collect();
	let config = running();
	for _ in 0..50 {
		world.tick(0.1, &config);
	}
	for (id, b) in top.iter().zip(before.iter()) {
		let p = world.point(*id).unwrap();
		assert_eq!(p.get_pos().x.to_bits(), b.get_pos().x.to_bits());
		assert_eq!(p.get_pos().y.to_bits(), b.get_pos().y.to_bits());
		assert_eq!(p, b);
	}
}

#[test]
fn slack_constraints_do_not_move_points() {
	let mut world = World::default();
	let a = world.add_point(V2::new(0., 0.), false);
	let b = world.add_point(V2::new(10., 10.), false);
	world.connect(a, b).unwrap();
	let mut points = world.points().to_vec();
	solver::relax(&mut points, world.constraints(), 25., 1);
	assert_eq!(points, world.points());
}

#[test]
fn stretched_pair_snaps_to_max_length() {
	let mut world = World::default();
	let a = world.add_point(V2::new(3., 4.), false);
	let b = world.add_point(V2::new(3., 54.), false);
	world.connect(a, b).unwrap();
	let mut points = world.points().to_vec();
	let stats = solver::relax(&mut points, world.constraints(), 25., 1);
	assert_eq!(stats.corrections, 1);
	assert_eq!(points[0].get_pos(), V2::new(3., 16.5));
	assert_eq!(points[1].get_pos(), V2::new(3., 41.5));
	let center = (points[0].get_pos() + points[1].get_pos()) / 2.;
	assert_eq!(center, V2::new(3., 29.));
}

#[test]
fn generated_mesh_layout() {
	let mut world = World::default();
	world
		.add_mesh(V2::new(0., 0.), V2::new(40., 20.), 20.)
		.unwrap();
	let mesh = &world.meshes()[0];
	assert_eq!((mesh.rows(), mesh.cols()), (2, 3));
	assert_eq!(world.points().len(), 6);
	assert_eq!(world.constraints().len(), 7);
	let p00 = mesh.get(0, 0).unwrap();
	let p12 = mesh.get(1, 2).unwrap();
	assert_eq!(world.point(p00).unwrap().get_pos(), V2::new(0., 0.));
	assert_eq!(world.point(p12).unwrap().get_pos(), V2::new(40., -20.));
}

#[test]
fn remove_last_point_leaves_no_dangling_constraints() {
	let mut world = World::default();
	let a = world.add_point(V2::new(1., 1.), true);
	world.connect(a, a).unwrap();
	world.remove_last_point();
	assert!(world.points().is_empty());
	assert!(world.constraints().is_empty());
}

#[test]
fn reset_empties_everything() {
	let mut world = World::default();
	world
		.add_mesh(V2::new(0., 0.), V2::new(40., 20.), 20.)
		.unwrap();
	let a = world.add_point(V2::new(-10., 0.), true);
	world.connect(a, PointId(0)).unwrap();
	world.tick(1., &running());
	world.reset();
	assert!(world.points().is_empty());
	assert!(world.constraints().is_empty());
	assert!(world.meshes().is_empty());
	assert!(world.pr_model().is_empty());
}

#[test]
fn hanging_cloth_settles_near_max_length() {
	let mut world = World::default();
	world
		.add_mesh(V2::new(0., 0.), V2::new(100., 40.), 20.)
		.unwrap();
	let top: Vec<PointId> = world.meshes()[0].row(0).to_vec();
	for id in top.iter() {
		world.toggle_pinned(*id).unwrap();
	}
	// negative G pulls along the direction rows grow in
	let config = running().with_gravity(-10.).with_rigidness(50);
	for _ in 0..10 {
		world.tick(0.1, &config);
	}
	for p in world.points().iter() {
		assert!(p.get_pos().x.is_finite() && p.get_pos().y.is_finite());
	}
	let worst = world
		.constraints()
		.iter()
		.map(|c| c.length(world.points()))
		.fold(0f64, f64::max);
	assert_relative_eq!(worst, 25., max_relative = 0.05);
}

#[test]
fn duplicate_constraints_are_kept() {
	let mut world = World::default();
	let a = world.add_point(V2::new(0., 0.), true);
	let b = world.add_point(V2::new(80., 0.), false);
	world.connect(a, b).unwrap();
	world.connect(a, b).unwrap();
	assert_eq!(world.constraints().len(), 2);
	let config = running().with_gravity(0.).with_rigidness(1);
	let stats = world.tick(1., &config).unwrap();
	assert_eq!(stats.corrections, 2);
	// 80 -> 52.5 -> 38.75 along x
	assert_eq!(world.points()[1].get_pos(), V2::new(38.75, 0.));
}

#[test]
fn oversized_mesh_is_rejected_without_changes() {
	let mut world = World::default();
	world.add_point(V2::new(0., 0.), true);
	let r = world.add_mesh(V2::new(0., 0.), V2::new(0., 1e300), 1.);
	assert!(matches!(r, Err(MeshError::InvalidParameters { .. })));
	let r = world.add_mesh(V2::new(0., 0.), V2::new(1e10, 1e10), 1.);
	assert!(matches!(r, Err(MeshError::InvalidParameters { .. })));
	assert_eq!(world.points().len(), 1);
	assert!(world.constraints().is_empty());
	assert!(world.meshes().is_empty());
}

#[test]
fn connect_records_endpoints_in_order() {
	let mut world = World::default();
	let a = world.add_point(V2::new(0., 0.), false);
	let b = world.add_point(V2::new(5., 0.), false);
	let id = world.connect(b, a).unwrap();
	let c = world.constraints()[id.0];
	assert_eq!((c.p1(), c.p2()), (b, a));
	assert!(c.touches(a) && c.touches(b));
}
