pub mod config;
pub mod constraint;
pub mod editor;
pub mod error;
pub mod frame_clock;
pub mod integrator;
pub mod mesh;
pub mod particle;
pub mod solver;
pub mod world;

pub type V2 = nalgebra::Vector2<f64>;

pub use config::SimConfig;
pub use constraint::{Constraint, ConstraintId};
pub use editor::{Editor, MeshPlacement, Selection};
pub use error::{MeshError, WorldError};
pub use frame_clock::FrameClock;
pub use mesh::{GeneratedMesh, Mesh, MeshId};
pub use particle::{PointId, PointMass};
pub use solver::RelaxStats;
pub use world::World;
