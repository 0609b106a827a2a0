pub mod forces;
pub mod rapier_physics;
