pub mod prefabs;
pub mod sandbox;
