pub mod ghost;
pub mod item;
pub mod movement;
pub mod player;
pub mod speed;
