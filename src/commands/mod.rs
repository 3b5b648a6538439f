pub mod analyze;
pub mod health;
pub mod inbox;
pub mod render;
pub mod reply;
