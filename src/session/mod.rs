pub mod handler;
pub mod messages;

pub use handler::run_round;
pub use messages::{HostEvent, RoundEvent};
