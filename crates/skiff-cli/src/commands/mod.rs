mod doctor;
mod sync;

pub use doctor::doctor;
pub use sync::sync;
