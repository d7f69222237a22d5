pub mod health_check;
pub mod send;
pub mod thank_you;

pub use health_check::health_check;
pub use send::send;
pub use thank_you::thank_you;
