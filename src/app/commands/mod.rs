pub mod browse;
pub mod observation;
pub mod session;
