mod fake_observation_store;
mod manual_clock;

pub use fake_observation_store::FakeObservationStore;
pub use manual_clock::ManualClock;
