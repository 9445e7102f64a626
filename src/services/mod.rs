mod file_session_store;
mod http_observation_store;
mod memory_session_store;
mod system_clock;
mod timer_queue;

pub use file_session_store::FileSessionStore;
pub use http_observation_store::HttpObservationStore;
pub use memory_session_store::MemorySessionStore;
pub use system_clock::SystemClock;
pub use timer_queue::TimerQueue;
