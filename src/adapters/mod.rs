// Adapters layer: concrete implementations of the domain ports (local filesystem, system clock).

pub mod clock;
pub mod storage;

pub use clock::SystemClock;
pub use storage::LocalStorage;
