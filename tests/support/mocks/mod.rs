// tests/support/mocks/mod.rs
pub mod notes;
pub mod security;
pub mod time;
pub mod users;

pub use notes::InMemoryNotes;
pub use security::{FakeTokenManager, StrictPasswordHasher};
pub use time::{FixedClock, fixed_now};
pub use users::InMemoryUsers;
