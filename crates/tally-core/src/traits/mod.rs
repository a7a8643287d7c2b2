//! Store traits (ports) consumed by the service layer

mod repositories;

pub use repositories::{CooldownStore, RepoResult, TallyStore};
