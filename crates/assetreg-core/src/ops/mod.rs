pub mod roster;

pub use roster::{MutationOutcome, Roster};
