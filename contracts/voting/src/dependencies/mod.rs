mod votes;
pub use votes::{Votes, VotesClient};
