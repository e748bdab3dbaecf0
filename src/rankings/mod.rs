//! Rankings - per-division standings and the pound-for-pound list

pub mod division;
pub mod p4p;

pub use division::{calculate_rankings, rank_score, rerank, RankingUpdate};
pub use p4p::{p4p_score, pound_for_pound, P4PEntry, P4P_SIZE};
