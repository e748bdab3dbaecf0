//! Fight model - round simulation and fight resolution

pub mod constants;
pub mod method;
pub mod resolver;
pub mod round;

pub use method::{DecisionKind, FightClock, FinishMethod, MethodCategory, SubmissionHold, TkoCause};
pub use resolver::{resolve_fight, rounds_for, FightResult, FightTotals};
pub use round::{simulate_round, CornerStats, Finish, RoundContext, RoundScore, RoundStats};
