//! Finish methods - the closed taxonomy of how a fight ends

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fight::constants::ROUND_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TkoCause {
    Punches,
    Kicks,
    Elbows,
    GroundAndPound,
    DoctorStoppage,
    CornerStoppage,
}

impl TkoCause {
    pub const ALL: [TkoCause; 6] = [
        TkoCause::Punches,
        TkoCause::Kicks,
        TkoCause::Elbows,
        TkoCause::GroundAndPound,
        TkoCause::DoctorStoppage,
        TkoCause::CornerStoppage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TkoCause::Punches => "Punches",
            TkoCause::Kicks => "Kicks",
            TkoCause::Elbows => "Elbows",
            TkoCause::GroundAndPound => "Ground and Pound",
            TkoCause::DoctorStoppage => "Doctor Stoppage",
            TkoCause::CornerStoppage => "Corner Stoppage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionHold {
    RearNakedChoke,
    GuillotineChoke,
    ArmTriangle,
    TriangleChoke,
    Armbar,
    Kimura,
    Americana,
    HeelHook,
    Kneebar,
    DarceChoke,
    AnacondaChoke,
    EzekielChoke,
    MountedTriangle,
    NeckCrank,
}

impl SubmissionHold {
    pub const ALL: [SubmissionHold; 14] = [
        SubmissionHold::RearNakedChoke,
        SubmissionHold::GuillotineChoke,
        SubmissionHold::ArmTriangle,
        SubmissionHold::TriangleChoke,
        SubmissionHold::Armbar,
        SubmissionHold::Kimura,
        SubmissionHold::Americana,
        SubmissionHold::HeelHook,
        SubmissionHold::Kneebar,
        SubmissionHold::DarceChoke,
        SubmissionHold::AnacondaChoke,
        SubmissionHold::EzekielChoke,
        SubmissionHold::MountedTriangle,
        SubmissionHold::NeckCrank,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionHold::RearNakedChoke => "Rear Naked Choke",
            SubmissionHold::GuillotineChoke => "Guillotine Choke",
            SubmissionHold::ArmTriangle => "Arm Triangle",
            SubmissionHold::TriangleChoke => "Triangle Choke",
            SubmissionHold::Armbar => "Armbar",
            SubmissionHold::Kimura => "Kimura",
            SubmissionHold::Americana => "Americana",
            SubmissionHold::HeelHook => "Heel Hook",
            SubmissionHold::Kneebar => "Kneebar",
            SubmissionHold::DarceChoke => "D'Arce Choke",
            SubmissionHold::AnacondaChoke => "Anaconda Choke",
            SubmissionHold::EzekielChoke => "Ezekiel Choke",
            SubmissionHold::MountedTriangle => "Mounted Triangle",
            SubmissionHold::NeckCrank => "Neck Crank",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    Unanimous,
    Split,
    Majority,
}

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishMethod {
    Ko,
    Tko(TkoCause),
    Submission(SubmissionHold),
    Decision(DecisionKind),
}

/// Record-keeping bucket a method counts toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodCategory {
    Knockout,
    Submission,
    Decision,
}

impl FinishMethod {
    /// Uniform draw over KO and every TKO cause
    pub fn random_knockout<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll = rng.gen_range(0..=TkoCause::ALL.len());
        match roll {
            0 => FinishMethod::Ko,
            n => FinishMethod::Tko(TkoCause::ALL[n - 1]),
        }
    }

    pub fn random_submission<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hold = SubmissionHold::ALL
            .choose(rng)
            .copied()
            .unwrap_or(SubmissionHold::RearNakedChoke);
        FinishMethod::Submission(hold)
    }

    pub fn category(&self) -> MethodCategory {
        match self {
            FinishMethod::Ko | FinishMethod::Tko(_) => MethodCategory::Knockout,
            FinishMethod::Submission(_) => MethodCategory::Submission,
            FinishMethod::Decision(_) => MethodCategory::Decision,
        }
    }

    /// Stoppage before the final bell
    pub fn is_finish(&self) -> bool {
        !matches!(self, FinishMethod::Decision(_))
    }
}

impl std::fmt::Display for FinishMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishMethod::Ko => write!(f, "KO"),
            FinishMethod::Tko(cause) => write!(f, "TKO ({})", cause.label()),
            FinishMethod::Submission(hold) => write!(f, "{}", hold.label()),
            FinishMethod::Decision(DecisionKind::Unanimous) => write!(f, "Unanimous Decision"),
            FinishMethod::Decision(DecisionKind::Split) => write!(f, "Split Decision"),
            FinishMethod::Decision(DecisionKind::Majority) => write!(f, "Majority Decision"),
        }
    }
}

/// Elapsed time within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FightClock {
    pub minutes: u32,
    pub seconds: u32,
}

impl FightClock {
    /// The final bell of a round
    pub const FULL_ROUND: FightClock = FightClock { minutes: ROUND_MINUTES, seconds: 0 };

    /// Random stoppage time inside a round (0:00 - 4:59)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let minutes = rng.gen_range(0..ROUND_MINUTES);
        let seconds = rng.gen_range(0..60);
        Self { minutes, seconds }
    }
}

impl std::fmt::Display for FightClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}
