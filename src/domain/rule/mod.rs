// ルール関連のドメインモデル

pub mod candidates;
pub mod config;
pub mod rule;
pub mod validate;

pub use candidates::ActionCandidates;
pub use config::{DigitSet, FiveBias, StepRange};
pub use rule::{Rule, RuleKind};
pub use validate::ValidationReport;
