// そろばん暗算トレーナー 例題生成コア - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod presentation;   // プレゼンテーション層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{rule_from_settings, ExerciseGenerator, GenerateError, SettingsError, TrainingSettings};
pub use constants::{MAX_ATTEMPTS, MAX_STATE};
pub use domain::column::{Action, ColumnState};
pub use domain::exercise::{Exercise, Step};
pub use domain::rule::{DigitSet, FiveBias, Rule, RuleKind, StepRange, ValidationReport};
pub use presentation::{format_chain, to_display, DisplayExercise};
