// アプリケーション層 - 設定の解釈と生成の駆動

pub mod generator;
pub mod settings;

pub use generator::{ExerciseGenerator, GenerateError};
pub use settings::{rule_from_settings, SettingsError, TrainingSettings};
