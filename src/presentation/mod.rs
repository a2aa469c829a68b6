// プレゼンテーション層 - 表示用の射影のみ（描画は埋め込み側）

pub mod format;

pub use format::{format_chain, to_display, DisplayExercise};
