// 生成トレースログ

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// 詳細トレースの有効フラグ
pub static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

/// トレース出力先ファイル（未設定なら破棄）
static TRACE_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// トレース出力先を開く（既存内容は破棄）
pub fn open_trace_file(path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut sink = TRACE_FILE.lock().unwrap();
    *sink = Some(file);
    Ok(())
}

/// 1行書き込む
pub fn write_trace(message: String) {
    if let Ok(mut sink) = TRACE_FILE.lock() {
        if let Some(ref mut file) = *sink {
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
    }
}

/// 詳細トレースを有効にする
pub fn enable_trace() {
    TRACE_ENABLED.store(true, Ordering::Relaxed);
}

/// 詳細トレースを無効にする
pub fn disable_trace() {
    TRACE_ENABLED.store(false, Ordering::Relaxed);
}

/// 詳細トレースが有効かチェック
pub fn trace_enabled() -> bool {
    TRACE_ENABLED.load(Ordering::Relaxed)
}

/// 生成過程のトレースマクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::trace_enabled() {
            let message = format!($($arg)*);
            $crate::logging::write_trace(message);
        }
    };
}
