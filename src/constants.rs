// 珠定数と生成パラメータ

/// ====== 珠定数 ======
/// 一珠（下段）の本数
pub const LOWER_BEADS: u8 = 4;
/// 五珠（上段）の値
pub const UPPER_VALUE: u8 = 5;
/// 1桁の最大値（五珠 + 一珠4個）
pub const MAX_STATE: u8 = 9;

/// ====== 生成パラメータ ======
/// 1例題あたりの生成リトライ上限
pub const MAX_ATTEMPTS: u32 = 100;
/// 重複なしバッチ生成の試行係数（count × この値 が総試行上限）
pub const UNIQUE_ATTEMPTS_FACTOR: usize = 10;

/// ====== 設定デフォルト ======
/// 桁選択が空のときに使う既定の数字
pub const DEFAULT_DIGITS: [u8; 4] = [1, 2, 3, 4];
/// ステップ数の既定範囲
pub const DEFAULT_MIN_STEPS: u32 = 2;
pub const DEFAULT_MAX_STEPS: u32 = 4;
/// ±5 候補の既定重み（1 = 無バイアス）
pub const DEFAULT_FIVE_BIAS: u32 = 3;
/// 五珠切り替え回数の既定上限
pub const DEFAULT_MAX_UPPER_TOGGLES: u32 = 2;
