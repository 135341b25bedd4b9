// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
pub mod time;

// 時刻関連
pub use time::{FixedClock, SteppingClock, fixed_now};
