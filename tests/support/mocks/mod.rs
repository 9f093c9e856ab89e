// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール

pub mod security;
pub mod store;
pub mod time;
pub mod util;

// 時刻関連
pub use time::{DummyClock, fixed_now};

// セキュリティ関連
pub use security::{DummyPasswordHasher, TEST_JWT_SECRET};

// インメモリストア
pub use store::InMemoryStore;

// ユーティリティ関連
pub use util::SequentialSlug;
