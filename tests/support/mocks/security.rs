// tests/support/mocks/security.rs
use async_trait::async_trait;
use conduit_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// テスト用 JWT シークレット（32 バイト以上）
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-test-secret-test-secret";

const HASH_PREFIX: &str = "plain$";

/// Argon2 を使わない高速なパスワードハッシャー
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash
            .strip_prefix(HASH_PREFIX)
            .is_some_and(|stored| stored == password))
    }
}
