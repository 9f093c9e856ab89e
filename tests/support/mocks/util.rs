// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicU64, Ordering};

/// 連番サフィックスを返すスラグ生成器（衝突しない）
#[derive(Default)]
pub struct SequentialSlug {
    next: AtomicU64,
}

impl conduit_core::application::ports::util::SlugGenerator for SequentialSlug {
    fn slugify(&self, s: &str) -> String {
        slug::slugify(s)
    }

    fn random_suffix(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
