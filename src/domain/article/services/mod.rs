// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

pub const SLUG_SUFFIX_LEN: usize = 6;
/// 36^6: the suffix is drawn uniformly from `[0, SLUG_SUFFIX_SPACE)`.
pub const SLUG_SUFFIX_SPACE: u64 = 36u64.pow(SLUG_SUFFIX_LEN as u32);

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces article slugs of the form `<slugified-title>_<6 base-36 chars>`.
///
/// Uniqueness is probabilistic: the store is never consulted, so a collision
/// surfaces later as a unique-constraint conflict on insert.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn generate(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let suffix = encode_base36(
            self.generator.random_suffix() % SLUG_SUFFIX_SPACE,
            SLUG_SUFFIX_LEN,
        );
        ArticleSlug::new(format!("{base}_{suffix}"))
    }
}

/// Lower-case base-36, left-padded with `0` to `width`.
pub fn encode_base36(mut value: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width.max(1));
    loop {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
