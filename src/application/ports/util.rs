// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// URL-safe, lower-case, hyphenated form of `input`.
    fn slugify(&self, input: &str) -> String;
    /// A fresh random number; the slug service folds it into its suffix space.
    fn random_suffix(&self) -> u64;
}
