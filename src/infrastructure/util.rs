use crate::application::ports::util::SlugGenerator;
use crate::domain::article::services::SLUG_SUFFIX_SPACE;
use rand::Rng;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }

    fn random_suffix(&self) -> u64 {
        rand::rng().random_range(0..SLUG_SUFFIX_SPACE)
    }
}
