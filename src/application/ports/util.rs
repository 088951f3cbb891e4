// src/application/ports/util.rs
/// Lowercases, transliterates non-ASCII text and joins words with hyphens.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
