//! Name-generation capability boundary.

/// Produces candidate directory names.
///
/// Implementations make no uniqueness guarantee; collision handling belongs
/// to the caller.
pub trait NameGenerator {
    /// Produce one candidate name.
    fn generate(&self) -> String;
}

impl<G: NameGenerator + ?Sized> NameGenerator for &G {
    fn generate(&self) -> String {
        (**self).generate()
    }
}
