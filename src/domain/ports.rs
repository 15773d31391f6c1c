/// Name to ISO 3166-1 alpha-3 lookup seam.
///
/// Implementations must be pure: the same name always yields the same
/// answer, and unknown names surface as `None` rather than an error.
pub trait CountryLookup {
    fn lookup(&self, name: &str) -> Option<&'static str>;
}
