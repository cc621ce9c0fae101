/// Produces candidate access codes.
///
/// Candidates are not guaranteed to be unique; callers check storage and
/// retry on collision.
pub trait AccessCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
