/// Produces identifiers for new documents.
///
/// Every call must return a value never returned before.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
