use thiserror::Error;

/// Failure while wiring the toggler to the hosting page.
///
/// Raised at setup time only and fatal to initialization; once the listeners
/// are attached, nothing in the event path can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WireError {
    /// A required element was absent from the document when listeners were
    /// being attached. Aborts the remaining attachments in the same pass.
    #[error("missing #{id}")]
    MissingElement { id: String },
}
