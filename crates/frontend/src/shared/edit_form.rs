use serde::Serialize;

/// A create/update payload edited in a details dialog.
pub trait EditForm: Serialize + Clone + Default + Send + Sync + 'static {
    /// Checks the form; the error is a translation key.
    fn validate(&self) -> Result<(), &'static str>;

    /// The payload actually sent, e.g. with trimmed or canonical fields.
    fn prepared(&self) -> Self {
        self.clone()
    }
}
