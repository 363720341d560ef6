/// Trait for wire records that normalize into a fixed domain shape
pub trait Normalizable {
    /// The domain type this record becomes
    type Normalized;

    /// Converts the record, applying defaults for missing fields.
    /// Returns `None` for records that cannot be keyed and must be skipped.
    fn normalize(self) -> Option<Self::Normalized>;
}
