pub trait Validate {
    /// Returns a human-readable reason when the value is unusable.
    fn validate(&self) -> Result<(), String>;
}
