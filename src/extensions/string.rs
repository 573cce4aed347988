/// Separator normalization for user-typed date keys. Hosts hand the engine
/// `2024/03/01` as often as `2024-03-01`; normalizing up front keeps the
/// date-key format list down to the dashed shapes.
pub trait ToDashSeparators {
    /// Returns a trimmed copy with every `/` replaced by `-`.
    fn to_dash_separators(&self) -> String;
}

impl ToDashSeparators for str {
    fn to_dash_separators(&self) -> String {
        self.trim().replace('/', "-")
    }
}

impl ToDashSeparators for String {
    fn to_dash_separators(&self) -> String {
        self.as_str().to_dash_separators()
    }
}
