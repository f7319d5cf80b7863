/// Displayed values of the About section counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutState {
    pub values: Vec<u32>,
}

impl AboutState {
    /// Displayed value of counter `index`, zero until the counters start
    pub fn value(&self, index: usize) -> u32 {
        self.values.get(index).copied().unwrap_or(0)
    }
}
