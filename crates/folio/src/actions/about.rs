/// About section counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutAction {
    /// Current displayed value of every counter, in profile order
    CountersChanged(Vec<u32>),
}
