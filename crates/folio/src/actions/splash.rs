use folio_motion::BootFrame;

/// Updates for the splash screen
#[derive(Debug, Clone, PartialEq)]
pub enum SplashAction {
    /// Revealed name and progress after the boot sequence advanced
    Frame(BootFrame),
}
