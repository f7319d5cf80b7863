//! Certificate strip actions

/// Actions for the certificates section
#[derive(Debug, Clone, PartialEq)]
pub enum CertificatesAction {
    /// The strip is ready to scroll: its cycle length and the source index of
    /// every tile to lay out
    Ready {
        cycle_length_px: u32,
        sequence: Vec<usize>,
    },
    /// The strip width changed and so did the tiles to lay out
    SequenceChanged(Vec<usize>),
    /// The strip could not be built
    Unavailable(String),
    /// Strip moved
    OffsetChanged(f64),
    /// Pointer entered or left the strip
    Hovered(bool),
    /// User toggled the manual pause
    TogglePause,
    /// Effective pause state of the strip changed
    PauseChanged(bool),
    /// Open the certificate under the strip centre
    OpenCentre,
}
