//! Certificate strip state

/// Mirror of the carousel driver for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificatesState {
    /// Horizontal offset of the strip in pixels, always in `(-cycle, 0]`
    pub offset_px: f64,
    pub cycle_length_px: u32,
    /// Source index of each tile, in layout order, as handed out by the driver
    pub sequence: Vec<usize>,
    /// Pointer is over the strip
    pub hovered: bool,
    /// User paused the strip with `p`
    pub manual_pause: bool,
    /// Effective pause state reported by the driver
    pub paused: bool,
    /// Why the strip could not be built
    pub error: Option<String>,
}
