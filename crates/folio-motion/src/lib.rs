//! Timer-driven animation controllers for the folio terminal portfolio
//!
//! This crate provides:
//! - `TimerScope`: a virtual clock owning one controller's timers
//! - `BootSequence`: splash screen typewriter and progress bar
//! - `CarouselDriver`: infinite auto-scrolling strip with hover pause
//! - `CountUp` and `Flash`: small one-off animations
//!
//! Every controller owns its own scope and is advanced explicitly with
//! `advance(dt)`, so the same code runs against wall-clock deltas in the
//! application and against a virtual clock in tests.

pub mod boot;
pub mod carousel;
pub mod count_up;
pub mod flash;
pub mod scope;

pub use boot::{BootConfig, BootFrame, BootSequence, OnComplete, PROGRESS_FULL};
pub use carousel::{CarouselConfig, CarouselDriver, CarouselError, MIN_COPIES};
pub use count_up::CountUp;
pub use flash::Flash;
pub use scope::{TimerId, TimerScope};
