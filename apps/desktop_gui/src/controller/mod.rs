//! Controller layer: UI events, per-page view state, and command orchestration.

pub mod customers;
pub mod events;
pub mod films;
pub mod home;
pub mod orchestration;

/// Lifecycle of a page's primary fetch. Every search, Show All, or
/// pagination action re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Populated,
    Empty,
}
