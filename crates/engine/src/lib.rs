//! Ambet Engine - reward-box widget logic and presentation planning

pub mod display;
pub mod overlay;
pub mod reels;
pub mod registry;
pub mod wheel;
pub mod widget;

pub use registry::ResolvedRegistry;
pub use widget::{RewardWidget, SpinState, WonReward};
