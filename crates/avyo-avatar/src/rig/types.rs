//! Avatar trait.

use avyo_common::{ActivityState, Signal};

use crate::pose::Pose;

/// Trait for all avatar implementations (rigged skins and null).
///
/// Driven once per display frame by the host loop; the host reads
/// [`Avatar::pose`] afterwards and hands it to its renderer.
pub trait Avatar: Send + Sync {
    /// Whether this avatar should be rendered.
    fn is_visible(&self) -> bool;

    /// Advance animation by `dt` seconds under the given signal bundle.
    fn update(&mut self, dt: f64, signal: Signal);

    /// Pose produced by the last update.
    fn pose(&self) -> &Pose;

    /// Activity resolved on the last update.
    fn activity(&self) -> ActivityState;
}
