//! Swipe-to-reveal row actions.
//!
//! [`wrap_with_swipe_container`] creates one coordination scope per
//! scrollable region; [`SwipeContainer::attach_swipe_actions`] attaches a
//! [`RowSwipeController`] to a row. Rows in the same container close each
//! other when one of them starts dragging, and all of them close when the
//! container is tapped or scrolled.

mod action;
mod config;
mod container;
mod controller;
mod edge;
mod error;
mod hub;
mod render;
pub mod shaping;
mod state;

pub use action::{ActionRole, SwipeAction};
pub use config::{SwipeConfig, SwipeOptions};
pub use container::{wrap_with_swipe_container, SwipeContainer, SwipeRow, DELETE_LABEL};
pub use controller::{RowEnvironment, RowSwipeController};
pub use edge::Edge;
pub use error::SwipeError;
pub use hub::{CloseSignal, ContainerActivity, HubSubscription, SwipeHub};
pub use render::RowRenderState;
pub use state::RowGestureState;

pub mod prelude {
    pub use crate::action::{ActionRole, SwipeAction};
    pub use crate::config::{SwipeConfig, SwipeOptions};
    pub use crate::container::{wrap_with_swipe_container, SwipeContainer, SwipeRow};
    pub use crate::controller::RowSwipeController;
    pub use crate::edge::Edge;
    pub use crate::hub::ContainerActivity;
    pub use crate::render::RowRenderState;
}
