#![warn(missing_docs)]

//! Widgets for pagedeck => See the `pagedeck` crate for more.

/// Contains a concrete nested navigation stack implementation.
pub mod nav_stack;

/// Contains the tab strip offset animation.
pub mod offset_animation;

/// Contains the [TabContainer](tab_container::TabContainer) widget.
pub mod tab_container;
