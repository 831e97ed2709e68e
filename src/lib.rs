#![warn(missing_docs)]

//! Tab bar navigation combined with swipeable paging for Rust UI hosts.

pub use pagedeck_core as core;

/// Widgets module aggregating the container and its companion types.
pub mod widgets {
    pub use pagedeck_widgets::*;
}

/// A "prelude" for users of the pagedeck toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to embed a tab container in a host application.
///
/// ```rust
/// use pagedeck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::Config;
    pub use crate::core::error::PageError;
    pub use crate::core::geometry::{compute_layout, LayoutGeometry, SizeClass};
    pub use crate::core::page::{Page, PageContent, PageId};
    pub use crate::core::scroll::ScrollRegion;
    pub use crate::core::stack::{NestedStack, StackEvent, StackSubscription};
    pub use crate::core::strip::{TabItem, TabStrip};
    pub use crate::core::surface::{PagingSurface, TransitionDirection};
    pub use crate::core::update::Update;

    pub use crate::widgets::nav_stack::{NavStack, StackEntry};
    pub use crate::widgets::tab_container::TabContainer;
}
