//! Presentation state driven by ranker output
//!
//! Views hold the state behind sort buttons, a search box and a carousel.
//! Instead of broadcasting on a global bus they notify the observers that
//! subscribed to them.

mod carousel;
mod events;
mod list;

pub use carousel::Carousel;
pub use events::{EventSink, Observers, ViewEvent};
pub use list::CommentListView;
