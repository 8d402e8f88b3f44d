//! Slide navigation over representative comments

use super::events::{EventSink, Observers, ViewEvent};
use crate::config::RepresentConfig;
use crate::group::RepresentativeCard;
use crate::types::CommentId;

/// One-card-at-a-time navigation state
///
/// Every move that lands on a different slide emits
/// [`ViewEvent::SelectionChanged`] with that slide's comment id.
#[derive(Debug)]
pub struct Carousel {
    cards: Vec<RepresentativeCard>,
    current: usize,
    rewind: bool,
    observers: Observers,
}

impl Carousel {
    /// Create a carousel; wraps around at the ends when `rewind` is set
    pub fn new(cards: Vec<RepresentativeCard>, rewind: bool) -> Self {
        Self {
            cards,
            current: 0,
            rewind,
            observers: Observers::new(),
        }
    }

    /// Create a carousel whose wrapping follows `config.rewind`
    pub fn from_config(cards: Vec<RepresentativeCard>, config: &RepresentConfig) -> Self {
        Self::new(cards, config.rewind)
    }

    /// Attach an observer and announce the first slide to it
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.observers.subscribe(sink);
        if let Some(tid) = self.current_tid() {
            self.observers.emit(ViewEvent::SelectionChanged(Some(tid)));
        }
    }

    /// All cards
    pub fn cards(&self) -> &[RepresentativeCard] {
        &self.cards
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if there are no slides
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the current slide
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current card
    pub fn current(&self) -> Option<&RepresentativeCard> {
        self.cards.get(self.current)
    }

    /// Comment id of the current card
    pub fn current_tid(&self) -> Option<CommentId> {
        self.current().map(|c| c.tid)
    }

    /// Slides reached by repeated [`next`](Self::next), starting at the current one
    ///
    /// Wraps past the last slide when rewinding, otherwise stops there.
    pub fn slide_order(&self) -> Vec<&RepresentativeCard> {
        let (before, from_current) = self.cards.split_at(self.current.min(self.cards.len()));
        let mut order: Vec<_> = from_current.iter().collect();
        if self.rewind {
            order.extend(before);
        }
        order
    }

    /// Advance one slide
    pub fn next(&mut self) -> Option<CommentId> {
        let len = self.cards.len();
        if len == 0 {
            return None;
        }
        let target = if self.current + 1 < len {
            self.current + 1
        } else if self.rewind {
            0
        } else {
            self.current
        };
        self.move_to(target)
    }

    /// Go back one slide
    pub fn prev(&mut self) -> Option<CommentId> {
        let len = self.cards.len();
        if len == 0 {
            return None;
        }
        let target = if self.current > 0 {
            self.current - 1
        } else if self.rewind {
            len - 1
        } else {
            self.current
        };
        self.move_to(target)
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) -> Option<CommentId> {
        if index >= self.cards.len() {
            return self.current_tid();
        }
        self.move_to(index)
    }

    /// Jump to the slide showing `tid`, if present
    pub fn go_to_tid(&mut self, tid: CommentId) -> Option<CommentId> {
        let index = self.cards.iter().position(|c| c.tid == tid)?;
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> Option<CommentId> {
        if index != self.current {
            self.current = index;
            if let Some(tid) = self.current_tid() {
                self.observers.emit(ViewEvent::SelectionChanged(Some(tid)));
            }
        }
        self.current_tid()
    }
}
