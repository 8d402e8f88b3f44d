//! Sortable, searchable comment list state

use super::events::{EventSink, Observers, ViewEvent};
use crate::comment::Comment;
use crate::config::RankConfig;
use crate::error::{RankerError, Result};
use crate::rank::{CommentRanker, RankMode, RankedList};
use crate::types::CommentId;
use tracing::{debug, warn};

/// State behind a comment list with sort buttons and a search box
///
/// Owns its comments; ranking happens on demand in [`visible`](Self::visible),
/// so the stored order is never changed.
#[derive(Debug)]
pub struct CommentListView {
    comments: Vec<Comment>,
    ranker: CommentRanker,
    selected: Option<CommentId>,
    sort_enabled: bool,
    search_enabled: bool,
    observers: Observers,
}

impl CommentListView {
    /// Create a view ranked by agreement
    pub fn new(comments: Vec<Comment>) -> Self {
        Self::with_ranker(comments, CommentRanker::new(RankMode::Agree))
    }

    /// Create a view using configured defaults
    pub fn from_config(comments: Vec<Comment>, config: &RankConfig) -> Self {
        Self::with_ranker(comments, CommentRanker::from_config(config))
    }

    fn with_ranker(comments: Vec<Comment>, ranker: CommentRanker) -> Self {
        Self {
            comments,
            ranker,
            selected: None,
            sort_enabled: true,
            search_enabled: true,
            observers: Observers::new(),
        }
    }

    /// Attach an observer
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.observers.subscribe(sink);
    }

    /// Current mode
    pub fn mode(&self) -> RankMode {
        self.ranker.mode()
    }

    /// Current search query
    pub fn search(&self) -> Option<&str> {
        self.ranker.search()
    }

    /// Currently selected comment
    pub fn selected(&self) -> Option<CommentId> {
        self.selected
    }

    /// Whether sort requests are honoured
    pub fn is_sort_enabled(&self) -> bool {
        self.sort_enabled
    }

    /// Whether search requests are honoured
    pub fn is_search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// All comments, in the order they were supplied
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Re-rank with `mode`
    ///
    /// Returns false and leaves the order untouched when sorting is disabled.
    pub fn sort_by(&mut self, mode: RankMode) -> bool {
        if !self.sort_enabled {
            warn!(%mode, "sort requested while sorting is disabled");
            return false;
        }
        if self.ranker.mode() == mode {
            return true;
        }
        self.ranker.set_mode(mode);
        self.observers.emit(ViewEvent::SortChanged(mode));
        true
    }

    /// Change the search query and clear the selection
    ///
    /// Returns false when search is disabled.
    pub fn update_search(&mut self, query: impl Into<String>) -> bool {
        if !self.search_enabled {
            warn!("search requested while search is disabled");
            return false;
        }
        let query = query.into();
        let previous = self.ranker.search().map(str::to_owned);
        self.ranker.set_search(query.clone());
        if self.ranker.search() != previous.as_deref() {
            self.observers.emit(ViewEvent::SearchChanged(query));
        }
        self.deselect();
        true
    }

    /// Select a comment by id
    pub fn select(&mut self, id: CommentId) -> Result<()> {
        if !self.comments.iter().any(|c| c.id == id) {
            return Err(RankerError::CommentNotFound(id));
        }
        self.set_selected(Some(id));
        Ok(())
    }

    /// Select the first visible comment, if any
    pub fn select_first(&mut self) -> Option<CommentId> {
        let first = self.visible().comments.first().map(|c| c.id)?;
        self.set_selected(Some(first));
        Some(first)
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.set_selected(None);
    }

    fn set_selected(&mut self, selected: Option<CommentId>) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.observers.emit(ViewEvent::SelectionChanged(selected));
    }

    /// Switch to single-group display, where sorting and search are off
    pub fn focus_group(&mut self) {
        debug!("focusing group; sort and search disabled");
        self.sort_enabled = false;
        self.search_enabled = false;
    }

    /// Replace the comment set, keeping mode and search
    ///
    /// The selection is cleared if its comment is gone.
    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        if let Some(id) = self.selected {
            if !self.comments.iter().any(|c| c.id == id) {
                self.deselect();
            }
        }
    }

    /// Comments in rank order, filtered by the search query
    pub fn visible(&self) -> RankedList<'_> {
        self.ranker.rank(&self.comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentBuilder;
    use std::sync::mpsc;

    fn comments() -> Vec<Comment> {
        vec![
            CommentBuilder::new(1).text("Fund the library").votes(2, 8).build(),
            CommentBuilder::new(2).text("Extend pool hours").votes(9, 1).build(),
            CommentBuilder::new(3).text("Fund road repair").votes(5, 5).build(),
        ]
    }

    fn ids(view: &CommentListView) -> Vec<u64> {
        view.visible().comments.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_defaults_to_agree() {
        let view = CommentListView::new(comments());
        assert_eq!(view.mode(), RankMode::Agree);
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_emits_event() {
        let (tx, rx) = mpsc::channel();
        let mut view = CommentListView::new(comments());
        view.subscribe(tx);

        assert!(view.sort_by(RankMode::Disagree));
        assert_eq!(ids(&view), vec![1, 3, 2]);
        assert_eq!(rx.try_recv().unwrap(), ViewEvent::SortChanged(RankMode::Disagree));

        assert!(view.sort_by(RankMode::Divisive));
        assert_eq!(ids(&view), vec![3, 1, 2]);
    }

    #[test]
    fn test_search_filters_and_deselects() {
        let (tx, rx) = mpsc::channel();
        let mut view = CommentListView::new(comments());
        view.select(CommentId(2)).unwrap();
        view.subscribe(tx);

        assert!(view.update_search("fund"));
        assert_eq!(ids(&view), vec![3, 1]);
        assert_eq!(view.selected(), None);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ViewEvent::SearchChanged("fund".to_string()),
                ViewEvent::SelectionChanged(None),
            ]
        );
    }

    #[test]
    fn test_unchanged_state_emits_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut view = CommentListView::new(comments());
        view.subscribe(tx);

        assert!(view.sort_by(RankMode::Agree));
        view.deselect();
        assert_eq!(rx.try_iter().count(), 0);

        view.select(CommentId(3)).unwrap();
        view.select(CommentId(3)).unwrap();
        assert!(view.update_search("road"));
        assert!(view.update_search("road"));

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ViewEvent::SelectionChanged(Some(CommentId(3))),
                ViewEvent::SearchChanged("road".to_string()),
                ViewEvent::SelectionChanged(None),
            ]
        );
    }

    #[test]
    fn test_select_unknown_comment() {
        let mut view = CommentListView::new(comments());
        assert!(matches!(
            view.select(CommentId(42)),
            Err(RankerError::CommentNotFound(CommentId(42)))
        ));
    }

    #[test]
    fn test_select_first() {
        let mut view = CommentListView::new(comments());
        view.sort_by(RankMode::Disagree);
        assert_eq!(view.select_first(), Some(CommentId(1)));
        assert_eq!(view.selected(), Some(CommentId(1)));

        let mut empty = CommentListView::new(Vec::new());
        assert_eq!(empty.select_first(), None);
    }

    #[test]
    fn test_focus_group_disables_controls() {
        let mut view = CommentListView::new(comments());
        view.focus_group();
        assert!(!view.sort_by(RankMode::Stars));
        assert_eq!(view.mode(), RankMode::Agree);
        assert!(!view.update_search("pool"));
        assert_eq!(view.search(), None);
    }

    #[test]
    fn test_replace_comments_drops_stale_selection() {
        let mut view = CommentListView::new(comments());
        view.select(CommentId(1)).unwrap();
        view.replace_comments(comments().into_iter().skip(1).collect());
        assert_eq!(view.selected(), None);

        view.select(CommentId(2)).unwrap();
        view.replace_comments(comments());
        assert_eq!(view.selected(), Some(CommentId(2)));
    }

    #[test]
    fn test_input_order_preserved() {
        let mut view = CommentListView::new(comments());
        view.sort_by(RankMode::Stars);
        let stored: Vec<u64> = view.comments().iter().map(|c| c.id.0).collect();
        assert_eq!(stored, vec![1, 2, 3]);
    }
}
