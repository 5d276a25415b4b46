use std::collections::VecDeque;

use crate::stroke::Stroke;

/// Gesture-grouped undo/redo history of strokes.
///
/// Strokes move between four owners and are never shared or copied:
/// `pending` (enqueued, not yet visible) -> `live` (rendered every frame)
/// <-> `redo` (undone). The undo stack holds only counts: each entry is the
/// number of strokes at the tail of `live` that make up one gesture.
#[derive(Debug, Default)]
pub struct HistoryEngine {
    /// Strokes created since the last commit, oldest first
    pending: VecDeque<Stroke>,
    /// Committed strokes in render order
    live: Vec<Stroke>,
    undo_counts: Vec<usize>,
    /// Undone strokes; the most recently undone group sits on top
    redo: Vec<Stroke>,
    redo_counts: Vec<usize>,
    /// Strokes committed so far by the open gesture, if any
    gesture: Option<usize>,
}

impl HistoryEngine {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stroke for the next commit
    pub fn enqueue(&mut self, stroke: Stroke) {
        self.pending.push_back(stroke);
    }

    /// Move every pending stroke to the live sequence and return how many moved.
    ///
    /// Any commit, even an empty one, invalidates redo. Strokes committed
    /// outside a gesture are recorded as a group of their own.
    pub fn commit(&mut self) -> usize {
        let count = self.pending.len();
        self.live.extend(self.pending.drain(..));
        self.clear_redo();

        match self.gesture.as_mut() {
            Some(committed) => *committed += count,
            None if count > 0 => self.undo_counts.push(count),
            None => {}
        }
        count
    }

    /// Start grouping commits into one undo step
    pub fn begin_gesture(&mut self) {
        if self.gesture.is_none() {
            self.gesture = Some(0);
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Close the open gesture, recording it if it committed anything.
    ///
    /// Strokes still pending are committed first so they belong to the
    /// gesture. Returns the size of the recorded group (0 if nothing was drawn).
    pub fn end_gesture(&mut self) -> usize {
        if !self.pending.is_empty() {
            self.commit();
        }
        let Some(count) = self.gesture.take() else {
            return 0;
        };
        if count > 0 {
            self.undo_counts.push(count);
            self.clear_redo();
            log::info!("Pushed {} strokes to the undo stack", count);
        }
        count
    }

    /// Undo the newest gesture and return how many strokes it took back
    pub fn undo(&mut self) -> usize {
        if self.gesture.is_some() {
            self.end_gesture();
        }

        let Some(count) = self.undo_counts.pop() else {
            log::info!("There is nothing to undo");
            return 0;
        };
        log::info!("Undoing {} strokes", count);

        let tail = self.live.split_off(self.live.len().saturating_sub(count));
        self.redo.extend(tail.into_iter().rev());
        self.redo_counts.push(count);
        count
    }

    /// Redo the most recently undone gesture and return how many strokes came back
    pub fn redo(&mut self) -> usize {
        if self.gesture.is_some() {
            self.end_gesture();
        }

        let Some(count) = self.redo_counts.pop() else {
            log::info!("There is nothing to redo");
            return 0;
        };
        log::info!("Redoing {} strokes", count);

        let tail = self.redo.split_off(self.redo.len().saturating_sub(count));
        self.live.extend(tail.into_iter().rev());
        self.undo_counts.push(count);
        count
    }

    fn clear_redo(&mut self) {
        let cleared = self.redo.len();
        self.redo.clear();
        self.redo_counts.clear();
        if cleared > 0 {
            log::info!("Cleared {} strokes from the redo stack", cleared);
        }
    }

    /// Committed strokes, oldest first
    pub fn live(&self) -> &[Stroke] {
        &self.live
    }

    /// The `count` strokes most recently moved to the redo stack, newest first
    pub fn recently_undone(&self, count: usize) -> &[Stroke] {
        &self.redo[self.redo.len().saturating_sub(count)..]
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Strokes currently held for redo
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn undo_counts(&self) -> &[usize] {
        &self.undo_counts
    }

    pub fn redo_counts(&self) -> &[usize] {
        &self.redo_counts
    }

    /// Returns true if there are gestures that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_counts.is_empty() || self.gesture.is_some_and(|count| count > 0)
    }

    /// Returns true if there are gestures that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Point;
    use egui::Color32;

    fn stroke(n: i32) -> Stroke {
        Stroke::new(Point::new(n, n), Point::new(n + 1, n), 2.0, Color32::BLACK, None)
    }

    fn draw_gesture(history: &mut HistoryEngine, strokes: std::ops::Range<i32>) -> usize {
        history.begin_gesture();
        for n in strokes {
            history.enqueue(stroke(n));
            history.commit();
        }
        history.end_gesture()
    }

    fn assert_balanced(history: &HistoryEngine) {
        assert_eq!(history.undo_counts().iter().sum::<usize>(), history.live().len());
        assert_eq!(history.redo_counts().iter().sum::<usize>(), history.redo_len());
    }

    #[test]
    fn test_enqueue_is_invisible_until_commit() {
        let mut history = HistoryEngine::new();
        history.enqueue(stroke(0));
        history.enqueue(stroke(1));
        assert_eq!(history.pending_len(), 2);
        assert!(history.live().is_empty());

        assert_eq!(history.commit(), 2);
        assert_eq!(history.pending_len(), 0);
        assert_eq!(history.live(), &[stroke(0), stroke(1)]);
    }

    #[test]
    fn test_commit_empty_queue_returns_zero() {
        let mut history = HistoryEngine::new();
        assert_eq!(history.commit(), 0);
        assert_eq!(history.commit(), 0);
        assert!(history.undo_counts().is_empty());
    }

    #[test]
    fn test_gesture_groups_commits() {
        let mut history = HistoryEngine::new();
        assert_eq!(draw_gesture(&mut history, 0..4), 4);
        assert_eq!(draw_gesture(&mut history, 4..6), 2);
        assert_eq!(history.undo_counts(), &[4, 2]);
        assert_balanced(&history);
    }

    #[test]
    fn test_empty_gesture_is_not_recorded() {
        let mut history = HistoryEngine::new();
        history.begin_gesture();
        assert_eq!(history.end_gesture(), 0);
        assert!(!history.is_drawing());
        assert!(history.undo_counts().is_empty());
    }

    #[test]
    fn test_end_gesture_commits_pending_tail() {
        let mut history = HistoryEngine::new();
        history.begin_gesture();
        history.enqueue(stroke(0));
        history.commit();
        history.enqueue(stroke(1));
        assert_eq!(history.end_gesture(), 2);
        assert_eq!(history.live().len(), 2);
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let mut history = HistoryEngine::new();
        assert_eq!(history.undo(), 0);
        assert_eq!(history.redo(), 0);
        assert!(history.live().is_empty());
        assert!(history.undo_counts().is_empty());
        assert!(history.redo_counts().is_empty());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_undo_moves_group_to_redo() {
        let mut history = HistoryEngine::new();
        draw_gesture(&mut history, 0..3);
        draw_gesture(&mut history, 3..5);

        assert_eq!(history.undo(), 2);
        assert_eq!(history.live(), &[stroke(0), stroke(1), stroke(2)]);
        assert_eq!(history.redo_len(), 2);
        assert_eq!(history.recently_undone(2), &[stroke(4), stroke(3)]);
        assert_balanced(&history);
    }

    #[test]
    fn test_redo_restores_original_order() {
        let mut history = HistoryEngine::new();
        draw_gesture(&mut history, 0..3);
        draw_gesture(&mut history, 3..7);
        let before = history.live().to_vec();

        assert_eq!(history.undo(), 4);
        assert_eq!(history.undo(), 3);
        assert_eq!(history.undo(), 0);
        assert!(history.live().is_empty());

        assert_eq!(history.redo(), 3);
        assert_eq!(history.redo(), 4);
        assert_eq!(history.redo(), 0);
        assert_eq!(history.live(), &before[..]);
        assert_balanced(&history);
    }

    #[test]
    fn test_commit_clears_redo_even_when_empty() {
        let mut history = HistoryEngine::new();
        draw_gesture(&mut history, 0..3);
        history.undo();
        assert!(history.can_redo());

        assert_eq!(history.commit(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), 0);
    }

    #[test]
    fn test_undo_mid_gesture_closes_it_first() {
        let mut history = HistoryEngine::new();
        draw_gesture(&mut history, 0..2);
        history.begin_gesture();
        history.enqueue(stroke(2));
        history.commit();
        history.enqueue(stroke(3));

        assert_eq!(history.undo(), 2);
        assert!(!history.is_drawing());
        assert_eq!(history.live(), &[stroke(0), stroke(1)]);
        assert_balanced(&history);
    }

    #[test]
    fn test_commit_outside_gesture_is_its_own_group() {
        let mut history = HistoryEngine::new();
        history.enqueue(stroke(0));
        history.enqueue(stroke(1));
        history.commit();
        assert_eq!(history.undo_counts(), &[2]);
        assert_eq!(history.undo(), 2);
        assert!(history.live().is_empty());
    }
}
