//! Slide navigation state machine.
//!
//! The state is a value: `transition` takes it by value and returns what to
//! do next, so the event loop owns exactly one copy.

/// A navigation request, already decoded from terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Previous,
    First,
    Last,
    Quit,
    Resize { width: u16, height: u16 },
}

/// Current slide index plus the viewport it is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u16,
    pub height: u16,
    pub current: usize,
}

impl ViewportState {
    /// Start at the first slide.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            current: 0,
        }
    }
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Redraw with this state.
    Render(ViewportState),
    /// Leave the presentation.
    Quit,
}

/// Apply `event` to `state` for a document of `slide_count` slides.
///
/// Indices clamp at both ends; there is no wraparound.
pub fn transition(state: ViewportState, event: NavEvent, slide_count: usize) -> Step {
    let last = slide_count.saturating_sub(1);
    let mut next = state;

    match event {
        NavEvent::Quit => return Step::Quit,
        NavEvent::Next => next.current = state.current.saturating_add(1),
        NavEvent::Previous => next.current = state.current.saturating_sub(1),
        NavEvent::First => next.current = 0,
        NavEvent::Last => next.current = last,
        NavEvent::Resize { width, height } => {
            next.width = width;
            next.height = height;
        }
    }

    next.current = next.current.min(last);
    Step::Render(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(current: usize) -> ViewportState {
        ViewportState {
            width: 80,
            height: 24,
            current,
        }
    }

    fn index_after(state: ViewportState, event: NavEvent, count: usize) -> usize {
        match transition(state, event, count) {
            Step::Render(s) => s.current,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_initial_index_is_zero() {
        assert_eq!(ViewportState::new(80, 24).current, 0);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(index_after(at(0), NavEvent::Next, 3), 1);
        assert_eq!(index_after(at(2), NavEvent::Previous, 3), 1);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        assert_eq!(index_after(at(2), NavEvent::Next, 3), 2);
        assert_eq!(index_after(at(0), NavEvent::Previous, 3), 0);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(index_after(at(1), NavEvent::First, 5), 0);
        assert_eq!(index_after(at(1), NavEvent::Last, 5), 4);
    }

    #[test]
    fn test_quit() {
        assert_eq!(transition(at(1), NavEvent::Quit, 3), Step::Quit);
    }

    #[test]
    fn test_resize_keeps_index() {
        let step = transition(
            at(1),
            NavEvent::Resize {
                width: 120,
                height: 40,
            },
            3,
        );
        assert_eq!(
            step,
            Step::Render(ViewportState {
                width: 120,
                height: 40,
                current: 1
            })
        );
    }

    #[test]
    fn test_empty_document_stays_at_zero() {
        for event in [NavEvent::Next, NavEvent::Previous, NavEvent::First, NavEvent::Last] {
            assert_eq!(index_after(at(0), event, 0), 0);
        }
    }

    #[test]
    fn test_walk_never_leaves_range() {
        let events = [
            NavEvent::Next,
            NavEvent::Next,
            NavEvent::Next,
            NavEvent::Next,
            NavEvent::Previous,
            NavEvent::Last,
            NavEvent::Next,
            NavEvent::First,
            NavEvent::Previous,
        ];
        let mut state = at(0);
        for event in events {
            if let Step::Render(s) = transition(state, event, 3) {
                assert!(s.current < 3);
                state = s;
            }
        }
        assert_eq!(state.current, 0);
    }
}
