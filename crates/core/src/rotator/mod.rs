//! Circular content rotator shared by the review and testimonial sections.
//!
//! The rotator owns an immutable, non-empty list of items and a single
//! active index. All movement goes through [`Rotator::next`],
//! [`Rotator::previous`] and [`Rotator::go_to`], each of which reports a
//! [`Transition`] so the presentation layer knows which item became active.

use std::str::FromStr;

use crate::{Result, SiteError};

/// Index following `current` in a circular list of `len` items.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + 1) % len
}

/// Index preceding `current` in a circular list of `len` items.
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + len - 1) % len
}

/// Clamps `index` into `[0, len - 1]`.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Indices shown by a sliding window of `visible` slots starting at
/// `active`. The window never holds more slots than there are items, and an
/// `active` past the end is reduced modulo `len` first.
pub fn visible_window(active: usize, len: usize, visible: usize) -> Vec<usize> {
    let slots = visible.min(len);
    if slots == 0 {
        return Vec::new();
    }
    let start = active % len;
    (0..slots).map(|offset| (start + offset) % len).collect()
}

/// Signal emitted by every rotator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    /// Returns `true` when the active item actually changed.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// One position marker in the indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub selected: bool,
}

/// How a rotator is laid out on the page. Both layouts share the same state
/// machine; they only differ in how many items are shown around the active
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorLayout {
    /// One item at a time with dot indicators.
    Single,
    /// A window of `visible` consecutive items with directional controls.
    Sliding { visible: usize },
}

impl RotatorLayout {
    /// Indices of the items that are on screen for the given state.
    pub fn visible_indices(&self, active: usize, len: usize) -> Vec<usize> {
        match *self {
            RotatorLayout::Single => visible_window(active, len, 1),
            RotatorLayout::Sliding { visible } => visible_window(active, len, visible),
        }
    }
}

/// Circular cursor over a fixed, non-empty list of items.
#[derive(Debug, Clone)]
pub struct Rotator<T> {
    items: Vec<T>,
    active: usize,
}

impl<T> Rotator<T> {
    /// Creates a rotator positioned on the first item.
    ///
    /// Empty lists are refused with [`SiteError::EmptyRotator`]; the renderer
    /// always dereferences the active item.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyRotator);
        }
        Ok(Self { items, active: 0 })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; kept for parity with the slice API.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The item currently presented to the user.
    pub fn active(&self) -> &T {
        &self.items[self.active]
    }

    /// Advances to the following item, wrapping to the first after the last.
    pub fn next(&mut self) -> Transition {
        self.move_to(next_index(self.active, self.len()))
    }

    /// Steps back to the preceding item, wrapping to the last before the first.
    pub fn previous(&mut self) -> Transition {
        self.move_to(previous_index(self.active, self.len()))
    }

    /// Jumps straight to `index`.
    ///
    /// Indicators are generated from the same list, so an out-of-range index
    /// means a stale caller. It is clamped to the last item and logged rather
    /// than allowed to break the render path.
    pub fn go_to(&mut self, index: usize) -> Transition {
        let target = clamp_index(index, self.len());
        if target != index {
            tracing::warn!(
                requested = index,
                clamped = target,
                len = self.len(),
                "rotator index out of range"
            );
        }
        self.move_to(target)
    }

    /// One indicator per item, with exactly the active one selected.
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len())
            .map(|index| Indicator {
                index,
                selected: index == self.active,
            })
            .collect()
    }

    fn move_to(&mut self, target: usize) -> Transition {
        let transition = Transition {
            from: self.active,
            to: target,
        };
        self.active = target;
        tracing::debug!(from = transition.from, to = transition.to, "rotator transition");
        transition
    }
}

/// User request translated into a rotator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorCommand {
    Next,
    Previous,
    GoTo(usize),
}

impl RotatorCommand {
    pub fn apply<T>(self, rotator: &mut Rotator<T>) -> Transition {
        match self {
            RotatorCommand::Next => rotator.next(),
            RotatorCommand::Previous => rotator.previous(),
            RotatorCommand::GoTo(index) => rotator.go_to(index),
        }
    }
}

impl FromStr for RotatorCommand {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "next" | "n" => return Ok(RotatorCommand::Next),
            "prev" | "previous" | "p" => return Ok(RotatorCommand::Previous),
            _ => {}
        }

        let index = value
            .strip_prefix("goto:")
            .or_else(|| value.strip_prefix("goto="))
            .unwrap_or(value.as_str());

        index
            .parse::<usize>()
            .map(RotatorCommand::GoTo)
            .map_err(|_| SiteError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator(len: usize) -> Rotator<usize> {
        Rotator::new((0..len).collect()).unwrap()
    }

    /// Deterministic pseudo-random walk: `true` steps forward, `false` back.
    fn walk(seed: u64, steps: usize) -> Vec<bool> {
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (0..steps)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 33) & 1 == 1
            })
            .collect()
    }

    #[test]
    fn refuses_empty_list() {
        let err = Rotator::<u8>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, SiteError::EmptyRotator));
    }

    #[test]
    fn starts_on_first_item() {
        let rotator = rotator(4);
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(*rotator.active(), 0);
    }

    #[test]
    fn stays_in_bounds_for_any_sequence() {
        for len in 1..=12 {
            for seed in 0..16 {
                let mut rotator = rotator(len);
                for forward in walk(seed, 200) {
                    if forward {
                        rotator.next();
                    } else {
                        rotator.previous();
                    }
                    assert!(rotator.active_index() < len);
                    assert_eq!(*rotator.active(), rotator.active_index());
                }
            }
        }
    }

    #[test]
    fn next_and_previous_cancel_out() {
        for len in 1..=12 {
            for start in 0..len {
                let mut rotator = rotator(len);
                rotator.go_to(start);

                rotator.next();
                rotator.previous();
                assert_eq!(rotator.active_index(), start);

                rotator.previous();
                rotator.next();
                assert_eq!(rotator.active_index(), start);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut rotator = rotator(len);
                rotator.go_to(start);
                for _ in 0..len {
                    rotator.next();
                }
                assert_eq!(rotator.active_index(), start);
            }
        }
    }

    #[test]
    fn go_to_ignores_prior_state() {
        let len = 7;
        for start in 0..len {
            for target in 0..len {
                let mut rotator = rotator(len);
                rotator.go_to(start);
                let transition = rotator.go_to(target);
                assert_eq!(rotator.active_index(), target);
                assert_eq!(transition, Transition { from: start, to: target });
            }
        }
    }

    #[test]
    fn single_item_never_moves() {
        let mut rotator = rotator(1);
        assert!(!rotator.next().changed());
        assert!(!rotator.previous().changed());
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn wraps_around_three_items() {
        let mut rotator = Rotator::new(vec!['A', 'B', 'C']).unwrap();

        rotator.next();
        assert_eq!(*rotator.active(), 'B');
        rotator.next();
        assert_eq!(*rotator.active(), 'C');
        let wrap = rotator.next();
        assert_eq!(*rotator.active(), 'A');
        assert_eq!(wrap, Transition { from: 2, to: 0 });

        rotator.previous();
        assert_eq!(rotator.active_index(), 2);
        assert_eq!(*rotator.active(), 'C');
    }

    #[test]
    fn jump_updates_indicators() {
        for start in 0..3 {
            let mut rotator = Rotator::new(vec!['A', 'B', 'C']).unwrap();
            rotator.go_to(start);
            rotator.go_to(2);

            assert_eq!(*rotator.active(), 'C');
            let selected: Vec<bool> = rotator.indicators().iter().map(|i| i.selected).collect();
            assert_eq!(selected, vec![false, false, true]);
        }
    }

    #[test]
    fn clamps_out_of_range_jumps() {
        let mut rotator = rotator(3);
        let transition = rotator.go_to(10);
        assert_eq!(rotator.active_index(), 2);
        assert_eq!(transition.to, 2);
    }

    #[test]
    fn pure_index_helpers() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(clamp_index(9, 4), 3);
        assert_eq!(clamp_index(1, 4), 1);
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn sliding_window_wraps_and_caps() {
        assert_eq!(visible_window(0, 4, 3), vec![0, 1, 2]);
        assert_eq!(visible_window(3, 4, 3), vec![3, 0, 1]);
        assert_eq!(visible_window(1, 2, 3), vec![1, 0]);

        let layout = RotatorLayout::Sliding { visible: 2 };
        assert_eq!(layout.visible_indices(2, 3), vec![2, 0]);
        assert_eq!(RotatorLayout::Single.visible_indices(2, 3), vec![2]);
    }

    #[test]
    fn helpers_reduce_large_indices() {
        assert_eq!(visible_window(usize::MAX - 1, 3, 3), vec![2, 0, 1]);
        assert_eq!(visible_window(7, 0, 3), Vec::<usize>::new());
        assert_eq!(next_index(usize::MAX, 3), 1);
        assert_eq!(previous_index(usize::MAX, 3), 2);
    }

    #[test]
    fn parses_commands() {
        assert_eq!("next".parse::<RotatorCommand>().unwrap(), RotatorCommand::Next);
        assert_eq!("Prev".parse::<RotatorCommand>().unwrap(), RotatorCommand::Previous);
        assert_eq!("goto:2".parse::<RotatorCommand>().unwrap(), RotatorCommand::GoTo(2));
        assert_eq!("1".parse::<RotatorCommand>().unwrap(), RotatorCommand::GoTo(1));

        let err = "sideways".parse::<RotatorCommand>().unwrap_err();
        assert!(format!("{err}").contains("sideways"));
    }

    #[test]
    fn commands_drive_transitions() {
        let mut rotator = rotator(3);
        let commands = [
            RotatorCommand::Previous,
            RotatorCommand::Previous,
            RotatorCommand::GoTo(0),
            RotatorCommand::Next,
        ];
        let last = commands
            .into_iter()
            .map(|command| command.apply(&mut rotator))
            .last()
            .unwrap();

        assert_eq!(last, Transition { from: 0, to: 1 });
        assert_eq!(rotator.active_index(), 1);
    }
}
