//! Bulk update over a dynamic collection of borrowed buttons.

use embedded_hal_1::digital::InputPin;
use heapless::Vec;

use crate::button::{Button, ButtonId};
use crate::warn;

/// An unordered set of borrowed [`Button`]s updated as one unit.
///
/// The group never owns its members; removing one, or dropping the whole
/// group, hands the borrow back and leaves the button untouched. Membership
/// changes are all-or-nothing: a rejected [`ButtonGroup::add`] leaves the
/// collection exactly as it was, visible to the caller through
/// [`ButtonGroup::len`].
pub struct ButtonGroup<'a, I, const N: usize> {
    buttons: Vec<&'a mut Button<I>, N>,
}

impl<'a, I: InputPin, const N: usize> ButtonGroup<'a, I, N> {
    /// Creates an empty group with room for `N` members.
    pub const fn new() -> Self {
        Self { buttons: Vec::new() }
    }

    /// Appends a button to the group.
    ///
    /// With all `N` slots occupied the group is left unchanged and the
    /// borrow is handed back to the caller.
    pub fn add(&mut self, button: &'a mut Button<I>) -> Result<(), &'a mut Button<I>> {
        let id = button.id();
        self.buttons.push(button).map_err(|button| {
            warn!("button group full, cannot add button {}", id.0);
            button
        })
    }

    /// Removes the first member with the given id, returning its borrow.
    ///
    /// Removes at most one member even if ids are duplicated; an unknown id
    /// is a no-op. The button itself is unaffected.
    pub fn remove(&mut self, id: ButtonId) -> Option<&'a mut Button<I>> {
        let index = self.buttons.iter().position(|button| button.id() == id)?;
        // Membership is unordered, so compaction need not keep order.
        Some(self.buttons.swap_remove(index))
    }

    /// Updates every member with the given poll timestamp.
    ///
    /// Returns true iff at least one member reported an accepted transition.
    /// All members are polled regardless of earlier results.
    pub fn update(&mut self, now_ms: u32) -> bool {
        let mut changed = false;
        for button in self.buttons.iter_mut() {
            changed |= button.update(now_ms);
        }
        changed
    }

    /// Returns the current number of members.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Returns true when the group has no members.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl<I: InputPin, const N: usize> Default for ButtonGroup<'_, I, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use core::convert::Infallible;
    use std::cell::Cell;
    use std::rc::Rc;

    use embedded_hal_1::digital::{ErrorType, InputPin};

    use super::*;
    use crate::button::ActiveState;

    #[derive(Clone, Debug)]
    struct FakePin {
        level: Rc<Cell<bool>>,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.level.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.level.get())
        }
    }

    fn button(id: u8) -> (Button<FakePin>, Rc<Cell<bool>>) {
        let level = Rc::new(Cell::new(false));
        let pin = FakePin {
            level: level.clone(),
        };
        (
            Button::new(ButtonId(id), pin, ActiveState::ActiveHigh),
            level,
        )
    }

    #[test]
    fn add_then_remove_restores_empty() {
        let (mut a, _level) = button(1);
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();

        assert!(group.add(&mut a).is_ok());
        assert_eq!(group.len(), 1);

        let removed = group.remove(ButtonId(1)).unwrap();
        assert_eq!(removed.id(), ButtonId(1));
        assert!(group.is_empty());

        // The removed button is unaffected and still usable on its own.
        removed.update(0);
        assert!(removed.is_released());
    }

    #[test]
    fn update_on_empty_group_reports_no_change() {
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();
        assert!(!group.update(0));
    }

    #[test]
    fn full_group_rejects_add_unchanged() {
        let (mut a, _la) = button(1);
        let (mut b, _lb) = button(2);
        let mut group: ButtonGroup<FakePin, 1> = ButtonGroup::new();

        assert!(group.add(&mut a).is_ok());
        let rejected = group.add(&mut b).unwrap_err();
        assert_eq!(rejected.id(), ButtonId(2));

        // No partial growth: the original member is still the only one.
        assert_eq!(group.len(), 1);
        assert!(group.remove(ButtonId(1)).is_some());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let (mut a, _level) = button(1);
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();
        group.add(&mut a).unwrap();

        assert!(group.remove(ButtonId(9)).is_none());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn remove_takes_one_match_even_with_duplicates() {
        let (mut a, _la) = button(7);
        let (mut b, _lb) = button(7);
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();
        group.add(&mut a).unwrap();
        group.add(&mut b).unwrap();

        assert!(group.remove(ButtonId(7)).is_some());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn update_polls_all_members_and_aggregates() {
        let (mut a, level_a) = button(1);
        let (mut b, level_b) = button(2);
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();
        group.add(&mut a).unwrap();
        group.add(&mut b).unwrap();

        // Both raw levels rise together; both commits land on the same tick,
        // and neither hides the other's transition.
        level_a.set(true);
        level_b.set(true);
        assert!(!group.update(0));
        for t in 1..=5 {
            assert!(!group.update(t));
        }
        assert!(group.update(6));
        assert!(!group.update(7));

        drop(group);
        assert!(a.just_pressed());
        assert!(b.just_pressed());
    }

    #[test]
    fn update_reports_change_from_a_single_member() {
        let (mut a, level_a) = button(1);
        let (mut b, _level_b) = button(2);
        let mut group: ButtonGroup<FakePin, 4> = ButtonGroup::new();
        group.add(&mut a).unwrap();
        group.add(&mut b).unwrap();

        level_a.set(true);
        group.update(0);
        for t in 1..=5 {
            group.update(t);
        }
        assert!(group.update(6));

        drop(group);
        assert!(a.is_pressed());
        assert!(b.is_released());
    }
}
