//! Click handling for checkable controls.
//!
//! Radio groups are never stored. On every click the coordinator asks the
//! host tree for the clicked control's parent and that parent's direct
//! children; every sibling with [`ControlRole::Radio`] is a member of the
//! group. Nested containers therefore form independent groups.

/// Selection behaviour of a control.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ControlRole {
    /// Clicking never changes checked state.
    #[default]
    Normal,
    /// Clicking flips checked state.
    Toggle,
    /// Clicking checks; siblings with the same role are unchecked.
    Radio,
}

/// Read/write view of a control hierarchy.
///
/// `set_checked` reports whether the stored value actually changed. Hosts
/// that carry change callbacks fire them from there, only on a real flip.
pub trait ControlTree {
    type Id: Copy + Eq + core::fmt::Debug;

    fn role(&self, id: Self::Id) -> ControlRole;
    fn is_checked(&self, id: Self::Id) -> bool;
    fn set_checked(&mut self, id: Self::Id, checked: bool) -> bool;
    fn parent(&self, id: Self::Id) -> Option<Self::Id>;
    /// Direct children in sibling order.
    fn children(&self, id: Self::Id) -> Vec<Self::Id>;
}

/// One control whose checked state flipped during a click.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CheckedChanged<Id> {
    pub id: Id,
    pub checked: bool,
}

/// Applies a click on `id` and returns every flip it caused, clicked control first.
///
/// - `Normal`: nothing changes.
/// - `Toggle`: the control flips; siblings are untouched.
/// - `Radio`: an unchecked radio becomes checked and every checked radio
///   among its direct siblings is cleared. Clicking an already checked radio
///   does nothing.
pub fn handle_click<T: ControlTree>(tree: &mut T, id: T::Id) -> Vec<CheckedChanged<T::Id>> {
    let mut changes = Vec::new();

    match tree.role(id) {
        ControlRole::Normal => {}
        ControlRole::Toggle => {
            let next = !tree.is_checked(id);
            set(tree, id, next, &mut changes);
        }
        ControlRole::Radio => {
            if tree.is_checked(id) {
                log::trace!("radio {id:?} already checked");
                return changes;
            }
            set(tree, id, true, &mut changes);
            for sibling in radio_siblings(tree, id) {
                if tree.is_checked(sibling) {
                    set(tree, sibling, false, &mut changes);
                }
            }
        }
    }

    changes
}

/// Radios sharing `id`'s parent, excluding `id`. Empty when there is no parent.
pub fn radio_siblings<T: ControlTree>(tree: &T, id: T::Id) -> Vec<T::Id> {
    let Some(parent) = tree.parent(id) else {
        return Vec::new();
    };
    tree.children(parent)
        .into_iter()
        .filter(|&c| c != id && tree.role(c) == ControlRole::Radio)
        .collect()
}

fn set<T: ControlTree>(
    tree: &mut T,
    id: T::Id,
    checked: bool,
    out: &mut Vec<CheckedChanged<T::Id>>,
) {
    if tree.set_checked(id, checked) {
        log::debug!("control {id:?} checked = {checked}");
        out.push(CheckedChanged { id, checked });
    }
}
