use std::rc::Rc;

use yew::functional::Reducible;

use super::menu::MenuState;
use super::revealed::RevealedSet;
use super::scroll::ScrollOffset;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    #[default]
    Mounted,
    Active,
    Unmounted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Activate,
    Reveal(String),
    RevealAll,
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
    Teardown,
}

/// Everything one page view mutates. Each action touches a single field, so
/// events may arrive in any order. The revealed set is shared with the
/// reveal components and only reallocated when it grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub phase: ViewPhase,
    pub revealed: Rc<RevealedSet>,
    pub scroll: ScrollOffset,
    pub menu: MenuState,
}

impl PageState {
    /// Applies `action` in place. Returns `false` if the state is unchanged.
    pub fn apply(&mut self, action: PageAction) -> bool {
        if self.phase == ViewPhase::Unmounted {
            return false;
        }
        match action {
            PageAction::Activate => {
                let changed = self.phase != ViewPhase::Active;
                self.phase = ViewPhase::Active;
                changed
            }
            PageAction::Reveal(id) => {
                !self.revealed.is_revealed(&id) && Rc::make_mut(&mut self.revealed).reveal(&id)
            }
            PageAction::RevealAll => {
                !self.revealed.is_fail_open() && Rc::make_mut(&mut self.revealed).reveal_all()
            }
            PageAction::Scrolled(y) => self.scroll.record(y),
            PageAction::ToggleMenu => {
                self.menu.toggle();
                true
            }
            PageAction::CloseMenu => self.menu.close(),
            PageAction::Teardown => {
                self.phase = ViewPhase::Unmounted;
                true
            }
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
