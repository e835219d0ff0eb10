//! Navigation bar UI state (menus, dropdowns, search box)

use dioxus::prelude::*;

/// Which navbar dropdown is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenu {
    Features,
    Resources,
    Account,
}

/// Transient navbar state; reset on every route change
#[derive(Clone, Copy)]
pub struct NavState {
    /// Mobile disclosure panel expanded
    pub mobile_open: Signal<bool>,
    pub open_menu: Signal<Option<NavMenu>>,
    /// Feature item in the Features dropdown showing its "Coming Soon" note
    pub expanded_feature: Signal<Option<&'static str>>,
    pub search: Signal<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            mobile_open: Signal::new(false),
            open_menu: Signal::new(None),
            expanded_feature: Signal::new(None),
            search: Signal::new(String::new()),
        }
    }

    /// Open `menu`, or close it when it is already open
    pub fn toggle_menu(&mut self, menu: NavMenu) {
        let next = toggled(*self.open_menu.peek(), menu);
        self.open_menu.set(next);
        self.expanded_feature.set(None);
    }

    pub fn toggle_mobile(&mut self) {
        let open = !*self.mobile_open.peek();
        self.mobile_open.set(open);
    }

    pub fn expand_feature(&mut self, feature: &'static str) {
        let next = toggled(*self.expanded_feature.peek(), feature);
        self.expanded_feature.set(next);
    }

    /// Collapse every menu (the search text is kept)
    pub fn close_all(&mut self) {
        self.mobile_open.set(false);
        self.open_menu.set(None);
        self.expanded_feature.set(None);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggled<T: PartialEq>(current: Option<T>, value: T) -> Option<T> {
    if current.as_ref() == Some(&value) {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_switches_and_closes() {
        assert_eq!(toggled(None, NavMenu::Features), Some(NavMenu::Features));
        assert_eq!(
            toggled(Some(NavMenu::Features), NavMenu::Resources),
            Some(NavMenu::Resources)
        );
        assert_eq!(toggled(Some(NavMenu::Account), NavMenu::Account), None);
    }
}
