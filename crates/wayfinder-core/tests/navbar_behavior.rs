//! End-to-end behavior of the navbar logic without a browser

use wayfinder_core::{
    locale_segment, CoreError, LocaleSync, LocalizedLocation, Locale, MemoryStore, MenuEvent,
    MenuState, PreferenceStore, SessionStore, PREFERRED_LANGUAGE_KEY,
};

/// Browser storage that is present but rejects writes
struct RefusingStore;

impl PreferenceStore for RefusingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage {
            key: key.to_string(),
            message: "SecurityError: access denied".to_string(),
        })
    }
}

/// Minimal stand-in for the router: records every history replacement
struct FakeHistory {
    location: LocalizedLocation,
    replacements: Vec<String>,
}

impl FakeHistory {
    fn at(path: &str) -> Self {
        Self {
            location: LocalizedLocation::new(path, "", ""),
            replacements: Vec::new(),
        }
    }

    fn replace(&mut self, href: &str) {
        self.replacements.push(href.to_string());
        self.location = LocalizedLocation::new(href, "", "");
    }

    /// Mirrors the component effect: reconcile until the path stops changing
    fn settle<S: PreferenceStore>(&mut self, sync: &LocaleSync<S>) {
        while let Some(target) = sync.reconcile(&self.location).redirect {
            self.replace(&target);
        }
    }
}

#[test]
fn test_mount_without_preference_redirects_ja_members_to_en() {
    let store = MemoryStore::new();
    let sync = LocaleSync::new(&store);
    let mut history = FakeHistory::at("/ja/members");

    history.settle(&sync);

    assert_eq!(history.replacements, vec!["/en/members".to_string()]);
    assert_eq!(sync.preferred(), Locale::En);
}

#[test]
fn test_mount_with_differing_preference_redirects_exactly_once() {
    let store = MemoryStore::with_locale(Locale::Ja);
    let sync = LocaleSync::new(&store);
    let mut history = FakeHistory::at("/en/course");

    history.settle(&sync);
    history.settle(&sync);

    assert_eq!(history.replacements, vec!["/ja/course".to_string()]);
}

#[test]
fn test_selecting_each_locale_persists_and_navigates() {
    for locale in Locale::ALL {
        let store = MemoryStore::new();
        let sync = LocaleSync::new(&store);
        let mut history = FakeHistory::at("/en/members");

        let (target, saved) = sync.select(&history.location, locale);
        saved.unwrap();
        history.replace(&target);
        history.settle(&sync);

        assert_eq!(
            store.get(PREFERRED_LANGUAGE_KEY).as_deref(),
            Some(locale.code())
        );
        assert_eq!(locale_segment(&history.location.pathname), locale.code());
        assert_eq!(history.replacements.len(), 1);
    }
}

#[test]
fn test_selection_sticks_when_storage_refuses_writes() {
    let sync = LocaleSync::new(SessionStore::new(RefusingStore));
    let mut history = FakeHistory::at("/en/members");
    history.settle(&sync);
    assert!(history.replacements.is_empty());

    let (target, saved) = sync.select(&history.location, Locale::Ja);
    assert!(matches!(saved, Err(CoreError::Storage { .. })));
    history.replace(&target);
    history.settle(&sync);

    assert_eq!(history.replacements, vec!["/ja/members".to_string()]);
    assert_eq!(sync.preferred(), Locale::Ja);
    assert_eq!(sync.reconcile(&history.location).redirect, None);
}

/// Mirrors the component: one document listener exists exactly while the state asks for it
struct FakeDocument {
    state: MenuState,
    attached: bool,
    attach_count: usize,
}

impl FakeDocument {
    fn mount() -> Self {
        let mut document = Self {
            state: MenuState::default(),
            attached: false,
            attach_count: 0,
        };
        document.sync_listener();
        document
    }

    fn sync_listener(&mut self) {
        let wanted = self.state.listens_for_outside_click();
        if wanted && !self.attached {
            self.attach_count += 1;
        }
        self.attached = wanted;
    }

    fn dispatch(&mut self, event: MenuEvent) {
        self.state = self.state.on_event(event);
        self.sync_listener();
    }

    fn click(&mut self, in_menu: bool, on_toggle: bool) {
        if on_toggle {
            self.dispatch(MenuEvent::Toggle);
        }
        if !self.attached {
            return;
        }
        if let Some(event) = self.state.document_click(in_menu, on_toggle) {
            self.dispatch(event);
        }
    }
}

#[test]
fn test_outside_click_listener_lifecycle() {
    let mut document = FakeDocument::mount();
    assert!(!document.attached);

    // Opening click on the hamburger attaches the listener and is not a dismissal
    document.click(false, true);
    assert_eq!(document.state, MenuState::Closed);
    assert!(document.attached);

    // Clicking a link keeps the dropdown and the listener
    document.click(true, false);
    assert_eq!(document.state, MenuState::Closed);
    assert!(document.attached);

    // Clicking elsewhere dismisses and detaches
    document.click(false, false);
    assert_eq!(document.state, MenuState::Open);
    assert!(!document.attached);

    // Reopen, then the hamburger closes it again
    document.click(false, true);
    document.click(false, true);
    assert_eq!(document.state, MenuState::Open);
    assert!(!document.attached);

    // Widening the viewport while the dropdown shows also detaches
    document.click(false, true);
    document.dispatch(MenuEvent::Resize { width: 1280.0 });
    assert!(!document.attached);
    assert_eq!(document.attach_count, 3);
}

#[test]
fn test_menu_session() {
    let mut state = MenuState::default();
    // Mount on a phone
    state = state.on_event(MenuEvent::Resize { width: 390.0 });
    assert_eq!(state, MenuState::Open);

    // Open the dropdown, click a link inside it
    state = state.on_event(MenuEvent::Toggle);
    assert!(state.listens_for_outside_click());
    state = state.on_event(MenuEvent::Click { inside_menu: true });
    assert_eq!(state, MenuState::Closed);

    // Tap elsewhere on the page
    state = state.on_event(MenuEvent::Click { inside_menu: false });
    assert_eq!(state, MenuState::Open);
    assert!(!state.listens_for_outside_click());

    // Open again, then rotate to landscape tablet width
    state = state
        .on_event(MenuEvent::Toggle)
        .on_event(MenuEvent::Resize { width: 1024.0 });
    assert_eq!(state, MenuState::Open);
}
