//! Main Leptos App component with the localized SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::i18n::I18nProvider;
use crate::pages::{Course, Home, Members, NotFound};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <I18nProvider>
            <Router>
                <div class="app">
                    <Navbar />
                    <main class="content">
                        <Routes fallback=NotFound>
                            <Route path=path!("/:lang") view=Home />
                            <Route path=path!("/:lang/members") view=Members />
                            <Route path=path!("/:lang/course") view=Course />
                        </Routes>
                    </main>
                </div>
            </Router>
        </I18nProvider>
    }
}
