//! Navigation sidebar with brand, routes, and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `DashboardLayout` on every authenticated screen. Reads the
//! session context for the identity block and performs the local-only
//! logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{self, HttpBackend, SessionState};

/// Ordered navigation entries.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/series", "Series"),
    ("/videos", "Videos"),
    ("/analytics", "Analytics"),
    ("/settings", "Settings"),
    ("/settings/connections", "Platforms"),
];

/// Whether a nav entry matches the current path. `/settings` must not light
/// up for `/settings/connections`, so only the longest match wins.
fn active_nav_href(pathname: &str) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .map(|(href, _)| *href)
        .filter(|href| pathname == *href || pathname.starts_with(&format!("{href}/")))
        .max_by_key(|href| href.len())
}

/// Single-character avatar fallback from the user's name or email.
fn identity_initial(user: Option<&crate::net::types::User>) -> String {
    user.and_then(|u| {
        u.full_name
            .chars()
            .next()
            .or_else(|| u.email.chars().next())
    })
    .map(|c| c.to_uppercase().to_string())
    .unwrap_or_else(|| "U".to_owned())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let on_logout = move |_| {
        let next = session::logout(&HttpBackend);
        session.set(next);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth");
            }
        }
    };

    let display_name = move || {
        session
            .get()
            .user
            .map_or_else(|| "User".to_owned(), |u| u.full_name)
    };
    let display_email = move || session.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/dashboard">
                <span class="sidebar__logo">"A"</span>
                <span class="sidebar__brand-text">
                    <span class="sidebar__title">"AutoShorts"</span>
                    <span class="sidebar__tagline">"Generate. Publish. Scale."</span>
                </span>
            </a>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let is_active = move || {
                            active_nav_href(&location.pathname.get()) == Some(href)
                        };
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=is_active
                                href=href
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__user">
                <span class="sidebar__avatar">
                    {move || identity_initial(session.get().user.as_ref())}
                </span>
                <span class="sidebar__identity">
                    <span class="sidebar__name">{display_name}</span>
                    <span class="sidebar__email">{display_email}</span>
                </span>
                <button class="sidebar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
