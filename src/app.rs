//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    analytics::AnalyticsPage, auth::AuthPage, connections::ConnectionsPage,
    dashboard::DashboardPage, series::SeriesPage, settings::SettingsPage, videos::VideosPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores any persisted session
/// once on startup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::{self, HttpBackend};
        session.set(session::initialize(&HttpBackend).await);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/autoshorts-client.css"/>
        <Title text="AutoShorts"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("series") view=SeriesPage/>
                <Route path=StaticSegment("videos") view=VideosPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route
                    path=(StaticSegment("settings"), StaticSegment("connections"))
                    view=ConnectionsPage
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// The bare root path immediately forwards to the dashboard.
#[component]
fn HomeRedirect() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;
        let navigate = use_navigate();
        Effect::new(move || {
            navigate("/dashboard", NavigateOptions::default());
        });
    }

    view! { <p class="panel__empty">"Loading..."</p> }
}
