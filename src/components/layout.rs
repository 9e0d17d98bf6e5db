//! Authenticated page chrome: sidebar plus main content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route wraps its content in `DashboardLayout`, which
//! applies the shared unauthenticated-redirect guard and gates rendering on
//! session init so queries never fire for a signed-out visitor.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;

#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    view! {
        <Show
            when=move || {
                let state = session.get();
                !state.is_loading && state.is_authenticated
            }
            fallback=move || {
                view! {
                    <div class="app-shell app-shell--pending">
                        <p>
                            {move || {
                                if session.get().is_loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to sign-in..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__main">{children()}</main>
            </div>
        </Show>
    }
}
