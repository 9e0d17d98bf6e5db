//! Pipeline status badge.

use leptos::prelude::*;

use crate::net::types::VideoStatus;

/// Colored label for a backend-owned video status. Processing stages pulse.
#[component]
pub fn StatusBadge(status: VideoStatus) -> impl IntoView {
    let class = if status.is_processing() {
        format!("status-badge {} status-badge--working", status.css_class())
    } else {
        format!("status-badge {}", status.css_class())
    };
    view! { <span class=class>{status.label()}</span> }
}
