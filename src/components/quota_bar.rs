//! Monthly video quota usage bar.

use leptos::prelude::*;

use crate::util::format::quota_percent;

/// Progress bar for `videos_generated_this_month / max_videos_per_month`.
/// Width is capped at 100% even when the server reports overuse.
#[component]
pub fn QuotaBar(used: i32, max: i32) -> impl IntoView {
    let percent = quota_percent(used, max);
    view! {
        <div class="quota">
            <div class="quota__caption">
                <span>"Videos this month"</span>
                <span class="quota__numbers">{format!("{used} / {max}")}</span>
            </div>
            <div class="quota__track">
                <div class="quota__fill" style=format!("width: {percent}%")></div>
            </div>
        </div>
    }
}
