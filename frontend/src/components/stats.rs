use leptos::prelude::*;

use crate::state::AppState;

/// Course count and titles. Shows its own fallback when the fetch fails.
#[component]
pub fn CoursePanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let stats = state.stats;

    view! {
        <details class="stats-collapsible" open=true>
            <summary class="stats-header">"Courses"</summary>
            <div class="course-stats">
                <div class="stat-item">
                    <span class="stat-label">"Number of courses:"</span>
                    <span class="stat-value" id="totalCourses">
                        {move || stats.with(|s| s.view().total)}
                    </span>
                </div>
                <div class="course-titles" id="courseTitles">
                    {move || {
                        let panel = stats.with(|s| s.view());
                        match panel.notice {
                            Some(notice) => view! {
                                <span class=notice.css_class()>{notice.text()}</span>
                            }.into_any(),
                            None => panel
                                .titles
                                .into_iter()
                                .map(|title| view! { <div class="course-title-item">{title}</div> })
                                .collect_view()
                                .into_any(),
                        }
                    }}
                </div>
            </div>
        </details>
    }
}
