use leptos::*;

/// Folder-with-plus outline used when the caller supplies no icon.
#[component]
pub fn DefaultEmptyIcon() -> impl IntoView {
    view! {
        <svg class="h-full w-full" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path vector-effect="non-scaling-stroke" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 13h6m-3-3v6m-9 1V7a2 2 0 012-2h6l2 2h6a2 2 0 012 2v8a2 2 0 01-2 2H5a2 2 0 01-2-2z" />
        </svg>
    }
}
