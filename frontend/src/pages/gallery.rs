use leptos::*;

use crate::components::empty_state::EmptyState;
use crate::model::{EmptyStateAction, Variant};

/// Demo page showing both variants side by side.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let (added, set_added) = create_signal(0u32);
    let on_add = Callback::new(move |_| set_added.update(|n| *n += 1));
    let inbox_icon = view! { <i class="fas fa-inbox text-5xl"></i> }.into_view();

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-3xl mx-auto py-12 px-4 space-y-8">
                <h1 class="text-2xl font-bold text-fg">"Empty states"</h1>
                <EmptyState
                    title="No results"
                    description="Try a different search."
                    variant=Variant::Default
                />
                <EmptyState
                    title="Empty"
                    action=EmptyStateAction::new("Add item", on_add)
                    variant=Variant::Compact
                />
                <EmptyState
                    title="Inbox zero"
                    description="New messages will show up here."
                    icon=inbox_icon
                    class="bg-surface-elevated"
                />
                <p class="text-sm text-fg-muted">
                    {move || format!("Items added: {}", added.get())}
                </p>
            </div>
        </div>
    }
}
