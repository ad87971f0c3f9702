use leptos::*;

use crate::components::icons::DefaultEmptyIcon;
use crate::config::use_runtime_config;
use crate::model::{EmptyStateAction, EmptyStateConfig, Variant};

pub mod styles;
pub mod view_model;

pub use view_model::{render, IconContent, NodeKind, VisualNode};

/// Placeholder for a list, search or data view with nothing to show.
///
/// Without an explicit `variant` the `RuntimeConfig` default from context
/// applies, falling back to [`Variant::Default`].
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<View>,
    #[prop(optional)] action: Option<EmptyStateAction>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let variant = variant.unwrap_or_else(|| use_runtime_config().default_variant);
    render(EmptyStateConfig {
        title,
        description,
        icon,
        action,
        variant,
        class,
    })
}

impl IntoView for VisualNode {
    fn into_view(self) -> View {
        match self {
            VisualNode::Container {
                class,
                variant,
                children,
            } => view! {
                <div class=class data-variant=variant.as_str()>
                    {children.into_iter().map(IntoView::into_view).collect_view()}
                </div>
            }
            .into_view(),
            VisualNode::IconSlot { class, icon } => view! {
                <div class=class aria-hidden="true">
                    {match icon {
                        IconContent::Default => view! { <DefaultEmptyIcon /> }.into_view(),
                        IconContent::Custom(view) => view,
                    }}
                </div>
            }
            .into_view(),
            VisualNode::Heading { class, text } => view! { <h3 class=class>{text}</h3> }.into_view(),
            VisualNode::Paragraph { class, text } => view! { <p class=class>{text}</p> }.into_view(),
            VisualNode::ActionButton {
                class,
                label,
                on_activate,
            } => {
                let logged_label = label.clone();
                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| {
                            log::debug!("empty state action activated: {}", logged_label);
                            on_activate.call(());
                        }
                    >
                        {label}
                    </button>
                }
                .into_view()
            }
        }
    }
}
