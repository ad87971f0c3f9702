use leptos::{Callable, Callback, View};

use super::styles::{join_classes, VariantStyles, ROOT_BASE};
use crate::components::common::{button_classes, ButtonVariant};
use crate::model::{EmptyStateConfig, Variant};

#[derive(Clone)]
pub enum IconContent {
    Default,
    Custom(View),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    IconSlot,
    Heading,
    Paragraph,
    ActionButton,
}

/// Rendered empty state, independent of the DOM. Converted into a Leptos
/// view by the component; inspected directly by tests and hosts.
#[derive(Clone)]
pub enum VisualNode {
    Container {
        class: String,
        variant: Variant,
        children: Vec<VisualNode>,
    },
    IconSlot {
        class: &'static str,
        icon: IconContent,
    },
    Heading {
        class: &'static str,
        text: String,
    },
    Paragraph {
        class: &'static str,
        text: String,
    },
    ActionButton {
        class: String,
        label: String,
        on_activate: Callback<()>,
    },
}

pub fn render(config: EmptyStateConfig) -> VisualNode {
    let EmptyStateConfig {
        title,
        description,
        icon,
        action,
        variant,
        class,
    } = config;
    let styles = VariantStyles::for_variant(variant);

    let mut children = Vec::with_capacity(4);
    children.push(VisualNode::IconSlot {
        class: styles.icon,
        icon: match icon {
            Some(view) => IconContent::Custom(view),
            None => IconContent::Default,
        },
    });
    children.push(VisualNode::Heading {
        class: styles.title,
        text: title,
    });
    if let Some(text) = description.filter(|text| !text.is_empty()) {
        children.push(VisualNode::Paragraph {
            class: styles.description,
            text,
        });
    }
    if let Some(action) = action {
        children.push(VisualNode::ActionButton {
            class: button_classes(ButtonVariant::Primary, styles.button_size),
            label: action.label,
            on_activate: action.on_activate,
        });
    }

    VisualNode::Container {
        class: join_classes([ROOT_BASE, styles.root, class.as_deref().unwrap_or_default()]),
        variant,
        children,
    }
}

impl VisualNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            VisualNode::Container { .. } => NodeKind::Container,
            VisualNode::IconSlot { .. } => NodeKind::IconSlot,
            VisualNode::Heading { .. } => NodeKind::Heading,
            VisualNode::Paragraph { .. } => NodeKind::Paragraph,
            VisualNode::ActionButton { .. } => NodeKind::ActionButton,
        }
    }

    pub fn class(&self) -> &str {
        match self {
            VisualNode::Container { class, .. } | VisualNode::ActionButton { class, .. } => {
                class.as_str()
            }
            VisualNode::IconSlot { class, .. }
            | VisualNode::Heading { class, .. }
            | VisualNode::Paragraph { class, .. } => class,
        }
    }

    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Heading and paragraph text, or the action label.
    pub fn text(&self) -> Option<&str> {
        match self {
            VisualNode::Heading { text, .. } | VisualNode::Paragraph { text, .. } => {
                Some(text.as_str())
            }
            VisualNode::ActionButton { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Depth-first search for the first node of `kind`, including `self`.
    pub fn find(&self, kind: NodeKind) -> Option<&VisualNode> {
        if self.kind() == kind {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(kind))
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        let own = usize::from(self.kind() == kind);
        own + self
            .children()
            .iter()
            .map(|child| child.count(kind))
            .sum::<usize>()
    }

    pub fn uses_default_icon(&self) -> bool {
        matches!(
            self.find(NodeKind::IconSlot),
            Some(VisualNode::IconSlot {
                icon: IconContent::Default,
                ..
            })
        )
    }

    /// Fires the action callback once. Returns false for any node that is
    /// not an action control.
    pub fn activate(&self) -> bool {
        match self {
            VisualNode::ActionButton { on_activate, .. } => {
                on_activate.call(());
                true
            }
            _ => false,
        }
    }
}
