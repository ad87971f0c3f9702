use crate::components::common::ButtonSize;
use crate::model::Variant;

pub const ROOT_BASE: &str = "flex flex-col items-center justify-center text-center rounded-lg border-2 border-dashed border-border-strong bg-surface-muted";

/// Per-variant spacing and sizing classes. Colors stay identical across
/// variants; only padding, margins, type scale and widths change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyles {
    pub root: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_size: ButtonSize,
}

impl VariantStyles {
    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Default => Self {
                root: "py-12 px-4",
                icon: "mx-auto mb-4 h-12 w-12 text-fg-muted",
                title: "mb-2 text-lg font-semibold text-fg",
                description: "mb-6 max-w-md text-sm text-fg-muted",
                button_size: ButtonSize::Medium,
            },
            Variant::Compact => Self {
                root: "py-6 px-3",
                icon: "mx-auto mb-2 h-8 w-8 text-fg-muted",
                title: "mb-1 text-sm font-semibold text-fg",
                description: "mb-4 max-w-xs text-xs text-fg-muted",
                button_size: ButtonSize::Small,
            },
        }
    }
}

/// Joins class fragments with single spaces, skipping blank fragments.
/// Non-blank fragments are kept exactly as given.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
