#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-xs",
            ButtonSize::Medium => "px-4 py-2 text-sm",
        }
    }
}

const BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-md font-semibold transition-colors duration-200";

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("{} {} {}", BUTTON_BASE, size.classes(), variant.classes())
}
