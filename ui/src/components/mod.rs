//! Reusable visual components (design system).

mod button;
pub use button::{Button, ButtonSize, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod card;
pub use card::{Card, CardContent, CardHeader, CardTitle};

mod modal;
pub use modal::{Modal, ModalOverlay};

mod toast;
pub use toast::{use_toast, ToastKind, ToastProvider, Toasts};

mod skeleton;
pub use skeleton::SkeletonCard;

mod empty_state;
pub use empty_state::EmptyState;

mod typography;
pub use typography::{Heading, Text};

mod theme_toggle;
pub use theme_toggle::ThemeToggle;
