//! Styled building blocks shared by every view.
//!
//! Toasts and the label wrap `dioxus_primitives`; buttons, inputs, cards and
//! alerts are plain styled elements.

mod alert;
mod button;
mod card;
mod input;
mod toast;

pub use alert::Alert;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::{FieldError, Input, Label};
pub use toast::{toast_options, use_toast, ToastOptions, ToastProvider, Toasts, TOAST_DURATION};
