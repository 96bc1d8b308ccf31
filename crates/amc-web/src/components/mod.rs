mod copy_button;
mod modal;
mod share_icon;
pub mod share_widget;

pub use copy_button::CopyButton;
pub use modal::Modal;
pub use share_icon::ShareIcon;
pub use share_widget::{ShareDialog, ShareDialogBody, ShareWidget};
