pub mod confirmation_modal;
pub mod modal;
pub mod navigation;
