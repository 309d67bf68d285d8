pub mod badge;
pub mod button;
pub mod card;
pub mod input;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use input::Input;
