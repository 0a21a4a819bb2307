pub mod button;
pub mod card;
pub mod variants;

pub use button::{Button, ButtonAnimation, ButtonSize, ButtonVariant};
pub use card::{CardAnimation, CardText, CardVariant, HoverEffect, InteractiveCard};
