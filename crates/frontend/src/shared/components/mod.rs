pub mod action_button;
pub mod form_field;
pub mod stat_card;

pub use action_button::ActionButton;
pub use form_field::{SelectField, TextField};
pub use stat_card::StatCard;
