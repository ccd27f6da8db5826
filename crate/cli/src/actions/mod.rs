pub(crate) mod shared;

pub mod card;
pub mod private_key;
pub mod public_key;
