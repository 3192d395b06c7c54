pub mod option_name;
pub mod token;

pub use option_name::{negated_name_of, OptionName};
pub use token::OptionToken;
