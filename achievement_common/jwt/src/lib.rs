pub mod jwt_error;
pub mod principal;
pub mod token_codec;

pub use jwt_error::TokenError;
pub use principal::{Principal, Role};
pub use token_codec::{TokenCodec, TokenPair};
