pub use error::ClientError;
pub use models::{
    CardModel, Credentials, Identity, PrivateKeyModel, SignModel, ValidatedIdentity,
};
pub use rest_client::CardsClient;
pub use result::{ClientResult, ClientResultHelper};

mod error;
mod models;
mod rest_client;
mod result;
