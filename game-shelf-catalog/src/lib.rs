pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::IgdbClient;
pub use credentials::{
    CredentialSource, CredentialSources, Credentials, config_path, credential_sources,
    save_to_file,
};
pub use error::CatalogError;
