//! Credential resolution: the `connect.sid` token and where it comes from

mod connect_sid;
mod home;
mod resolver;

pub use connect_sid::ConnectSid;
pub use home::{FixedHome, HomeDir, SystemHome};
pub use resolver::{
    CredentialError, CredentialResolver, CredentialSource, DEFAULT_CONNECT_SID_PATH,
    ResolvedCredential, resolve_credential,
};
