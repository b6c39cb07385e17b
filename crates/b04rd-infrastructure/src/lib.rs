//! Infrastructure adapters for the b04rd client.
//!
//! Concrete implementations of the collaborator traits defined in
//! `b04rd-core`: the reqwest-backed backend client, the external character
//! API client, the file-backed session id store, and the in-memory cookie
//! jar.

pub mod character_api;
pub mod config;
pub mod cookie;
pub mod http_api;
pub mod session_id_file;

pub use character_api::HttpCharacterApi;
pub use config::ApiConfig;
pub use cookie::MemoryCookieJar;
pub use http_api::HttpBoardApi;
pub use session_id_file::FileSessionIdStore;
