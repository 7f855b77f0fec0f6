pub mod selection;
pub use selection::{Selection, SelectionStore};
pub mod token_store;
pub use token_store::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
