//! Chat session state.
//!
//! The view layer is stateless; everything it renders comes from a
//! [`ChatStore`] owned by the hosting application. Keystrokes and submits
//! flow into the store, stream events from the answering backend mutate the
//! in-flight assistant message, and each render takes a fresh
//! [`ChatSnapshot`].
//!
//! # Example
//!
//! ```rust
//! use kora_chat::session::ChatStore;
//! use kora_chat::stream::StreamEvent;
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let store = ChatStore::new();
//!     store.set_current_message("hello").await;
//!     let reply_id = store.submit().await.unwrap();
//!     store.apply(reply_id, StreamEvent::Content { content: "Hi!".into() }).await.unwrap();
//!
//!     let snapshot = store.snapshot().await;
//!     assert_eq!(snapshot.messages.len(), 3);
//!     assert_eq!(snapshot.current_message, "");
//! });
//! ```

mod store;

pub use store::{ChatSnapshot, ChatStore, GREETING, REPLY_FAILED};
