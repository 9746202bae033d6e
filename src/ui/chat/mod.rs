//! Chat-specific UI components.
//!
//! Three leaf components make up the chat screen: [`Header`], [`MessageArea`]
//! and [`InputBar`]. [`MessageArea`] composes [`SearchStages`] and
//! [`PremiumTypingAnimation`] per message.

mod header;
mod input_bar;
mod message_area;
mod search_stages;
mod typing;

pub use header::{BRAND, Header};
pub use input_bar::{INPUT_PLACEHOLDER, InputBar, InputBarDriver, SubmitEvent};
pub use message_area::{BubbleBody, MESSAGE_AREA_ID, MessageArea, WAITING_PLACEHOLDER};
pub use search_stages::{
    ERROR_FALLBACK, ReadingBlock, SearchStages, SearchStagesPlan, SearchingBlock,
};
pub use typing::PremiumTypingAnimation;
