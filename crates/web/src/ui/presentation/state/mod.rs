//! Signal-backed UI state, provided through Dioxus context by `AppRoot`

pub mod chat_state;
pub mod nav_state;
pub mod notice_state;
pub mod session_state;
pub mod theme_state;

pub use chat_state::ChatState;
pub use nav_state::{NavMenu, NavState};
pub use notice_state::{Notice, NoticeState};
pub use session_state::SessionState;
pub use theme_state::{Theme, ThemeState};
