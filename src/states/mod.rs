//! The application modes of the game.
//!
//! Intended flow: `loading` → `menu` → `game` | `editor`, `game` →
//! `game-over` → `menu`, `editor` → `menu`. Transitions are requested through
//! [`AppContext::request_state`](crate::context::AppContext::request_state).

pub mod editor;
pub mod game;
pub mod gameover;
pub mod loading;
pub mod menu;

pub use editor::EditorState;
pub use game::GameState;
pub use gameover::GameOverState;
pub use loading::LoadingState;
pub use menu::MenuState;

pub const LOADING: &str = "loading";
pub const MENU: &str = "menu";
pub const GAME: &str = "game";
pub const GAME_OVER: &str = "game-over";
pub const EDITOR: &str = "editor";
