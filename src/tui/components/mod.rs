// Components module - reusable UI building blocks
//
// - Title bar: app name, people count, open cards
// - Card list: the person cards (focusable)
// - Status bar: key hints and the latest log line
// - Toast: transient overlay

pub mod card_list;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use card_list::CardListPanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use toast::Toast;
