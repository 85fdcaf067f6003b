pub mod errors;
pub mod import;
pub mod models;
pub mod settings;

pub use errors::FlashifyError;
pub use models::{ Deck, JapaneseWord, Word };
pub use settings::{ AppSettings, AutoPlayLanguage, ThemeMode };
