pub mod script_line;
pub mod character;
pub mod timestamp;
pub mod document;
pub mod voice;
pub mod conf;

pub use script_line::{ScriptLine, DIRECTION};
pub use character::Character;
pub use timestamp::Timestamp;
pub use document::{Document, StoredDocument};
pub use voice::{TextToSpeechParams, Voice, VOICES, DEFAULT_VOICE_ID};
pub use conf::Conf;
