pub mod advisory;
pub mod birth;
pub mod config;
pub mod error;
pub mod reading;
pub mod secret;
pub mod session;
pub mod zodiac;

// Re-export common error type
pub use error::StargazerError;

pub use advisory::{GenerationConfig, GenerationError, TextGenerator};
pub use birth::{BirthDetails, BirthForm};
pub use reading::Reading;
pub use session::{DiaryEntry, FormState, SessionStore};
pub use zodiac::ZodiacSign;
