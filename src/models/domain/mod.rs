pub mod caption;
pub mod quiz;
pub mod quiz_question;
pub use caption::{CaptionSegment, Transcript};
pub use quiz::Quiz;
pub use quiz_question::Question;
