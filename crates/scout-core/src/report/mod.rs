mod document;
mod extract;
mod level;
pub mod prompts;
mod requester;

pub use document::{generated_note, Report};
pub use extract::{split_reply, EmojiRule, SplitReply};
pub use level::{CompanyName, DetailLevel};
pub use prompts::{build_report_prompt, Section};
pub use requester::{ReportError, ReportRequester};
