mod locale;
mod notification;
mod submission;
mod submitter_email;

pub use locale::Locale;
pub use notification::{NotificationMessage, render_notification};
pub use submission::{FieldName, FormKind, RawSubmission, Submission};
pub use submitter_email::SubmitterEmail;
