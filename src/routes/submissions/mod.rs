mod errors;
mod handlers;

pub use errors::SubmitError;
pub use handlers::{submit_contact, submit_contact_fr, submit_demo, submit_demo_fr, submit_lead};
