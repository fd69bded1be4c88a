mod health_check;
mod helpers;
mod posts;
mod submissions;

pub use health_check::health_check;
pub use posts::{get_post, list_posts};
pub use submissions::{
    submit_contact, submit_contact_fr, submit_demo, submit_demo_fr, submit_lead,
};
