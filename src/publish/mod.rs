pub mod publisher;
pub mod queue;
pub mod save;
pub mod webhook;

pub use publisher::{PublishError, Publisher};
pub use queue::ExportQueue;
pub use save::save_course;
pub use webhook::WebhookPublisher;
