//! Save flow: serialize once, optionally POST to a webhook, then write the file.
//!
//! ```text
//! to_json ──✗──> "Download Error" toast, nothing sent, nothing written
//!    │
//!    ├──> publisher? ──> "Webhook Sent" | "Webhook Failed"
//!    │
//!    └──> write_file ──> "Course Saved" | "Download Error"
//! ```
//!
//! A webhook failure never stops the local file from being written.

use std::path::Path;

use log::{info, warn};

use crate::core::export;
use crate::core::model::CourseData;
use crate::core::notify::Toast;
use crate::publish::Publisher;

/// Exports `course` to `dest` and, if given, to `publisher`.
/// Returns the toasts describing each outcome, in order.
pub async fn save_course(
    course: &CourseData,
    dest: &Path,
    publisher: Option<&dyn Publisher>,
) -> Vec<Toast> {
    let json = match export::to_json(course) {
        Ok(json) => json,
        Err(e) => {
            warn!("Export serialization failed: {}", e);
            return vec![Toast::destructive(
                "Download Error",
                format!("Could not prepare file for download: {e}"),
            )];
        }
    };

    let mut toasts = Vec::new();

    if let Some(publisher) = publisher {
        match publisher.publish(&json).await {
            Ok(()) => {
                info!("Course {} sent via {}", course.course_id, publisher.name());
                toasts.push(Toast::info(
                    "Webhook Sent",
                    "Your course content has been sent to the webhook.",
                ));
            }
            Err(e) => {
                warn!("Publishing via {} failed: {}", publisher.name(), e);
                toasts.push(Toast::destructive(
                    "Webhook Failed",
                    format!("Could not send course data: {e}"),
                ));
            }
        }
    }

    match export::write_file(dest, &json) {
        Ok(()) => toasts.push(Toast::info(
            "Course Saved",
            format!("Your course content has been saved to {}.", dest.display()),
        )),
        Err(e) => {
            warn!("Export write failed: {}", e);
            toasts.push(Toast::destructive(
                "Download Error",
                format!("Could not write {}: {e}", dest.display()),
            ));
        }
    }

    toasts
}
