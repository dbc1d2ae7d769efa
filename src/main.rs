use clap::Parser;
use coursesmith::core::action::{Action, Effect, update};
use coursesmith::core::config::{self, CliOverrides, ResolvedConfig};
use coursesmith::core::notify::{LogNotifier, Notifier, Toast};
use coursesmith::core::seed::{CourseSchema, SeedSource};
use coursesmith::core::state::Store;
use coursesmith::core::templates::TEMPLATES;
use coursesmith::publish::{ExportQueue, Publisher, WebhookPublisher};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "coursesmith", about = "Assemble a course outline and export it as JSON")]
struct Args {
    /// Start an empty course with this id instead of importing a schema
    #[arg(short, long)]
    course_id: Option<String>,

    /// Course schema document to import
    #[arg(short, long, conflicts_with = "course_id")]
    schema: Option<PathBuf>,

    /// JSON array of edit actions to apply before exporting
    #[arg(short, long)]
    actions: Option<PathBuf>,

    /// Where to write the exported course
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Webhook URL that also receives the export
    #[arg(short, long)]
    webhook: Option<String>,

    /// Print the module templates and exit
    #[arg(long)]
    list_templates: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.list_templates {
        for template in TEMPLATES {
            println!("{template}");
        }
        return Ok(());
    }

    let (file_config, config_source) =
        config::load_config().map_err(|e| io::Error::other(e.to_string()))?;
    let cli = CliOverrides {
        output: args.output.clone(),
        webhook: args.webhook.clone(),
        schema: args.schema.clone(),
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("coursesmith starting up");
    config_source.log();
    log::debug!("Resolved config: {:?}", resolved);

    let seed = match (args.course_id, &resolved.schema_file) {
        (Some(course_id), _) => SeedSource::Fresh { course_id },
        (None, Some(path)) => {
            let schema = CourseSchema::load(path).map_err(|e| io::Error::other(e.to_string()))?;
            SeedSource::Schema(schema)
        }
        (None, None) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "either --course-id or a schema document (--schema or general.schema_file) is required",
            ));
        }
    };

    let mut store = Store::new(seed);
    let notifier = LogNotifier;
    let mut exports = ExportQueue::new(
        resolved.export_path.clone(),
        build_publisher(&resolved, &notifier),
    );

    let mut actions = match &args.actions {
        Some(path) => load_actions(path)?,
        None => Vec::new(),
    };
    if actions.last() != Some(&Action::SaveCourse) {
        actions.push(Action::SaveCourse);
    }

    for action in actions {
        match update(&mut store, action) {
            Effect::None => {}
            Effect::Notify(toast) => notifier.notify(&toast),
            Effect::Export => exports.submit(store.snapshot()),
        }
        for toast in exports.drain_finished() {
            notifier.notify(&toast);
        }
    }

    if exports.pending() > 0 {
        log::info!("Waiting for {} export(s) to finish", exports.pending());
    }
    for toast in exports.finish().await {
        notifier.notify(&toast);
    }

    log::info!("coursesmith done at revision {}", store.revision());
    Ok(())
}

fn load_actions(path: &Path) -> io::Result<Vec<Action>> {
    let json = fs::read_to_string(path)?;
    let actions: Vec<Action> = serde_json::from_str(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    log::info!("Loaded {} actions from {}", actions.len(), path.display());
    Ok(actions)
}

/// The configured webhook, if any. A bad URL is reported once and the
/// exports continue without it.
fn build_publisher(
    config: &ResolvedConfig,
    notifier: &dyn Notifier,
) -> Option<Arc<dyn Publisher>> {
    let url = config.webhook_url.as_ref()?;
    match WebhookPublisher::new(url.clone(), config.webhook_timeout) {
        Ok(publisher) => {
            log::info!("Webhook enabled: {}", publisher.url());
            let publisher: Arc<dyn Publisher> = Arc::new(publisher);
            Some(publisher)
        }
        Err(e) => {
            log::warn!("Webhook disabled: {}", e);
            notifier.notify(&Toast::destructive("Webhook Failed", e.to_string()));
            None
        }
    }
}
