use drone_discord_notify::Settings;
use drone_discord_notify::logging::setup_logging;
use drone_discord_notify::message::build_message;
use drone_discord_notify::notify::DiscordNotifier;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    setup_logging();

    let settings = Settings::from_env();
    let message = build_message(&settings);
    info!(
        "Notifying build #{} of {} ({:?})",
        settings.build.number, settings.build.repo, settings.build.status
    );

    let notifier = DiscordNotifier::new(settings.plugin.webhook);
    if let Err(e) = notifier.send(message).await {
        error!("{}", e.chain());
        std::process::exit(1);
    }
}
