use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use im_api::{create_app, AppState, Collaborators};
use im_core::repositories::{AccountRepository, FeedbackRepository, IdeaRepository};
use im_core::services::verification::Mailer;
use im_infra::assistant::GroqClient;
use im_infra::crypto::BcryptHasher;
use im_infra::database::{
    DatabasePool, InMemoryAccountRepository, InMemoryFeedbackRepository, InMemoryIdeaRepository,
    MySqlAccountRepository, MySqlFeedbackRepository, MySqlIdeaRepository,
};
use im_infra::mail::{LogMailer, SmtpMailer};
use im_shared::config::AppConfig;

type Stores = (
    Arc<dyn AccountRepository>,
    Arc<dyn IdeaRepository>,
    Arc<dyn FeedbackRepository>,
);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting Idea Mandir API Server ({})", config.environment);

    let (accounts, ideas, feedback) = build_stores(&config).await?;
    let mailer = build_mailer(&config)?;
    let assistant = Arc::new(GroqClient::new(config.assistant.clone()).context("Failed to build assistant client")?);
    if !config.assistant.is_configured() {
        warn!("GROQ_API_KEY not set; /ai answers in demo mode");
    }

    let collaborators = Collaborators {
        accounts,
        ideas,
        feedback,
        mailer,
        hasher: Arc::new(BcryptHasher::default()),
        assistant,
    };
    let app_state = web::Data::new(AppState::new(collaborators, &config.verification));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let server_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &server_config));
    // Zero keeps actix's default of one worker per core
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

async fn build_stores(config: &AppConfig) -> anyhow::Result<Stores> {
    match &config.database {
        Some(database) => {
            let pool = DatabasePool::new(database).await.context("Failed to connect to database")?;
            pool.ping().await.context("Database did not answer")?;
            pool.run_migrations().await.context("Failed to run migrations")?;
            info!("Using MySQL stores ({})", pool.get_statistics());

            let pool = pool.get_pool().clone();
            Ok((
                Arc::new(MySqlAccountRepository::new(pool.clone())),
                Arc::new(MySqlIdeaRepository::new(pool.clone())),
                Arc::new(MySqlFeedbackRepository::new(pool)),
            ))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory stores");
            Ok((
                Arc::new(InMemoryAccountRepository::new()),
                Arc::new(InMemoryIdeaRepository::new()),
                Arc::new(InMemoryFeedbackRepository::new()),
            ))
        }
    }
}

fn build_mailer(config: &AppConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    match &config.mail {
        Some(mail) => Ok(Arc::new(SmtpMailer::new(mail).context("Failed to configure SMTP")?)),
        None => {
            warn!("SMTP_HOST not set; verification codes are logged, not emailed");
            Ok(Arc::new(LogMailer::new()))
        }
    }
}
