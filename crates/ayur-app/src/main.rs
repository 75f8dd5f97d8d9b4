use std::env;

use eyre::{Result, WrapErr};

use ayur_app::app::App;
use ayur_auth::store::CredentialStore;
use ayur_core::models::answer::AnswerSet;
use ayur_core::models::user::Role;

const DEFAULT_EMAIL: &str = "dr.rajesh@hospital.com";
const DEFAULT_PASSWORD: &str = "doctor123";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ayur_app::config::load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: ayur-intake <answers.json>"))?;
    let contents =
        std::fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {path}"))?;
    let answers: AnswerSet =
        serde_json::from_str(&contents).wrap_err_with(|| format!("invalid answers in {path}"))?;

    let email = env::var("AYUR_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
    let password = env::var("AYUR_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());
    let role: Role = env::var("AYUR_ROLE")
        .unwrap_or_else(|_| Role::Doctor.as_str().to_string())
        .parse()?;

    let mut app = App::new(config, CredentialStore::seeded());
    app.login(&email, &password, role)?;
    app.start_assessment()?;
    ayur_app::replay::fill_and_submit(&mut app, &answers).await?;

    let (filename, diet_plan) = app.export_diet_plan()?;
    println!("# {filename}\n");
    println!("{diet_plan}");
    println!("{}", app.report_text()?);

    Ok(())
}
