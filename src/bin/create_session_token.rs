use clap::Parser;
use chrono::Duration;
use launchpad::auth::session::create_session_token;
use launchpad::config;

/// Mint a provider-style session token for exercising the signed-in UI locally
#[derive(Debug, Parser)]
#[command(name = "create_session_token")]
struct Args {
    /// Provider user ID placed in the `sub` claim
    user_id: String,

    /// Email shown in the navbar avatar
    #[arg(long)]
    email: Option<String>,

    /// Token lifetime in hours
    #[arg(long, default_value_t = 24)]
    hours: i64,

    /// Signing secret (defaults to SESSION_SECRET)
    #[arg(long)]
    secret: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let settings = config::get_settings();

    let secret = args
        .secret
        .unwrap_or_else(|| settings.session_secret.clone());
    let token = create_session_token(
        &secret,
        &args.user_id,
        args.email.as_deref(),
        Duration::hours(args.hours),
    )?;

    println!("\n=== Session Token Generated ===\n");
    println!("User ID: {}", args.user_id);
    if let Some(email) = &args.email {
        println!("Email: {}", email);
    }
    println!("Lifetime: {} hours", args.hours);
    println!("\nToken:");
    println!("{}\n", token);
    println!("=== Usage ===");
    println!(
        "curl -b '{}={}' http://localhost:{}/",
        settings.session_cookie, token, settings.port
    );
    println!();

    Ok(())
}
