//! Line-oriented front-end for the lead controller.
//!
//! Wires [`LeadController`] to PostgreSQL and the generation proxy, and
//! drives it with simple commands on stdin. Styling-free by intent; the
//! controller owns all state transitions.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outreach_app::{HttpMessageGenerator, LeadController, PgLeadStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outreach_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = outreach_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    outreach_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    outreach_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready");

    // --- Proxy client ---
    let proxy_url =
        std::env::var("PROXY_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    let mut ctrl = LeadController::new(
        PgLeadStore::new(pool),
        HttpMessageGenerator::new(proxy_url),
    );
    ctrl.load_leads().await;

    println!("outreach assistant -- commands: list, select <n>, name|role|company|url <value>, save, gen, messages, help, quit");
    print_leads(&ctrl);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => {
                println!("list, select <n>, name|role|company|url <value>, save, gen, messages, quit");
            }
            "list" => {
                ctrl.load_leads().await;
                print_leads(&ctrl);
            }
            "select" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 && n <= ctrl.leads().len() => {
                    let lead = ctrl.leads()[n - 1].clone();
                    ctrl.select_lead(&lead).await;
                    match ctrl.selected() {
                        Some(l) => println!("selected: {} ({} at {})", l.name, l.role, l.company),
                        None => println!("deselected"),
                    }
                }
                _ => println!("usage: select <1..{}>", ctrl.leads().len()),
            },
            "name" => ctrl.form_mut().name = rest.to_string(),
            "role" => ctrl.form_mut().role = rest.to_string(),
            "company" => ctrl.form_mut().company = rest.to_string(),
            "url" => ctrl.form_mut().linkedin_url = rest.to_string(),
            "save" => {
                let result = if ctrl.selected().is_some() {
                    ctrl.update_lead().await.map(|l| l.id)
                } else {
                    ctrl.insert_lead().await.map(|l| l.id)
                };
                match result {
                    Ok(id) => {
                        println!("saved lead {id}");
                        print_leads(&ctrl);
                    }
                    Err(err) => println!("save failed: {err}"),
                }
            }
            "gen" => match ctrl.generate_message().await {
                Ok(message) => println!("[{}] {}", message.status, message.content),
                Err(err) => println!("generation failed: {err}"),
            },
            "messages" => {
                for (i, message) in ctrl.messages().iter().enumerate() {
                    println!("{}. [{}] {}", i + 1, message.status, message.content);
                }
                if ctrl.messages().is_empty() {
                    println!("no messages (select a lead first)");
                }
            }
            other => println!("unknown command '{other}' (try: help)"),
        }
    }
}

fn print_leads<S, G>(ctrl: &LeadController<S, G>)
where
    S: outreach_app::LeadStore,
    G: outreach_app::MessageGenerator,
{
    if ctrl.leads().is_empty() {
        println!("no leads yet");
        return;
    }
    for (i, lead) in ctrl.leads().iter().enumerate() {
        println!("{}. {} -- {} at {}", i + 1, lead.name, lead.role, lead.company);
    }
}
