//! Seed the catalog with demo items.
//!
//! Items have no create route; the catalog is populated out of band. Safe to
//! re-run: items already present (by title) are skipped.

use basket_db::models::item::CreateItem;
use basket_db::repositories::ItemRepo;

fn demo_items() -> Vec<CreateItem> {
    vec![
        CreateItem {
            title: "Espresso Cup".to_string(),
            description: "Stoneware espresso cup, 90 ml".to_string(),
            price: 10,
            img_url: Some("https://example.com/img/espresso-cup.jpg".to_string()),
        },
        CreateItem {
            title: "Pour-Over Kettle".to_string(),
            description: "Gooseneck kettle with thermometer, 1 l".to_string(),
            price: 45,
            img_url: Some("https://example.com/img/kettle.jpg".to_string()),
        },
        CreateItem {
            title: "Hand Grinder".to_string(),
            description: "Conical burr grinder, 40 click settings".to_string(),
            price: 65,
            img_url: Some("https://example.com/img/grinder.jpg".to_string()),
        },
        CreateItem {
            title: "Filter Papers".to_string(),
            description: "Pack of 100 size-02 filter papers".to_string(),
            price: 6,
            img_url: None,
        },
    ]
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://basket.db".into());

    let pool = basket_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    basket_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let mut created = 0usize;
    for input in demo_items() {
        let existing = ItemRepo::find_by_title(&pool, &input.title)
            .await
            .expect("Failed to query items");
        if existing.is_some() {
            tracing::info!(title = %input.title, "Item already seeded, skipping");
            continue;
        }
        let item = ItemRepo::create(&pool, &input)
            .await
            .expect("Failed to insert item");
        tracing::info!(id = item.id, title = %item.title, "Seeded item");
        created += 1;
    }

    tracing::info!(created, "Seeding complete");
}
