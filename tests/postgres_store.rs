//! Store behavior against a real PostgreSQL instance.
//!
//! Needs Docker: `cargo test -- --ignored`.

use chrono::NaiveDate;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use competitions::{
    config::DatabaseConfig,
    db::{self, CompetitionStore, PgCompetitionStore},
    models::CompetitionInput,
    services::CompetitionService,
    AppError,
};

async fn start() -> (ContainerAsync<Postgres>, PgCompetitionStore) {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start PostgreSQL container");
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();

    let config = DatabaseConfig {
        url: format!("postgres://postgres:postgres@{host}:{port}/postgres"),
        max_connections: 5,
        acquire_timeout_secs: 10,
    };

    let pool = db::create_pool(&config)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("INSERT INTO users (id, name) VALUES (1, 'Admin'), (2, 'Ivana'), (3, 'Marko')")
        .execute(&pool)
        .await
        .unwrap();

    (container, PgCompetitionStore::new(pool))
}

fn input(name: &str, date: (i32, u32, u32)) -> CompetitionInput {
    CompetitionInput {
        name: name.to_string(),
        description: "Annual tournament".to_string(),
        apply_till: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
    }
}

async fn competition_id(store: &PgCompetitionStore, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM competitions WHERE name = $1")
        .bind(name)
        .fetch_one(store.pool())
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn crud_round_trip_against_postgres() {
    let (_container, store) = start().await;
    store.ping().await.unwrap();

    CompetitionService::create_competition(&store, 1, &input("Go Cup", (2026, 3, 1)))
        .await
        .unwrap();
    CompetitionService::create_competition(&store, 1, &input("Chess Open", (2025, 12, 1)))
        .await
        .unwrap();

    let items = CompetitionService::list_competitions(&store).await.unwrap();
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Chess Open", "Go Cup"]);
    assert_eq!(items[0].author, "Admin");

    let id = competition_id(&store, "Go Cup").await;
    CompetitionService::update_competition(&store, id, &input("Go Masters", (2026, 4, 1)))
        .await
        .unwrap();
    let edited = CompetitionService::get_competition(&store, id).await.unwrap();
    assert_eq!(edited.name, "Go Masters");

    let err = CompetitionService::update_competition(&store, id + 1000, &input("X Cup", (2026, 1, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::OperationFailed(_)));

    CompetitionService::delete_competition(&store, id).await.unwrap();
    let err = CompetitionService::delete_competition(&store, id).await.unwrap_err();
    assert!(matches!(err, AppError::OperationFailed(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn applications_are_unique_and_scored() {
    let (_container, store) = start().await;
    CompetitionService::create_competition(&store, 1, &input("Chess Open", (2025, 12, 1)))
        .await
        .unwrap();
    let id = competition_id(&store, "Chess Open").await;

    CompetitionService::apply(&store, 2, id).await.unwrap();
    CompetitionService::apply(&store, 3, id).await.unwrap();
    let err = CompetitionService::apply(&store, 2, id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // The constraint itself rejects a duplicate that slipped past the existence check
    assert_eq!(store.insert_competitor(2, id).await.unwrap(), 0);

    let applied = CompetitionService::list_applied(&store, id).await.unwrap();
    assert_eq!(applied.len(), 2);
    let marko = applied.iter().find(|a| a.korisnik == "Marko").unwrap().id;

    let returned = CompetitionService::set_score(&store, marko, 12.5).await.unwrap();
    assert_eq!(returned, id);

    // Unscored (NULL) rows first, then ascending score
    let applied = CompetitionService::list_applied(&store, id).await.unwrap();
    assert_eq!(applied[0].korisnik, "Ivana");
    assert_eq!(applied[0].bodovi, None);
    assert_eq!(applied[1].korisnik, "Marko");
    assert_eq!(applied[1].bodovi, Some(12.5));

    let err = CompetitionService::apply(&store, 2, id + 1000).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn deleting_competition_cascades_to_applications() {
    let (_container, store) = start().await;
    CompetitionService::create_competition(&store, 1, &input("Chess Open", (2025, 12, 1)))
        .await
        .unwrap();
    let id = competition_id(&store, "Chess Open").await;
    CompetitionService::apply(&store, 2, id).await.unwrap();

    CompetitionService::delete_competition(&store, id).await.unwrap();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM competitors")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
