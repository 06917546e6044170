//! `DieselBeerRepository` against embedded PostgreSQL.
//!
//! Opt-in: run `RUN_PG_EMBEDDED=1 cargo test -- --ignored`.

use std::sync::Arc;

use beers_backend::domain::ports::{BeerPersistenceError, BeerRepository, GoodBeersQuery};
use beers_backend::domain::{BeerName, GoodBeersService, NewBeer, SEED_BEER_NAMES};
use beers_backend::outbound::persistence::{
    DbPool, DieselBeerRepository, PoolConfig, run_migrations,
};
use beers_backend::startup::seed_on_startup;
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

fn embedded_enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1") {
        true
    } else {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        false
    }
}

async fn repository_for(database_url: &str) -> DieselBeerRepository {
    run_migrations(database_url)
        .await
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    DieselBeerRepository::new(pool)
}

fn beer(name: &str) -> NewBeer {
    NewBeer::new(BeerName::new(name).expect("valid name"))
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn saves_and_lists_beers_in_insertion_order() {
    if !embedded_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let database_url = cluster.connection().database_url("postgres");
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        let repository = repository_for(&database_url).await;

        let first = repository.save(beer("White Rascal")).await.expect("save");
        let second = repository.save(beer("Budweiser")).await.expect("save");
        assert_ne!(first.id(), second.id());

        let stored = repository.find_all().await.expect("find_all");
        assert_eq!(stored, vec![first, second]);

        let good = GoodBeersService::new(Arc::new(repository))
            .good_beers()
            .await
            .expect("good beers");
        let names: Vec<String> = good.iter().map(|b| b.name().to_string()).collect();
        assert_eq!(names, ["White Rascal"]);
    });
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn startup_seeding_persists_the_fixed_list() {
    if !embedded_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let database_url = cluster.connection().database_url("postgres");
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        let repository: Arc<dyn BeerRepository> = Arc::new(repository_for(&database_url).await);

        let outcome = seed_on_startup(repository.clone(), true)
            .await
            .expect("seeding succeeds")
            .expect("seeding enabled");

        let stored = repository.find_all().await.expect("find_all");
        assert_eq!(stored, outcome.beers);
        let names: Vec<String> = stored.iter().map(|b| b.name().to_string()).collect();
        assert_eq!(names, SEED_BEER_NAMES);
    });
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn missing_table_is_a_query_error() {
    if !embedded_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let database_url = cluster.connection().database_url("postgres");
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        // No migrations: the beers table does not exist.
        let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
            .await
            .expect("pool builds");
        let repository = DieselBeerRepository::new(pool);

        let error = repository.find_all().await.expect_err("table is missing");

        assert!(
            matches!(error, BeerPersistenceError::Query { .. }),
            "{error:?}"
        );
    });
}
