use catalog_admin_mock::domain::model::{Admin, Entity, Product};
use catalog_admin_mock::infra::config::Config;
use catalog_admin_mock::storage::{load_or_seed, FileKvStore, KeyValueStore, SeedSource};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--strict]\n\
         \n\
         Reads env vars (all optional):\n\
           CATALOG_BIND_ADDR, CATALOG_STORAGE_DIR, CATALOG_ID_STRATEGY, RUST_LOG\n\
         \n\
         --strict  fail if a stored collection is unreadable or malformed\n"
    );
    std::process::exit(2);
}

async fn check<E: Entity>(kv: &dyn KeyValueStore) -> SeedSource {
    let (items, source) = load_or_seed::<E>(kv).await;
    let key = E::KIND.storage_key();
    match &source {
        SeedSource::Stored => println!("  {}: {} stored record(s)", key, items.len()),
        SeedSource::Absent => println!("  {}: absent, would seed {} record(s)", key, items.len()),
        SeedSource::Recovered(reason) => {
            eprintln!("  {}: unusable ({}), would fall back to {} seed record(s)", key, reason, items.len())
        }
    }
    source
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let strict = args.iter().any(|a| a == "--strict");

    // Force-read config (nice error messages if invalid)
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  CATALOG_BIND_ADDR={}", config.bind_addr);
    println!("  CATALOG_STORAGE_DIR={}", config.backend_label());
    println!("  CATALOG_ID_STRATEGY={}", config.store.id_strategy);

    let Some(dir) = config.storage_dir.clone() else {
        println!("  In-memory backend: collections are seeded on every start.");
        println!("> Preflight OK.");
        return Ok(());
    };

    let kv = FileKvStore::new(dir);
    let sources = [check::<Product>(&kv).await, check::<Admin>(&kv).await];
    let recovered = sources
        .iter()
        .filter(|s| matches!(s, SeedSource::Recovered(_)))
        .count();

    if strict && recovered > 0 {
        return Err(anyhow::anyhow!(
            "{} stored collection(s) could not be loaded from {}",
            recovered,
            kv.dir().display()
        ));
    }

    println!("> Preflight OK.");
    Ok(())
}
