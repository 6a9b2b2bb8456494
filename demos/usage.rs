use flagkit::{Feature, FlagConfig, OverrideStore};

const WITH_CATS: Feature = Feature::new("with-cats", true);
const WITH_DOGS: Feature = Feature::new("with-dogs", false);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    println!("flagkit walkthrough");
    println!("===================\n");

    // Defaults only — no overrides supplied
    let store = OverrideStore::init(None);
    println!("with-cats: {}", store.is_enabled(&WITH_CATS));
    println!("with-dogs: {}", store.is_enabled(&WITH_DOGS));

    // Overrides flip both defaults
    let config = FlagConfig::default()
        .with_override("with-cats", false)
        .with_override("with-dogs", true);
    let mut store = OverrideStore::init(Some(config));

    println!("\nwith overrides applied:");
    println!("with-cats: {}", store.is_enabled(&WITH_CATS));
    println!("with-dogs: {}", store.is_enabled(&WITH_DOGS));

    println!("\nactive overrides:");
    for entry in store.overrides() {
        println!("  {} => {}", entry.name, entry.enabled);
    }

    store.shutdown();
    println!("\nafter shutdown: {} overrides", store.override_count());
}
