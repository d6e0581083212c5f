use anyhow::Context as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use vista::config::load_config;
use vista::logger::Logger;
use vista::prelude::*;
use vista_fixtures::{Company, Person, Product, Team, Unbound, User};

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config: VistaConfig =
        load_config(path.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::init_from(&config.logging)?;

    let (types, metadata) = vista_fixtures::registries()?;
    info!(types = types.len(), bindings = metadata.len(), "Fixtures registered");

    let serializer = vista::serializer(metadata.clone(), &config);
    let context = Context::new();
    for (label, value) in samples() {
        let json = serializer
            .serialize(&value, None, &context)
            .with_context(|| format!("Failed to serialize {label}"))?;
        println!("{label}: {json}");
    }

    let subscriber = vista::view_subscriber(metadata);
    let mut event = ViewEvent::new(Value::object(Arc::new(Person::new("Jane", "Doe", 17))));
    if subscriber.on_view(&mut event)? {
        info!(result = event.controller_result().type_name(), "Controller result replaced");
    }

    Ok(())
}

fn samples() -> Vec<(&'static str, Value)> {
    let owner = Person::new("Ada", "Lovelace", 36);
    let team = Team::new(
        "Platform",
        "Engineering",
        [Person::new("Grace", "Hopper", 45), Person::new("Alan", "Turing", 41)],
        Some(owner.clone()),
    );

    vec![
        ("person", Value::object(Arc::new(Person::new("Jane", "Doe", 17)))),
        ("company", Value::object(Arc::new(Company::new("Analytical", "Computing", owner, 1843)))),
        ("team", Value::object(Arc::new(team))),
        ("product", Value::object(Arc::new(Product::new("Laptop", 1299.0, true)))),
        ("user", Value::object(Arc::new(User::new("Jane Smith", "jane@example.com", 17)))),
        ("unbound", Value::object(Arc::new(Unbound::new("plain object")))),
    ]
}
