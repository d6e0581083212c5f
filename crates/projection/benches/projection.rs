use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use vista_fixtures::{Person, Team};
use vista_model::{LazyProxy, Value};
use vista_projection::{ProjectingNormalizer, Projector};
use vista_serializer::{Context, JsonEncoder, Normalizer, ObjectNormalizer, Serializer};

fn setup() -> (ProjectingNormalizer, Serializer) {
    let (_, metadata) = vista_fixtures::registries().unwrap();
    let projecting = ProjectingNormalizer::new(Projector::new(metadata));
    let serializer = Serializer::builder()
        .normalizer(projecting.clone())
        .normalizer(ObjectNormalizer::new())
        .encoder(JsonEncoder)
        .build();
    (projecting, serializer)
}

fn bench_supports(c: &mut Criterion) {
    let mut group = c.benchmark_group("supports");
    let (projecting, _) = setup();
    let context = Context::new();

    let entity = Value::object(Arc::new(Person::new("Jane", "Doe", 17)));
    let proxy = Value::Object(Arc::new(LazyProxy::new(|| {
        Ok(Arc::new(Person::new("Jane", "Doe", 17)))
    })));

    group.bench_function("entity", |b| {
        b.iter(|| projecting.supports(black_box(&entity), None, &context));
    });
    group.bench_function("proxy", |b| {
        b.iter(|| projecting.supports(black_box(&proxy), None, &context));
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let (_, serializer) = setup();
    let context = Context::new();

    let person = Value::object(Arc::new(Person::new("Jane", "Doe", 17)));
    group.bench_function("person", |b| {
        b.iter(|| serializer.serialize(black_box(&person), None, &context).unwrap());
    });

    for size in [10_u32, 100, 1000] {
        let members = (0..size).map(|i| Person::new(format!("M{i}"), "Doe", 20 + i % 40));
        let team = Value::object(Arc::new(Team::new("Bench", "R&D", members, None)));

        group.bench_with_input(BenchmarkId::new("team", size), &team, |b, team| {
            b.iter(|| serializer.serialize(black_box(team), None, &context).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_supports, bench_serialize);
criterion_main!(benches);
