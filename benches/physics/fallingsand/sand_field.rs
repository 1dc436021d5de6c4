use criterion::{criterion_group, Criterion};
use pixelbox::physics::fallingsand::data::sand_field::SandField;
use pixelbox::physics::fallingsand::data::sink::NullSink;
use pixelbox::physics::fallingsand::elements::element::ElementType;
use pixelbox::physics::fallingsand::util::vectors::XyVector;

/// The default field for benchmarking: a pool of water with a curtain of
/// sand and gravel dropped into it, so every rule keeps firing
fn get_populated_field() -> SandField<NullSink> {
    let mut field = SandField::new_seeded(128, 128, NullSink, 42).unwrap();
    for x in 0..128 {
        for y in 96..128 {
            field.add_element(XyVector::new(x, y), ElementType::Water);
        }
    }
    for x in 32..96 {
        field.add_element(XyVector::new(x, 0), ElementType::Sand);
        field.add_element(XyVector::new(x, 1), ElementType::Gravel);
    }
    field
}

fn bench_simulate(c: &mut Criterion) {
    let mut field = get_populated_field();
    c.bench_function("simulate", |b| {
        b.iter(|| {
            field.simulate();
        })
    });
}

fn bench_get_texture(c: &mut Criterion) {
    let field = get_populated_field();
    c.bench_function("get_texture", |b| {
        b.iter(|| {
            field.get_texture();
        })
    });
}

criterion_group!(benches, bench_simulate, bench_get_texture);
