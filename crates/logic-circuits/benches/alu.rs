use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logic_circuits::{Alu, Component, Word};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alu_construct", |bench| {
        bench.iter(|| black_box(Component::<Alu>::from_decimal(10, 20).unwrap().run()))
    });

    let mut alu = Component::<Alu>::default();
    c.bench_function("alu_set_input", move |bench| {
        bench.iter(|| {
            black_box(
                alu.set_input((Word::from(0x5a), Word::from(0xa5)))
                    .run(),
            )
        })
    });

    let alu = Alu::default();
    c.bench_function("alu_exhaustive", move |bench| {
        bench.iter(|| {
            for x in 0..=u8::MAX {
                for y in 0..=u8::MAX {
                    black_box(alu.add(Word::from(x), Word::from(y)));
                }
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
