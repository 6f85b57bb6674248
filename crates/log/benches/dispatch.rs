use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use lumen_log::{Event, Logger, Severity};

fn bench_dispatch(c: &mut Criterion) {
    let logger = Logger::new();
    for _ in 0..4 {
        logger.register(Arc::new(|event: &Event| {
            std::hint::black_box(event.severity().level());
        }));
    }

    c.bench_function("log_4_observers", |b| {
        b.iter(|| logger.log(Severity::Information, "bench message"));
    });

    let event = Event::builder(Severity::Information)
        .message("bench message")
        .file("dispatch.rs")
        .line(1)
        .build();
    c.bench_function("dispatch_prebuilt_4_observers", |b| {
        b.iter(|| logger.dispatch(&event));
    });

    c.bench_function("render", |b| {
        b.iter(|| std::hint::black_box(lumen_log::format::render(&event)));
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
