use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keycase::{
    convert_case, convert_case_with_options, convert_object_keys, detect_case, CaseStyle,
    ConvertOptions, KeyMap, Value,
};

fn benchmark_convert_case(c: &mut Criterion) {
    c.bench_function("convert_case_snake", |b| {
        b.iter(|| convert_case(black_box("userProfileID"), CaseStyle::Snake))
    });

    let preserve = ConvertOptions::new().with_preserve_abbreviations();
    c.bench_function("convert_case_preserve_abbr", |b| {
        b.iter(|| {
            convert_case_with_options(black_box("userHTMLDataFeed"), CaseStyle::Camel, &preserve)
        })
    });
}

fn benchmark_detect_case(c: &mut Criterion) {
    c.bench_function("detect_case", |b| {
        b.iter(|| detect_case(black_box("user_profile_id")))
    });
}

fn flat_doc(fields: usize) -> Value {
    let mut map = KeyMap::with_capacity(fields);
    for i in 0..fields {
        map.insert(format!("field_name_{i}"), Value::from(i as i64));
    }
    Value::object(map)
}

fn benchmark_convert_object_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_object_keys");

    for size in [10, 100, 1000].iter() {
        let doc = flat_doc(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| convert_object_keys(black_box(doc), CaseStyle::Camel))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_convert_case,
    benchmark_detect_case,
    benchmark_convert_object_keys
);
criterion_main!(benches);
