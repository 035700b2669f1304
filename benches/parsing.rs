use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ini_doc::{from_str, to_string, to_string_with_options, FormatOptions, Ini};

fn generate_text(sections: usize, items: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("; section {} comment\n[section{}]\n", s, s));
        for i in 0..items {
            if i % 3 == 0 {
                text.push_str(&format!("# item {} comment\n", i));
            }
            text.push_str(&format!("  key{} = value {} of section {}\n", i, i, s));
        }
        text.push('\n');
    }
    text
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "; top comment\n[section1]\nitem1=value1\nitem2=value2\n";

    c.bench_function("parse_simple", |b| b.iter(|| from_str(black_box(text))));
}

fn benchmark_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 100, 500].iter() {
        let text = generate_text(*size, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_serialize_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 50, 100, 500].iter() {
        let ini = from_str(&generate_text(*size, 10));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ini, |b, ini| {
            b.iter(|| to_string(black_box(ini)))
        });
    }

    group.finish();
}

fn benchmark_serialize_compact(c: &mut Criterion) {
    let ini = from_str(&generate_text(100, 10));

    c.bench_function("serialize_compact_100", |b| {
        b.iter(|| to_string_with_options(black_box(&ini), FormatOptions::compact()))
    });
}

fn benchmark_mutations(c: &mut Criterion) {
    c.bench_function("set_or_create_1000", |b| {
        b.iter(|| {
            let mut ini = Ini::new();
            for i in 0..1000 {
                let section = format!("section{}", i % 10);
                let item = format!("key{}", i);
                ini.set_or_create(&section, &item, "value");
            }
            black_box(ini)
        })
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = generate_text(50, 10);

    c.bench_function("roundtrip_50", |b| {
        b.iter(|| {
            let ini = from_str(black_box(&text));
            let out = to_string(&ini);
            from_str(&out)
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_sizes,
    benchmark_serialize_sizes,
    benchmark_serialize_compact,
    benchmark_mutations,
    benchmark_roundtrip
);
criterion_main!(benches);
