use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonh::{parse_node, tokenize, JsonhOptions};

fn benchmark_tokenize_simple(c: &mut Criterion) {
    let doc = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";

    c.bench_function("tokenize_simple_object", |b| {
        b.iter(|| {
            tokenize(black_box(doc), JsonhOptions::new())
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        })
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let doc = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";

    c.bench_function("parse_simple_object", |b| {
        b.iter(|| parse_node(black_box(doc), JsonhOptions::new()).unwrap())
    });
}

fn make_array_doc(size: usize) -> String {
    let items: Vec<String> = (0..size)
        .map(|i| format!("{{ sku: SKU{i}, name: Product {i}, price: {:.2}, quantity: {i} }}", 9.99 + i as f64))
        .collect();
    format!("[{}]", items.join(", "))
}

fn benchmark_tokenize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_array");

    for size in [10, 50, 100, 500].iter() {
        let doc = make_array_doc(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| {
                tokenize(black_box(doc), JsonhOptions::new())
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let doc = make_array_doc(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| parse_node(black_box(doc), JsonhOptions::new()).unwrap())
        });
    }
    group.finish();
}

fn benchmark_nested_object(c: &mut Criterion) {
    let doc = r#"
        id: 42
        metadata: {
            created: "2023-01-01T00:00:00Z"
            updated: "2023-12-31T23:59:59Z"
            version: 3
        }
        tags: [important, verified, production]
    "#;

    c.bench_function("parse_nested_struct", |b| {
        b.iter(|| parse_node(black_box(doc), JsonhOptions::new()).unwrap())
    });
}

fn benchmark_quoteless_vs_quoted_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let quoteless = "short medium_length_string a_fairly_long_quoteless_token_here";
    let quoted = r#""short" "medium length string" "a fairly long quoted token here""#;

    group.bench_function("quoteless", |b| {
        b.iter(|| {
            tokenize(black_box(quoteless), JsonhOptions::new())
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        })
    });

    group.bench_function("quoted", |b| {
        b.iter(|| {
            tokenize(black_box(quoted), JsonhOptions::new())
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        })
    });

    group.finish();
}

fn benchmark_big_numbers_option(c: &mut Criterion) {
    let doc = "[1.5, 42, 1000000, 3.14159, 0x1A, 0b101]";
    let mut group = c.benchmark_group("number_mode");

    group.bench_function("f64_numbers", |b| {
        b.iter(|| parse_node(black_box(doc), JsonhOptions::new()).unwrap())
    });

    group.bench_function("exact_numbers", |b| {
        b.iter(|| {
            parse_node(black_box(doc), JsonhOptions::new().with_big_numbers(true)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenize_simple,
    benchmark_parse_simple,
    benchmark_tokenize_array,
    benchmark_parse_array,
    benchmark_nested_object,
    benchmark_quoteless_vs_quoted_strings,
    benchmark_big_numbers_option,
);
criterion_main!(benches);
