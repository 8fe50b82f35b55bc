//! 解析引擎性能基准测试

use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gomarks::resolver::{self, ParsedQuery, decide, template};
use gomarks::services::ResolveService;
use gomarks::storage::{MemoryStore, Shortcut};

fn sample_shortcut(destination: &str, single_word: bool) -> Shortcut {
    let now = chrono::Utc::now();
    Shortcut {
        id: 1,
        keyword: "bb".to_string(),
        destination: destination.to_string(),
        single_word,
        visit_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// 纯决策函数，不访问存储
fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver/decide");
    group.throughput(Throughput::Elements(1));

    let placeholder = sample_shortcut("https://www.bbc.com/news/world/%s", false);
    let single_word = sample_shortcut("https://www.bbc.com/search?q=%s", true);

    group.bench_function("placeholder_multi_word", |b| {
        b.iter(|| {
            let query = ParsedQuery::parse("bb climate change in europe").unwrap();
            let _ = decide(&query, Some(&placeholder));
        });
    });

    group.bench_function("single_word_overflow", |b| {
        b.iter(|| {
            let query = ParsedQuery::parse("bb too many words").unwrap();
            let _ = decide(&query, Some(&single_word));
        });
    });

    group.bench_function("no_match", |b| {
        b.iter(|| {
            let query = ParsedQuery::parse("banana split").unwrap();
            let _ = decide(&query, None);
        });
    });

    group.finish();
}

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver/template");

    group.bench_function("substitute_placeholder", |b| {
        b.iter(|| template::substitute_placeholder("https://www.bbc.com/news/world/%s", "europe"));
    });

    group.bench_function("substitute_search_terms", |b| {
        b.iter(|| {
            template::substitute_search_terms(
                "https://www.duckduckgo.com/?q={searchTerms}",
                "rust async traits",
            )
        });
    });

    group.finish();
}

/// 完整流程：查找 + 写日志 + 计数（内存存储）
fn bench_resolve_service(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(MemoryStore::with_examples());
    let service = ResolveService::new(store.clone());

    let mut group = c.benchmark_group("resolver/service");
    group.throughput(Throughput::Elements(1));
    // 查询日志只增不减，限制采样次数
    group.sample_size(30);

    group.bench_function("direct", |b| {
        b.to_async(&runtime)
            .iter(|| async { service.resolve("bb climate change").await.unwrap() });
    });

    group.bench_function("fallback", |b| {
        b.to_async(&runtime)
            .iter(|| async { service.resolve("banana split").await.unwrap() });
    });

    group.bench_function("preview", |b| {
        b.to_async(&runtime).iter(|| async {
            let query = ParsedQuery::parse("bbc rust").unwrap();
            resolver::resolve(&query, store.as_ref()).await.unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decide, bench_template, bench_resolve_service);
criterion_main!(benches);
