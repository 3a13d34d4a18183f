//! Benchmarks for sidebar lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_sidebar::{NavItem, SectionKind, Sidebar};

/// Build a section tree with the given depth and breadth. Every level
/// starts with one leaf followed by `breadth` accordions.
fn create_tree(prefix: &str, depth: usize, breadth: usize) -> Vec<NavItem> {
    let mut items = vec![NavItem::new("Overview", &format!("{prefix}/overview"))];
    for i in 0..breadth {
        let link = format!("{prefix}/section-{i}");
        let item = if depth == 0 {
            NavItem::new(format!("Page {i}"), &link)
        } else {
            NavItem::new(format!("Section {i}"), &link).with_children(create_tree(
                &link,
                depth - 1,
                breadth,
            ))
        };
        items.push(item);
    }
    items
}

fn create_sidebar(depth: usize, breadth: usize) -> Sidebar {
    Sidebar::new(SectionKind::ALL.iter().map(|&kind| {
        (
            kind,
            create_tree(&format!("/docs/{kind}"), depth, breadth),
        )
    }))
}

fn deepest_link(kind: SectionKind, depth: usize, breadth: usize) -> String {
    let mut link = format!("/docs/{kind}");
    for _ in 0..=depth {
        link.push_str(&format!("/section-{}", breadth - 1));
    }
    link
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for depth in [1, 3] {
        let sidebar = create_sidebar(depth, 4);
        let url = deepest_link(SectionKind::Tutorials, depth, 4);

        group.bench_with_input(BenchmarkId::new("locate_all_hit", depth), &url, |b, url| {
            b.iter(|| sidebar.locate_all(url));
        });

        group.bench_with_input(BenchmarkId::new("locate_all_miss", depth), &depth, |b, _| {
            b.iter(|| sidebar.locate_all("/no/such/page/"));
        });
    }

    group.finish();
}

fn bench_prev_next(c: &mut Criterion) {
    let sidebar = create_sidebar(3, 4);
    let last = deepest_link(SectionKind::Tutorials, 3, 4);

    let mut group = c.benchmark_group("prev_next");

    group.bench_function("last_page", |b| b.iter(|| sidebar.prev_next(&last)));

    group.bench_function("miss", |b| b.iter(|| sidebar.prev_next("/blog/")));

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_sidebar", |b| b.iter(|| create_sidebar(3, 4)));
}

criterion_group!(benches, bench_locate, bench_prev_next, bench_build);
criterion_main!(benches);
