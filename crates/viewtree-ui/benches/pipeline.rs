use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viewtree_ui::{Constraint, DimensionSpec, LayoutParams, LayoutTree, NodeId};

const SECTION_COUNT: usize = 4;
const ROWS_PER_SECTION_SAMPLES: &[usize] = &[16, 64, 256];
const NESTED_DEPTH_SAMPLES: &[usize] = &[8, 32, 128];
const SCREEN_WIDTH: u32 = 1080;
const SCREEN_HEIGHT: u32 = 1920;

fn row_params() -> LayoutParams {
    LayoutParams::new(DimensionSpec::FillParent, DimensionSpec::Exact(48))
}

fn sectioned_tree(sections: usize, rows_per_section: usize) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.create_container("Root");
    for section in 0..sections {
        let column = tree.create_container(format!("Section {section}"));
        tree.set_layout_params(
            column,
            LayoutParams::new(DimensionSpec::FillParent, DimensionSpec::FitContent),
        )
        .expect("section exists");
        tree.add_child(root, column).expect("attach section");
        for row in 0..rows_per_section {
            let item = tree.create_node(format!("Item {section}-{row}"));
            tree.set_layout_params(item, row_params()).expect("row exists");
            tree.add_child(column, item).expect("attach row");
        }
    }
    (tree, root)
}

fn nested_tree(depth: usize) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.create_container("Level 0");
    let mut parent = root;
    for level in 1..depth {
        let leaf = tree.create_node(format!("Row {level}"));
        tree.set_layout_params(leaf, row_params()).expect("row exists");
        tree.add_child(parent, leaf).expect("attach row");

        let next = tree.create_container(format!("Level {level}"));
        tree.add_child(parent, next).expect("attach level");
        parent = next;
    }
    (tree, root)
}

fn run_pass(tree: &mut LayoutTree, root: NodeId) {
    tree.measure(
        root,
        Constraint::exactly(SCREEN_WIDTH),
        Constraint::at_most(SCREEN_HEIGHT),
    )
    .expect("measure root");
    let size = tree.get(root).expect("root exists").measured_size();
    tree.layout(root, 0, 0, size.width as i32, size.height as i32)
        .expect("layout root");
}

fn bench_sectioned(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_layout_sectioned");
    for &rows in ROWS_PER_SECTION_SAMPLES {
        let (mut tree, root) = sectioned_tree(SECTION_COUNT, rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| run_pass(black_box(&mut tree), root));
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_layout_nested");
    for &depth in NESTED_DEPTH_SAMPLES {
        let (mut tree, root) = nested_tree(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| run_pass(black_box(&mut tree), root));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sectioned, bench_nested);
criterion_main!(benches);
