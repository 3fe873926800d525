use accessormap::analyzers::{Analyzer, JavaAnalyzer};
use accessormap::config::ScanConfig;
use accessormap::{classify, classify_indexed, scan_paths, FieldIndex};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn bean_source(class_name: &str, properties: usize) -> String {
    let mut content = format!("public class {} {{\n", class_name);
    for i in 0..properties {
        content.push_str(&format!("    private int value{};\n", i));
    }
    for i in 0..properties {
        content.push_str(&format!(
            r#"
    public int getValue{i}() {{ return value{i}; }}
    public void setValue{i}(int value) {{ this.value{i} = value; }}
    public int computeValue{i}(int x) {{
        if (x > {i}) {{
            return x * value{i};
        }}
        return value{i};
    }}
"#,
            i = i
        ));
    }
    content.push_str("}\n");
    content
}

fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let src_dir = temp_dir.path().join("src");
    std::fs::create_dir_all(&src_dir).unwrap();

    for i in 1..=50 {
        let name = format!("Bean{}", i);
        std::fs::write(src_dir.join(format!("{}.java", name)), bean_source(&name, 20)).unwrap();
    }

    let path_buf = temp_dir.path().to_path_buf();
    (temp_dir, path_buf)
}

fn bench_classification(c: &mut Criterion) {
    let classes = JavaAnalyzer::new()
        .parse_classes(&bean_source("Bean", 200), Path::new("Bean.java"))
        .unwrap();
    let class = &classes[0];

    let mut group = c.benchmark_group("classification");
    group.bench_function("scan_fields_per_call", |b| {
        b.iter(|| {
            class
                .callables()
                .filter(|m| classify(black_box(class), m).is_some())
                .count()
        })
    });
    group.bench_function("shared_field_index", |b| {
        b.iter(|| {
            let index = FieldIndex::new(black_box(class));
            class
                .callables()
                .filter(|m| classify_indexed(&index, m).is_some())
                .count()
        })
    });
    group.finish();
}

fn bench_scan_project(c: &mut Criterion) {
    let (_temp_dir, project_path) = create_test_project();

    let mut group = c.benchmark_group("scan_project");
    group.sample_size(10);
    for jobs in [1, 0] {
        let config = ScanConfig {
            exclude: vec![],
            jobs,
        };
        group.bench_function(format!("jobs_{}", jobs), |b| {
            b.iter(|| scan_paths(black_box(&project_path), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classification, bench_scan_project);
criterion_main!(benches);
