//! Benchmarks for employee-core filtering and chart layout

#![allow(clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use employee_core::{
    DepartmentFilter, Employee, EmployeeQuery,
    analytics::{self, Datum, PlotArea, ValueScale},
    data::employees,
    departments, filter_employees,
};
use std::hint::black_box;

/// Roster of `size` records cycling through the fixed dataset
fn roster(size: usize) -> Vec<Employee> {
    employees()
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, e)| {
            let mut e = e.clone();
            e.id = u32::try_from(i).unwrap_or(u32::MAX);
            e
        })
        .collect()
}

/// Benchmark the list filter at realistic and oversized roster sizes
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_employees");

    let queries = [
        ("unfiltered", EmployeeQuery::default()),
        ("search", EmployeeQuery::new("john", DepartmentFilter::All)),
        ("department", EmployeeQuery::new("", "Marketing".into())),
        ("combined", EmployeeQuery::new("COMPANY", "HR".into())),
        ("no_match", EmployeeQuery::new("zzz", DepartmentFilter::All)),
    ];

    for size in [4_usize, 1_000, 10_000] {
        let employees = roster(size);
        group.throughput(Throughput::Elements(size as u64));
        for (name, query) in &queries {
            group.bench_with_input(BenchmarkId::new(*name, size), &employees, |b, employees| {
                b.iter(|| filter_employees(black_box(employees), black_box(query)));
            });
        }
    }

    group.finish();
}

/// Benchmark building the department select options
fn bench_departments(c: &mut Criterion) {
    let employees = roster(10_000);
    c.bench_function("departments_10k", |b| {
        b.iter(|| departments(black_box(&employees)));
    });
}

/// Benchmark chart geometry for the analytics page
fn bench_chart_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_layout");
    let area = PlotArea::default();
    let bars: Vec<Datum> = analytics::department_headcounts().iter().map(Datum::from).collect();
    let line: Vec<Datum> = analytics::growth_trend().iter().map(Datum::from).collect();

    group.bench_function("bars", |b| {
        b.iter(|| {
            let scale = ValueScale::covering(bars.iter().map(|d| d.value), 5);
            analytics::bar_layout(black_box(&bars), &area, &scale)
        });
    });
    group.bench_function("line", |b| {
        b.iter(|| {
            let scale = ValueScale::covering(line.iter().map(|d| d.value), 5);
            analytics::polyline(&analytics::line_layout(black_box(&line), &area, &scale))
        });
    });
    group.bench_function("pie", |b| {
        b.iter(|| {
            analytics::pie_slices(black_box(analytics::employment_types()))
                .iter()
                .map(|s| s.path(150.0, 150.0, 100.0))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_departments, bench_chart_layout);
criterion_main!(benches);
