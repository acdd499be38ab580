//! Criterion benchmarks for rates_models schedule generation and accrual.
//!
//! Measures amortization schedule generation across loan lengths and
//! single-month accrual across transaction counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rates_models::accrual::{accrue_monthly_interest, Transactions};
use rates_models::amortization::{AmortizationMode, AmortizationSchedule, LoanTerms};

/// Benchmark schedule generation for both repayment conventions.
fn bench_amortization_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("amortization_schedule");

    for years in [1, 10, 30] {
        let terms = LoanTerms::new(500_000.0, 0.055, years, 12).unwrap();
        for mode in AmortizationMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(mode.code(), terms.total_periods()),
                &terms,
                |b, terms| {
                    b.iter(|| AmortizationSchedule::generate(black_box(terms), mode).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark one month of accrual with a growing number of transactions.
fn bench_monthly_accrual(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_accrual");

    for count in [0_u32, 3, 31] {
        let txs: Transactions = (1..=count)
            .map(|day| (day, if day % 2 == 0 { 1_000.0 } else { -400.0 }))
            .collect();
        group.bench_with_input(BenchmarkId::new("transactions", count), &txs, |b, txs| {
            b.iter(|| {
                accrue_monthly_interest(black_box(100_000.0), black_box(txs), 31, 0.05).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_amortization_schedule, bench_monthly_accrual);
criterion_main!(benches);
