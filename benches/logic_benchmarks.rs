//! Benchmark suite for parsing, truth-table enumeration, CNF conversion, solving and
//! circuit simulation
//!
//! Inputs are generated so that each group scales with a single size parameter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use proplogic::{Circuit, CnfFormula, Gate, ParsedExpression, Solver, TruthTable};
use std::collections::HashMap;

/// `x0 & x1 | x2 & x3 | ...` over `n` variables
fn sum_of_products(n: usize) -> String {
    (0..n)
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|i| format!("x{}", i))
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Pigeonhole formula: `holes + 1` pigeons in `holes` holes, always unsatisfiable
fn pigeonhole(holes: usize) -> String {
    let pigeons = holes + 1;
    let mut parts = Vec::new();
    for p in 0..pigeons {
        let any = (0..holes)
            .map(|h| format!("p{}_{}", p, h))
            .collect::<Vec<_>>()
            .join(" | ");
        parts.push(format!("({})", any));
    }
    for h in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                parts.push(format!("!(p{}_{} & p{}_{})", p, h, q, h));
            }
        }
    }
    parts.join(" & ")
}

/// Ripple-carry adder over `bits`-bit operands
fn ripple_adder(bits: usize) -> Circuit {
    let mut inputs = Vec::new();
    for i in 0..bits {
        inputs.push(format!("a{}", i));
        inputs.push(format!("b{}", i));
    }
    inputs.push("c0".to_string());

    let mut circuit = Circuit::new(&inputs);
    let mut outputs = Vec::new();
    for i in 0..bits {
        let (a, b, c) = (format!("a{}", i), format!("b{}", i), format!("c{}", i));
        let half = format!("h{}", i);
        circuit.add_node(&half, Gate::Xor, &[&a, &b]).unwrap();
        circuit.add_node(&format!("s{}", i), Gate::Xor, &[&half, &c]).unwrap();
        circuit.add_node(&format!("g{}", i), Gate::And, &[&a, &b]).unwrap();
        circuit.add_node(&format!("p{}", i), Gate::And, &[&half, &c]).unwrap();
        circuit
            .add_node(
                &format!("c{}", i + 1),
                Gate::Or,
                &[format!("g{}", i), format!("p{}", i)],
            )
            .unwrap();
        outputs.push(format!("s{}", i));
    }
    outputs.push(format!("c{}", bits));
    circuit.set_outputs(&outputs).unwrap();
    circuit
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [8, 32, 128] {
        let text = sum_of_products(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| ParsedExpression::parse(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");
    for n in [4, 8, 12] {
        let parsed = ParsedExpression::parse(&sum_of_products(n)).unwrap();
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &parsed, |b, parsed| {
            b.iter(|| TruthTable::from_expression(parsed.root(), parsed.variables()).unwrap())
        });
    }
    group.finish();
}

fn bench_cnf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnf_conversion");
    // Distribution doubles the clause count with every product term
    for n in [4, 8, 12] {
        let parsed = ParsedExpression::parse(&sum_of_products(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &parsed, |b, parsed| {
            b.iter(|| CnfFormula::from_expr(black_box(parsed.root())).unwrap())
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_pigeonhole");
    group.sample_size(20);
    for holes in [2, 3, 4] {
        let parsed = ParsedExpression::parse(&pigeonhole(holes)).unwrap();
        let cnf = CnfFormula::from_expr(parsed.root()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(holes), &cnf, |b, cnf| {
            b.iter(|| Solver::default().solve(black_box(cnf)).unwrap())
        });
    }
    group.finish();
}

fn bench_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_adder");
    for bits in [4, 16, 64] {
        let mut circuit = ripple_adder(bits);
        let inputs: HashMap<String, bool> = circuit
            .inputs()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i % 3 == 0))
            .collect();
        group.throughput(Throughput::Elements(circuit.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| circuit.simulate(black_box(&inputs)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_truth_table,
    bench_cnf,
    bench_solve,
    bench_circuit
);
criterion_main!(benches);
