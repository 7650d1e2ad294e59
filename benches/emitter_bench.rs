//! Emitter Benchmark
//!
//! Measures printer throughput (output bytes/sec) over generated node trees.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kettle::{CatchClause, EmitConfig, Node, Printer, compile_program};

// =============================================================================
// Test Trees
// =============================================================================

fn simple_program() -> Node {
    Node::sequence(vec![
        Node::assign(
            Node::value("add"),
            Node::code(
                vec!["a".to_string(), "b".to_string()],
                Node::op("+", Node::value("a"), Node::value("b")),
            ),
        ),
        Node::assign(
            Node::value("result"),
            Node::call(Node::value("add"), vec![Node::number(1), Node::number(2)]),
        ),
        Node::call(
            Node::value("console").access("log"),
            vec![Node::value("result")],
        ),
    ])
}

fn branchy_program() -> Node {
    Node::sequence(vec![
        Node::assign(Node::value("total"), Node::number(0)),
        Node::for_in_indexed(
            Node::if_then(
                Node::op(">", Node::value("item"), Node::number(0)),
                Node::assign(
                    Node::value("total"),
                    Node::op("+", Node::value("total"), Node::value("item")),
                ),
            )
            .add_else(Node::call(Node::value("skip"), vec![Node::value("i")])),
            "item",
            "i",
            Node::value("items"),
        ),
        Node::try_catch(
            Node::call(Node::value("report"), vec![Node::value("total")]),
            Some(CatchClause::new("e", Node::value("e"))),
            None,
        ),
    ])
}

/// Generate a program with many functions for throughput testing
fn generate_large_program(functions: usize, statements_per_fn: usize) -> Node {
    let mut nodes = Vec::with_capacity(functions * 2);

    for f in 0..functions {
        let mut body = Vec::with_capacity(statements_per_fn + 1);
        for s in 0..statements_per_fn {
            body.push(Node::assign(
                Node::value(format!("v{s}")),
                Node::op("+", Node::value("x"), Node::number(s)),
            ));
        }
        body.push(Node::op("+", Node::value("x"), Node::value("y")));
        nodes.push(Node::assign(
            Node::value(format!("fn{f}")),
            Node::code(
                vec!["x".to_string(), "y".to_string()],
                Node::sequence(body),
            ),
        ));
    }

    for f in 0..functions {
        nodes.push(Node::assign(
            Node::value(format!("r{f}")),
            Node::call(
                Node::value(format!("fn{f}")),
                vec![Node::number(1), Node::number(2)],
            ),
        ));
    }

    Node::sequence(nodes)
}

// =============================================================================
// Emitter Benchmarks
// =============================================================================

/// Benchmark: Emit simple program
fn bench_emit_simple(c: &mut Criterion) {
    let program = simple_program();
    c.bench_function("emit_simple", |b| {
        b.iter(|| black_box(compile_program(&program)))
    });
}

/// Benchmark: Emit loops, conditionals and try blocks
fn bench_emit_branchy(c: &mut Criterion) {
    let program = branchy_program();
    c.bench_function("emit_branchy", |b| {
        b.iter(|| black_box(compile_program(&program)))
    });
}

/// Benchmark: Emit throughput for various sizes
fn bench_emit_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_throughput");

    for (functions, statements) in [(10, 5), (20, 10), (50, 5), (100, 5)] {
        let program = generate_large_program(functions, statements);
        let bytes = compile_program(&program).map_or(0, |output| output.len() as u64);
        let label = format!("{functions}fn_{statements}stmt");

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::new("emit", &label), &program, |b, program| {
            b.iter(|| black_box(compile_program(program)))
        });
    }

    group.finish();
}

/// Benchmark: Wrapped vs bare output (isolates wrapper and return-pushing)
fn bench_emit_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_wrapping");
    let program = generate_large_program(20, 10);

    group.bench_function("wrapped", |b| {
        let mut printer = Printer::default();
        b.iter(|| black_box(printer.emit_program(&program)))
    });

    group.bench_function("bare", |b| {
        let mut printer = Printer::new(EmitConfig::bare());
        b.iter(|| black_box(printer.emit_program(&program)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_emit_simple,
    bench_emit_branchy,
    bench_emit_throughput,
    bench_emit_wrapping,
);

criterion_main!(benches);
