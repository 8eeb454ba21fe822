use criterion::{Criterion, criterion_group, criterion_main};
use region_lint_engine::{AnalyzerOptions, DirectiveMap, analyze, analyze_source};
use region_lint_syntax::parse;

fn generate_source(types: usize, methods: usize) -> String {
    let mut source = String::from("using System;\n\nnamespace Bench\n{\n");

    for t in 0..types {
        source.push_str(&format!("    public class Type{t}\n    {{\n        #region Fields\n        private int _value{t};\n        #endregion\n\n"));
        for m in 0..methods {
            source.push_str(&format!(
                "        public int Method{m}(int x)\n        {{\n            #region Body\n            if (x > {m})\n            {{\n#if DEBUG\n                Log(x);\n#endif\n                return x * {m};\n            }}\n            #endregion\n            return _value{t};\n        }}\n\n"
            ));
        }
        source.push_str("    }\n");
    }

    source.push_str("}\n");
    source
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    group.sample_size(10);

    let source = generate_source(20, 20);

    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(parse(std::hint::black_box(&source))));
    });

    let tree = parse(&source);
    group.bench_function("pair_directives", |b| {
        b.iter(|| std::hint::black_box(DirectiveMap::build(&tree)));
    });

    group.bench_function("analyze_tree", |b| {
        b.iter(|| std::hint::black_box(analyze(&tree, &AnalyzerOptions::default())));
    });

    group.bench_function("analyze_source", |b| {
        b.iter(|| {
            std::hint::black_box(analyze_source(
                std::hint::black_box(&source),
                &AnalyzerOptions::default(),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
