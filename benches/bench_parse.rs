use criterion::Criterion;

mod bench_util;
use bench_util::{
    bench_inputs, configure_criterion, gen_fixed, gen_integers, gen_scientific, gen_shortest,
};

fn fast_parse(s: &str) -> f64 {
    fastdouble::parse_double(s).unwrap()
}

fn std_parse(s: &str) -> f64 {
    s.parse().unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let integers = gen_integers(1024, 0x4242);
    let fixed = gen_fixed(1024, -1e6, 1e6, 0x7777);
    let shortest = gen_shortest(1024, 0x1190);
    let scientific = gen_scientific(1024, 0xd1ce);

    let mut group = c.benchmark_group("parse/integers");
    bench_inputs(&mut group, &integers, fast_parse, std_parse);
    group.finish();

    let mut group = c.benchmark_group("parse/fixed");
    bench_inputs(&mut group, &fixed, fast_parse, std_parse);
    group.finish();

    let mut group = c.benchmark_group("parse/shortest");
    bench_inputs(&mut group, &shortest, fast_parse, std_parse);
    group.finish();

    let mut group = c.benchmark_group("parse/scientific");
    bench_inputs(&mut group, &scientific, fast_parse, std_parse);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_parse(&mut c);
    c.final_summary();
}
