use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tc_core::{FourMomentum, Jet};
use tc_reco::{RecoConfig, TopMassReconstructor};

fn make_event(n: usize) -> Vec<Jet> {
    // Deterministic jet kinematics spread over the detector acceptance.
    (0..n)
        .map(|k| {
            let kf = k as f64;
            let btag = k % 4 == 0;
            Jet::new(
                FourMomentum::from_pt_eta_phi_m(
                    25.0 + 11.0 * kf,
                    -2.0 + 4.0 * (kf + 0.5) / n as f64,
                    -3.0 + 0.83 * kf % 6.0,
                    if btag { 4.8 } else { 0.0 },
                ),
                btag,
            )
        })
        .collect()
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reco_scan");
    let reco = TopMassReconstructor::new(RecoConfig::default()).unwrap();

    for n in [4usize, 8, 12, 16] {
        let jets = make_event(n);
        group.bench_with_input(BenchmarkId::new("reconstruct_tagged", n), &n, |b, _| {
            b.iter(|| black_box(reco.reconstruct_tagged(black_box(&jets)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct);
criterion_main!(benches);
