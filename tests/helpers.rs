use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spdpack::{Helper, PackedCholesky, PackedSymmetric, SeqHelper};

fn random_spd(n: usize, rng: &mut ChaCha8Rng) -> PackedSymmetric<f64> {
    let b: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    PackedSymmetric::from_fn(n, |i, j| {
        let dot: f64 = (0..n).map(|k| b[i * n + k] * b[j * n + k]).sum();
        dot + if i == j { n as f64 } else { 0.0 }
    })
}

fn check_solution<H: Helper<f64>>(h: &H, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for n in [1, 7, 33] {
        let a = random_spd(n, &mut rng);
        let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut chol = PackedCholesky::new(a.clone());
        chol.factorize().unwrap();
        let mut x = b.clone();
        chol.solve(&mut x).unwrap();

        let r = h.residual(&a, &x, &b);
        assert_eq!(r.len(), n);
        assert!(h.norm2(&r) / h.norm2(&b) < 1e-9, "n = {}", n);
    }
}

#[test]
fn sequential_residual_of_solution() {
    check_solution(&SeqHelper, 1);
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use spdpack::ParHelper;

    #[test]
    fn parallel_residual_of_solution() {
        check_solution(&ParHelper::new(), 1);
        check_solution(&ParHelper::with_threads(2).unwrap(), 2);
    }

    #[test]
    fn parallel_agrees_with_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let n = 64;
        let a = random_spd(n, &mut rng);
        let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let par = ParHelper::with_threads(4).unwrap();
        assert_eq!(par.num_threads(), 4);

        let rs = SeqHelper.residual(&a, &x, &b);
        let rp = par.residual(&a, &x, &b);
        for (s, p) in rs.iter().zip(&rp) {
            assert!((s - p).abs() < 1e-12);
        }
        let ns = SeqHelper.norm2(&rs);
        let np = par.norm2(&rp);
        assert!((ns - np).abs() < 1e-12 * ns.max(1.0));
    }
}
