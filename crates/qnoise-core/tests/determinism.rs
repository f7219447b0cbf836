use qnoise_core::NoiseGenerator;

#[test]
fn same_seed_same_draws() {
    let mut a = NoiseGenerator::new(42);
    let mut b = NoiseGenerator::new(42);

    let xs: Vec<f64> = (0..1000).map(|_| a.standard_normal()).collect();
    let ys: Vec<f64> = (0..1000).map(|_| b.standard_normal()).collect();

    assert_eq!(xs, ys);
}

#[test]
fn different_seeds_diverge() {
    let mut a = NoiseGenerator::new(42);
    let mut b = NoiseGenerator::new(43);

    let xs: Vec<f64> = (0..64).map(|_| a.standard_normal()).collect();
    let ys: Vec<f64> = (0..64).map(|_| b.standard_normal()).collect();

    assert_ne!(xs, ys);
}

#[test]
fn standard_normal_moments() {
    let n = 100_000;
    let mut rng = NoiseGenerator::new(7);
    let draws: Vec<f64> = (0..n).map(|_| rng.standard_normal()).collect();

    let mean = draws.iter().sum::<f64>() / n as f64;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    println!("Sampler moments: mean = {:.5}, var = {:.5}", mean, var);

    // Standard error of the mean is ~0.003, of the variance ~0.0045.
    assert!(mean.abs() < 0.02, "Mean {} too far from 0", mean);
    assert!((var - 1.0).abs() < 0.03, "Variance {} too far from 1", var);
}

#[test]
fn wiener_increment_scaling() {
    let n = 100_000;
    let dt: f64 = 0.25;
    let mut rng = NoiseGenerator::new(11);
    let draws: Vec<f64> = (0..n).map(|_| rng.generate_dw(dt.sqrt())).collect();

    let mean = draws.iter().sum::<f64>() / n as f64;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    // dW ~ N(0, dt)
    assert!(mean.abs() < 0.01, "Increment mean {} too far from 0", mean);
    assert!((var - dt).abs() < 0.01, "Increment variance {} too far from dt", var);
}
