use qnoise_models::QGeneralizedNoise;
use qnoise_sampler::{Generator, QNoiseSpec};
use serde_json::json;
use std::fs::File;
use std::io::Write;

fn mean(series: &[f64]) -> f64 {
    series.iter().sum::<f64>() / series.len() as f64
}

fn variance(series: &[f64]) -> f64 {
    let m = mean(series);
    series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (series.len() - 1) as f64
}

#[test]
fn normalized_variance_is_unit_across_q() {
    let tau = 0.5;
    let dt = 0.005;
    let n = 400_000;

    let mut observed = Vec::new();
    for (i, &q) in [0.9, 1.0, 1.2].iter().enumerate() {
        let spec = QNoiseSpec::new(tau, q).with_samples(n).with_step(dt);
        let series = Generator::new(42 + i as u64).q_noise(&spec).unwrap();

        assert_eq!(series.len(), n);
        assert!(series.iter().all(|x| x.is_finite()));

        let sample_mean = mean(&series);
        let sample_var = variance(&series);

        println!(
            "q = {}: mean = {:.4}, var = {:.4} (expected 1)",
            q, sample_mean, sample_var
        );

        // n*dt spans 4000 correlation times (effective sample size
        // ~2000), so the variance estimate is good to a few percent.
        assert!(sample_mean.abs() < 0.15, "q = {}: mean {} too far from 0", q, sample_mean);
        assert!(
            (sample_var - 1.0).abs() < 0.25,
            "q = {}: variance {} too far from 1",
            q,
            sample_var
        );

        observed.push(json!({ "q": q, "mean": sample_mean, "var": sample_var }));
    }

    let results = json!({
        "tau": tau,
        "dt": dt,
        "n": n,
        "series": observed,
    });

    std::fs::create_dir_all("runs").ok();
    let mut file = File::create("runs/qnoise_moments.json").unwrap();
    write!(file, "{}", serde_json::to_string(&results).unwrap()).unwrap();
}

#[test]
fn sub_gaussian_noise_stays_within_support() {
    let tau = 1.0;
    let q = 0.75;
    let dt = 0.001;
    let n = 200_000;

    let spec = QNoiseSpec::new(tau, q).with_samples(n).with_step(dt);
    let series = Generator::new(7).q_noise(&spec).unwrap();

    let bound = QGeneralizedNoise::normalized(tau, q)
        .support_bound()
        .unwrap();
    let peak = series.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));

    println!("q = {}: |x| peak = {:.4}, support bound = {:.4}", q, peak, bound);

    assert!(series.iter().all(|x| x.is_finite()));
    assert!(
        peak < bound,
        "Excursion {} beyond support bound {}",
        peak,
        bound
    );
}

#[test]
fn heavy_tailed_noise_stays_finite() {
    // q = 2 has a divergent stationary variance; the raw path must still
    // produce finite samples.
    let spec = QNoiseSpec::new(1.0, 2.0)
        .with_samples(50_000)
        .without_normalization();

    let series = Generator::new(8).q_noise(&spec).unwrap();

    assert_eq!(series.len(), 50_000);
    assert!(series.iter().all(|x| x.is_finite()));
}

#[test]
fn zero_tau_is_treated_as_one_step() {
    // tau = 0 is substituted with dt before integration, so it must
    // behave exactly like an explicit tau = dt request.
    let degenerate = Generator::new(3)
        .q_noise(&QNoiseSpec::new(0.0, 1.2).with_samples(256))
        .unwrap();
    let explicit = Generator::new(3)
        .q_noise(&QNoiseSpec::new(0.01, 1.2).with_samples(256))
        .unwrap();

    assert_eq!(degenerate, explicit);
}
