use qnoise_models::OrnsteinUhlenbeck;
use qnoise_sampler::{Generator, OuSpec};

fn main() {
    let tau = 2.0;
    let dt = 0.01;
    let n = 200_000;

    println!("Ornstein-Uhlenbeck series, tau = {}, dt = {}, {} samples", tau, dt, n);

    let spec = OuSpec::new(tau).with_samples(n).with_step(dt);
    let series = Generator::new(42).ornstein_uhlenbeck(&spec).expect("valid spec");

    let mean = series.iter().sum::<f64>() / n as f64;
    let var = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    let ou = OrnsteinUhlenbeck::new(tau);
    println!(
        "Sample mean = {:+.4}, sample var = {:.4} (stationary {:.1})",
        mean,
        var,
        ou.stationary_variance()
    );
    println!();
    println!("Autocorrelation decay:");

    for lag in [1usize, 10, 50, 100, 200] {
        let denom: f64 = series.iter().map(|x| (x - mean).powi(2)).sum();
        let num: f64 = series
            .windows(lag + 1)
            .map(|w| (w[0] - mean) * (w[lag] - mean))
            .sum();
        let expected = ou.autocorrelation(lag as f64 * dt);

        println!(
            "lag {:>4} (t = {:.2}): observed {:.4}, exp(-t/tau) = {:.4}",
            lag,
            lag as f64 * dt,
            num / denom,
            expected
        );
    }
}
