/***
# Training Loop Demo

* Simulates a classifier training run and reports on it:
  - Loss, learning rate and gradient norm series
  - Train/validation accuracy streams
  - Periodic reports with sparklines
  - Snapshot files and a telemetry CSV under ./runs
***/

use trendlog::{
    builders::CollectorConfigBuilder,
    collector::MetricSeriesCollector,
};
use ndarray::Array2;
use rand::Rng;
use std::time::Duration;
use tracing::info;

const CLASSES: usize = 4;
const BATCH: usize = 32;

// Logits that get more confident in the right class as training progresses
fn simulated_batch(step: usize, rng: &mut impl Rng) -> (Array2<f32>, Array2<f32>) {
    let skill = (step as f32 / 1500.0).min(0.95);
    let mut logits = Array2::<f32>::zeros((BATCH, CLASSES));
    let mut onehot = Array2::<f32>::zeros((BATCH, CLASSES));

    for row in 0..BATCH {
        let label = rng.gen_range(0..CLASSES);
        onehot[[row, label]] = 1.0;
        for class in 0..CLASSES {
            logits[[row, class]] = rng.gen_range(-1.0..1.0);
        }
        if rng.gen::<f32>() < skill {
            logits[[row, label]] += 2.0;
        }
    }

    (logits, onehot)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let epoch_length = 2000;
    let config = CollectorConfigBuilder::new()
        .title("Simulated classifier")
        .epoch_length(epoch_length)
        .remote_telemetry(true)
        .print_interval(Duration::from_millis(500))
        .build()
        .expect("valid configuration");
    let mut collector = MetricSeriesCollector::new(config);
    let mut rng = rand::thread_rng();

    for step in 0..epoch_length {
        let loss = 2.0 * (-(step as f32) / 600.0).exp() + rng.gen_range(0.0..0.1);
        collector.collect("train/loss", loss);
        collector.collect("train/learning_rate", 1e-3 * 0.999_f32.powi(step as i32));
        collector.collect("train/grad_norm", rng.gen_range(0.5f32..1.5) / (1.0 + step as f32 / 500.0));

        let (logits, onehot) = simulated_batch(step, &mut rng);
        collector
            .collect_prediction("train", logits.view(), onehot.view())
            .expect("matching shapes");

        if step % 10 == 0 {
            let (logits, onehot) = simulated_batch(step, &mut rng);
            collector
                .collect_prediction("validation", logits.view(), onehot.view())
                .expect("matching shapes");
        }

        collector.print_periodically();
        std::thread::sleep(Duration::from_millis(1));
    }

    println!("{}", collector.format_all());

    match collector.write_to_file(".") {
        Ok(path) => info!(path = %path.display(), "saved series"),
        Err(err) => eprintln!("Could not save series: {}", err),
    }
}
