#![allow(missing_docs)]

use chrono::NaiveDate;
use tempfile::TempDir;

use mle_console::{
    CheckpointPolicy, ColorMode, Reporter, ReporterConfig, RunDescriptor, SeedId, StoragePaths,
    Tick, PLACEHOLDER,
};

const RUN_TOML: &str = r#"
experiment_dir = "experiments/"
config_fname = "configs/base_config.yaml"
time_to_track = ["time", "time_elapsed", "num_updates", "num_epochs"]
what_to_track = ["train_loss", "test_loss"]
model_type = "torch"
seed_id = 1
use_tboard = false
reload = false
print_every_k_updates = 10

[checkpoint]
every_k = 5
top_k = 2
top_k_metric_name = "test_loss"
top_k_minimize = true
time_to_track = "num_updates"
"#;

fn reporter(width: usize) -> Reporter<Vec<u8>> {
    let config = ReporterConfig {
        width,
        color: ColorMode::Never,
    };
    Reporter::new(Vec::new(), &config)
}

fn output(reporter: Reporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

/// A logger's full session: banner, startup summary, a few ticks with the
/// header on the first one only, and a storage summary after saving.
#[test]
fn test_logger_session_end_to_end() {
    let dir = TempDir::new().unwrap();
    let run_path = dir.path().join("run.toml");
    std::fs::write(&run_path, RUN_TOML).unwrap();
    let run = RunDescriptor::from_path(&run_path).unwrap();

    let mut reporter = reporter(100);
    let now = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    reporter.print_welcome_at(now).unwrap();
    reporter.print_startup(&run).unwrap();

    let time_names: Vec<&str> = run.displayed_time_vars();
    for step in 1..=3_i64 {
        #[allow(clippy::cast_precision_loss)]
        let loss = 1.0 / step as f64;
        let tick = Tick::new()
            .with_time("num_updates", step * 10)
            .with_time("num_epochs", step)
            .with_stat("train_loss", loss)
            .with_stat("test_loss", loss + 0.000_49);
        reporter
            .print_update(time_names.as_slice(), run.what_to_track.as_slice(), &tick, step == 1)
            .unwrap();
    }

    let paths = StoragePaths {
        every_k_model: Some("experiments/models/every_k/every_k_5.pt".into()),
        ..StoragePaths::default()
    };
    reporter.print_storage(&paths, false).unwrap();

    let out = output(reporter);

    assert!(out.contains("02/01/24 03:04:05"));
    assert!(out.contains("📄 Config: configs/base_config.yaml"));
    assert!(out.contains("⌚ Time: num_updates, num_epochs"));
    assert!(out.contains("Every k-th ckpt: 5"));
    assert!(out.contains("Top k ckpt: 2"));

    // header printed once
    assert_eq!(out.matches("📉 train_loss").count(), 1);
    assert!(out.contains("0.333"));
    assert!(out.contains("0.334"));
    assert!(out.contains("📩 - Every-K"));
    assert!(out.contains("every_k_5.pt"));
}

#[test]
fn test_startup_checkpoint_row_variants() {
    let base = RunDescriptor {
        time_to_track: vec!["num_updates".to_string()],
        what_to_track: vec!["loss".to_string()],
        seed_id: SeedId::Number(0),
        ..RunDescriptor::new("experiments/")
    };
    let render = |policy: CheckpointPolicy| {
        let mut reporter = reporter(100);
        let run = RunDescriptor {
            checkpoint: policy,
            ..base.clone()
        };
        reporter.print_startup(&run).unwrap();
        output(reporter)
    };

    let neither = render(CheckpointPolicy::default());
    assert!(!neither.contains("ckpt"));

    let every_k = render(CheckpointPolicy {
        every_k: Some(10),
        ..CheckpointPolicy::default()
    });
    assert!(every_k.contains("Every k-th ckpt: 10"));
    assert!(!every_k.contains("Top k ckpt"));

    let top_k = render(CheckpointPolicy {
        top_k: Some(10),
        ..CheckpointPolicy::default()
    });
    assert!(top_k.contains("Top k ckpt: 10"));
    assert!(!top_k.contains("Every k-th ckpt"));

    let both = render(CheckpointPolicy {
        every_k: Some(10),
        top_k: Some(3),
        ..CheckpointPolicy::default()
    });
    let row = both.lines().find(|l| l.contains("Every k-th ckpt")).unwrap();
    assert!(row.contains("Top k ckpt: 3"));

    // the fourth grid row adds three lines (a bordered panel) to the output
    assert_eq!(every_k.lines().count(), neither.lines().count() + 3);
    assert_eq!(both.lines().count(), every_k.lines().count());
}

#[test]
fn test_update_row_with_missing_values() {
    let mut reporter = reporter(100);
    let tick = Tick::new().with_stat("acc", 0.912_345);
    reporter
        .print_update(&["step", "epoch"], &["loss", "acc"], &tick, false)
        .unwrap();
    let out = output(reporter);

    let row = out.lines().find(|l| !l.trim().is_empty()).unwrap();
    assert_eq!(row.matches(PLACEHOLDER).count(), 3);
    assert!(row.contains("0.912"));
    assert!(row.find(PLACEHOLDER).unwrap() < row.find("0.912").unwrap());
}

#[test]
fn test_storage_silent_when_nothing_qualifies() {
    let mut reporter = reporter(100);
    reporter
        .print_storage(&StoragePaths::default(), false)
        .unwrap();
    let gated = StoragePaths {
        init_model: Some("models/init.pt".into()),
        final_model: Some("models/final.pt".into()),
        ..StoragePaths::default()
    };
    reporter.print_storage(&gated, false).unwrap();
    assert!(output(reporter).is_empty());
}

#[test]
fn test_narrow_console_keeps_panels_within_width() {
    let mut reporter = reporter(60);
    let run = RunDescriptor {
        experiment_dir: "experiments/a/very/long/path/that/cannot/fit/in/one/cell".to_string(),
        what_to_track: (0..8).map(|i| format!("stat_{i}")).collect(),
        ..RunDescriptor::new("")
    };
    reporter.print_startup(&run).unwrap();
    let out = output(reporter);

    assert!(out
        .lines()
        .all(|l| mle_console::console::text_width(l) == 60));
    assert!(out.contains("stat_7"));
}

#[test]
fn test_wide_symbols_in_experiment_dir_keep_border_aligned() {
    let mut reporter = reporter(100);
    reporter
        .print_startup(&RunDescriptor::new("runs/⚡fast✅"))
        .unwrap();
    let out = output(reporter);

    assert!(out.contains("runs/⚡fast✅"));
    assert!(out
        .lines()
        .all(|l| mle_console::console::text_width(l) == 100));
}

#[test]
fn test_color_always_styles_output_written_to_a_buffer() {
    let config = ReporterConfig {
        width: 100,
        color: ColorMode::Always,
    };
    let mut reporter = Reporter::new(Vec::new(), &config);
    let tick = Tick::new().with_time("step", 1_i64).with_stat("loss", 0.5);
    reporter
        .print_update(&["step"], &["loss"], &tick, true)
        .unwrap();
    let out = output(reporter);

    // red time header, blue stat header
    assert!(out.contains("\x1b[31mstep\x1b[0m"));
    assert!(out.contains("\x1b[34mloss\x1b[0m"));
}
