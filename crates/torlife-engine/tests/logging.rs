//! Construction and generation log records, captured with an in-process
//! `log::Log` implementation.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use torlife_engine::{Grid, GridConfig};

struct Capture {
    records: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Run `f` and return the debug records it emitted. Tests in this file
/// share one global logger, so records are serialised through a lock.
fn captured(f: impl FnOnce()) -> Vec<String> {
    static SERIAL: Mutex<()> = Mutex::new(());
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Debug);
    });
    CAPTURE.records.lock().unwrap().clear();
    f();
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

// ── Construction ────────────────────────────────────────────────

#[test]
fn injected_rng_construction_logs_size_and_ratio() {
    let records = captured(|| {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Grid::random(12, 0.25, &mut rng).unwrap();
    });
    assert!(
        records.iter().any(|r| r == "seeding 12x12 grid with ratio 0.25"),
        "records: {records:?}"
    );
}

#[test]
fn config_construction_logs_seed_and_size() {
    let records = captured(|| {
        Grid::from_config(GridConfig::random(8).with_seed(77)).unwrap();
    });
    assert!(records.iter().any(|r| r == "random grid seed 77"), "records: {records:?}");
    assert!(
        records.iter().any(|r| r.starts_with("seeding 8x8 grid")),
        "records: {records:?}"
    );
}

#[test]
fn explicit_construction_logs_size() {
    let records = captured(|| {
        Grid::from_state(&[[false; 3]; 3]).unwrap();
    });
    assert!(
        records.iter().any(|r| r == "loading 3x3 grid from explicit state"),
        "records: {records:?}"
    );
}

// ── Generations ─────────────────────────────────────────────────

#[test]
fn each_generation_logs_population() {
    let records = captured(|| {
        let mut grid = Grid::from_state(&[[true, true], [true, true]]).unwrap();
        grid.advance_generations(2);
    });
    let generations: Vec<&String> = records
        .iter()
        .filter(|r| r.starts_with("generation "))
        .collect();
    assert_eq!(generations.len(), 2, "records: {records:?}");
    assert!(generations[0].starts_with("generation 1 population"));
}
