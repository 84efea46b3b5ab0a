//! Demo roster: an April 2022 departure grid covered by a twelve-driver
//! roster. Validates the seed data, runs the assignment pass, and prints
//! the resulting schedule and workload totals.
//!
//! Run with `RUST_LOG=debug` to see per-run assignment decisions.

use chrono::{TimeZone, Utc};

use crew_roster::engine::{AssignmentEngine, RosterKpi};
use crew_roster::models::{hours_ms, minutes_ms, Driver, Train, TrainCatalog, TrainRun};
use crew_roster::report;
use crew_roster::validation::validate_input;

/// Epoch ms for an April 2022 timestamp.
fn april(day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(2022, 4, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
        .timestamp_millis()
}

fn run(id: u32, train: u32, start_ms: i64, outbound_ms: i64, layover_ms: i64, return_ms: i64) -> TrainRun {
    TrainRun::new(id, train, start_ms)
        .with_outbound_ms(outbound_ms)
        .with_layover_ms(layover_ms)
        .with_return_ms(return_ms)
}

fn catalog() -> TrainCatalog {
    TrainCatalog::from_trains(vec![
        Train::new(120, "Moscow"),
        Train::new(92, "St Petersburg"),
        Train::new(32, "Krasnodar"),
        Train::new(14, "Rostov-on-Don"),
        Train::new(51, "Voronezh"),
        Train::new(96, "Tuapse"),
        Train::new(72, "Stavropol"),
        Train::new(80, "Tyumen"),
        Train::new(99, "Nizhny Novgorod"),
        Train::new(103, "Novorossiysk"),
        Train::new(11, "Kazan"),
        Train::new(125, "Kirov"),
    ])
}

fn departure_grid() -> Vec<TrainRun> {
    vec![
        run(1, 120, april(1, 6, 30), hours_ms(8) + minutes_ms(25), hours_ms(6), hours_ms(8)),
        run(2, 14, april(1, 12, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(3, 92, april(1, 16, 30), hours_ms(5), hours_ms(5), hours_ms(5)),
        run(4, 32, april(2, 3, 30), hours_ms(6), hours_ms(8), hours_ms(6)),
        run(5, 51, april(2, 6, 30), hours_ms(7), hours_ms(4), hours_ms(6)),
        run(6, 96, april(2, 22, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(7, 72, april(3, 2, 30), hours_ms(7), hours_ms(4), hours_ms(7)),
        run(8, 120, april(3, 6, 30), hours_ms(8), hours_ms(4), hours_ms(9)),
        run(9, 99, april(3, 8, 30), hours_ms(13), hours_ms(4), hours_ms(13) + minutes_ms(23)),
        run(10, 80, april(3, 20, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(11, 103, april(4, 6, 30), hours_ms(8), hours_ms(6), hours_ms(8)),
        run(12, 120, april(5, 6, 30), hours_ms(15), hours_ms(4), hours_ms(15)),
        run(13, 11, april(5, 3, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(14, 125, april(6, 13, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(15, 51, april(7, 12, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(16, 14, april(8, 14, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(17, 72, april(8, 10, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(18, 99, april(8, 16, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(19, 32, april(9, 6, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
        run(20, 120, april(9, 6, 30), hours_ms(8), hours_ms(4), hours_ms(8)),
    ]
}

fn roster() -> Vec<Driver> {
    vec![
        Driver::new(1, "Ivan").with_qualifications(vec![120, 92, 14]),
        Driver::new(2, "Oleg").with_qualifications(vec![32, 14, 51]),
        Driver::new(3, "Vasily").with_qualifications(vec![51, 72, 80]),
        Driver::new(4, "Nikolai").with_qualifications(vec![96, 72]),
        Driver::new(5, "Semyon").with_qualifications(vec![80, 99]),
        Driver::new(6, "Innokenty").with_qualifications(vec![103, 11, 125, 96]),
        Driver::new(7, "Dmitry").with_qualifications(vec![72, 51, 92]),
        Driver::new(8, "Vyacheslav").with_qualifications(vec![92, 96]),
        Driver::new(9, "Alexander").with_qualifications(vec![120, 92]),
        Driver::new(10, "Andrei").with_qualifications(vec![72, 32, 11]),
        Driver::new(11, "Vladimir").with_qualifications(vec![103, 14, 99]),
        Driver::new(12, "Pavel").with_qualifications(vec![125, 14]),
    ]
}

fn main() {
    env_logger::init();

    let catalog = catalog();
    let mut runs = departure_grid();
    let mut drivers = roster();

    if let Err(errors) = validate_input(&runs, &drivers, &catalog) {
        for error in &errors {
            eprintln!("invalid input: {}", error.message);
        }
        std::process::exit(1);
    }

    let engine = AssignmentEngine::new();
    engine.assign(&mut runs, &mut drivers);

    for line in report::schedule_lines(&runs, &catalog, &drivers) {
        println!("{line}");
    }

    let kpi = RosterKpi::calculate(&runs, &drivers);
    println!();
    println!(
        "Covered {} of {} runs ({:.0}%).",
        kpi.assigned_runs,
        kpi.total_runs,
        kpi.coverage * 100.0
    );
    println!("Accumulated workload:");
    for line in report::workload_lines(&drivers) {
        println!("  {line}");
    }
}
