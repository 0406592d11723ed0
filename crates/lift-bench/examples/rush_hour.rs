//! Morning rush: everyone boards on the ground floor and rides up.
//!
//! Run with `RUST_LOG=debug` to watch dispatch decisions.

use lift_core::{Direction, Floor};
use lift_engine::{Building, BuildingConfig, PolicyKind};

fn main() {
    env_logger::init();

    let config = BuildingConfig::new(12, 3, 6).with_policy(PolicyKind::NearestCar);
    let mut building = Building::new(config).unwrap();

    for wave in 0..4u32 {
        match building.request_car(Floor(0), Direction::Up) {
            Ok(car) => {
                for floor in [3 + wave, 7 + wave, 11 - wave] {
                    building.press_destination(car, Floor(floor)).unwrap();
                }
                log::info!("wave {wave}: car {car} boarding");
            }
            Err(e) => log::info!("wave {wave}: {e}"),
        }
        for _ in 0..3 {
            building.tick();
        }
        let states: Vec<String> = building.snapshots().iter().map(|s| s.to_string()).collect();
        println!("after wave {wave}: {}", states.join("  "));
    }

    while building.cars().iter().any(|c| !c.is_idle()) {
        building.tick();
    }
    let m = building.metrics();
    println!(
        "done at tick {}: {} calls, {} floors travelled, {} passengers delivered",
        building.current_tick(),
        m.calls_accepted,
        m.floors_moved,
        m.alighted
    );
}
