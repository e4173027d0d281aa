use ramsim_core::notification::{Collect, Discard, Level};
use ramsim_core::{MemoryState, Notification, RamSimulator, SimulatorConfig};

fn seeded(size: usize, seed: u64) -> RamSimulator {
    RamSimulator::new(
        SimulatorConfig {
            size,
            seed: Some(seed),
        },
        Discard,
    )
    .unwrap()
}

#[test]
fn eight_writes_fill_the_default_memory() {
    let notifications = Collect::new();
    let mut simulator = RamSimulator::new(SimulatorConfig::default(), notifications.clone()).unwrap();

    for value in 1..=8 {
        simulator.set_value_input(&value.to_string());
        assert!(simulator.assign().is_some(), "write of {value} rejected");
    }

    assert_eq!(MemoryState::Full, simulator.state());
    let mut values: Vec<i64> = simulator
        .table()
        .cells()
        .iter()
        .map(|cell| cell.value.unwrap())
        .collect();
    values.sort();
    assert_eq!((1..=8).collect::<Vec<i64>>(), values);

    let before = simulator.table().clone();
    simulator.set_value_input("9");
    assert_eq!(None, simulator.assign());
    assert_eq!(&before, simulator.table());

    let warnings: Vec<Notification> = notifications
        .take()
        .into_iter()
        .filter(|notification| notification.level == Level::Warning)
        .collect();
    assert_eq!(vec![Notification::memory_full()], warnings);
}

#[test]
fn read_scenarios() {
    let notifications = Collect::new();
    let mut simulator = RamSimulator::new(SimulatorConfig::default(), notifications.clone()).unwrap();

    assert!(simulator.read("3").is_ok());
    assert!(simulator.read("99").is_err());

    let notifications = notifications.take();
    assert_eq!("No value stored at memory address 3", notifications[0].message);
    assert_eq!(Notification::invalid_address(), notifications[1]);
}

#[test]
fn full_until_reset() {
    let mut simulator = seeded(3, 9);
    for value in 0..3 {
        simulator.write(&value.to_string());
    }
    assert!(simulator.is_full());

    for attempt in 0..5 {
        simulator.write(&attempt.to_string());
        assert!(simulator.is_full());
    }

    simulator.reset();
    assert_eq!(MemoryState::Available, simulator.state());
    assert!(simulator.table().is_empty());
    assert!(simulator.pending_target().is_some());
}

#[test]
fn view_reflects_state() {
    let mut simulator = seeded(2, 5);
    let view = simulator.view();
    assert!(view.assign_enabled);
    assert!(view.rows.iter().all(|row| row.value == "0x00"));

    simulator.write("10");
    simulator.write("11");
    let view = simulator.view();
    assert!(view.full);
    assert!(!view.assign_enabled);
    assert!(view.banner.is_some());
    let mut values: Vec<&str> = view.rows.iter().map(|row| row.value.as_str()).collect();
    values.sort();
    assert_eq!(vec!["0xa", "0xb"], values);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fresh_table_is_empty(size in 1usize..64) {
            let simulator = seeded(size, 0);
            let cells = simulator.table().cells();
            prop_assert_eq!(cells.len(), size);
            for (i, cell) in cells.iter().enumerate() {
                prop_assert_eq!(cell.address, i);
                prop_assert!(cell.value.is_none());
            }
        }

        #[test]
        fn write_changes_exactly_one_empty_cell(
            size in 1usize..32,
            seed in any::<u64>(),
            values in prop::collection::vec(any::<i64>(), 0..48),
        ) {
            let mut simulator = seeded(size, seed);
            for value in values {
                let before = simulator.table().clone();
                let target = simulator.pending_target();
                let written = simulator.write(&value.to_string());
                prop_assert_eq!(written, target);

                let changed: Vec<usize> = before
                    .cells()
                    .iter()
                    .zip(simulator.table().cells())
                    .filter(|(old, new)| old != new)
                    .map(|(old, _)| old.address)
                    .collect();
                match written {
                    Some(address) => {
                        prop_assert_eq!(changed, vec![address]);
                        prop_assert!(before.cells()[address].value.is_none());
                        prop_assert_eq!(simulator.table().read(address), Some(value));
                    }
                    None => {
                        prop_assert!(before.is_full());
                        prop_assert!(changed.is_empty());
                    }
                }
            }
        }

        #[test]
        fn target_is_always_empty(size in 1usize..32, seed in any::<u64>(), writes in 0usize..40) {
            let mut simulator = seeded(size, seed);
            for value in 0..writes {
                match simulator.pending_target() {
                    Some(address) => prop_assert!(simulator.table().cells()[address].value.is_none()),
                    None => prop_assert!(simulator.is_full()),
                }
                simulator.write(&value.to_string());
            }
        }

        #[test]
        fn reset_always_empties(size in 1usize..32, seed in any::<u64>(), writes in 0usize..40, input in ".*") {
            let mut simulator = seeded(size, seed);
            for value in 0..writes {
                simulator.write(&value.to_string());
            }
            simulator.set_value_input(&input);
            simulator.set_address_input(&input);
            simulator.reset();
            prop_assert!(simulator.table().is_empty());
            prop_assert_eq!(simulator.value_input(), "");
            prop_assert_eq!(simulator.address_input(), "");
        }
    }
}
