use crate::dispatcher::DispatcherProfile;
use crate::flight::Flight;
use crate::registry::FlightRegistry;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn dispatcher() -> DispatcherProfile {
    DispatcherProfile {
        name: "Alex Morgan".to_string(),
        employee_id: "ATC-1027".to_string(),
        shift: "Morning".to_string(),
        age: 34,
        contact: "+1 555 0100".to_string(),
        email: "alex.morgan@tower.example".to_string(),
    }
}

pub fn registry() -> FlightRegistry {
    FlightRegistry::new(dispatcher())
}

/// The three-flight board used across the registry tests.
pub fn scenario() -> FlightRegistry {
    let mut registry = registry();
    registry.add_flight(Flight::departing("AA100", "Acme", "G1", "Paris"));
    registry.add_flight(Flight::arriving("BA200", "Brit", "G2", "London"));
    registry.add_flight(Flight::stalled("CC300", "Cargo", "G3", "Weather", "Taxiway"));
    registry
}

pub fn numbers(registry: &FlightRegistry) -> Vec<String> {
    registry.list_all().iter().map(|s| s.number.to_string()).collect()
}

#[derive(Debug, Clone)]
pub enum Op {
    Add(Flight),
    Remove(String),
}

pub fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("FL_1".to_string()),
        Just("FL_2".to_string()),
        Just("FL_3".to_string()),
        Just("FL_4".to_string()),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (arb_number(), 0..3u8, "[A-Z]{2}", "G[0-9]{1,2}").prop_map(|(number, kind, airline, gate)| {
        match kind {
            0 => Flight::departing(number, airline, gate, "Paris"),
            1 => Flight::arriving(number, airline, gate, "London"),
            _ => Flight::stalled(number, airline, gate, "Weather", "Taxiway"),
        }
    })
}

pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_flight().prop_map(Op::Add),
        1 => arb_number().prop_map(Op::Remove),
    ]
}
