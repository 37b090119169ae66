use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Arc;

pub type FlightNumber = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightKind {
    Departing,
    Arriving,
    Stalled,
}

impl FlightKind {
    pub fn label(self) -> &'static str {
        match self {
            FlightKind::Departing => "Departure",
            FlightKind::Arriving => "Arrival",
            FlightKind::Stalled => "Stalled",
        }
    }
}

impl fmt::Display for FlightKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "departing" | "departure" => Ok(FlightKind::Departing),
            "a" | "arriving" | "arrival" => Ok(FlightKind::Arriving),
            "s" | "stalled" => Ok(FlightKind::Stalled),
            other => Err(format!("unknown flight kind: {other}")),
        }
    }
}

/// Variant-specific payload of a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    Departing { destination: String },
    Arriving { origin: String },
    Stalled { reason: String, location: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub number: FlightNumber,
    pub airline: String,
    pub gate: String,
    pub leg: Leg,
}

impl Flight {
    pub fn departing(
        number: impl Into<FlightNumber>,
        airline: impl Into<String>,
        gate: impl Into<String>,
        destination: impl Into<String>,
    ) -> Flight {
        Flight {
            number: number.into(),
            airline: airline.into(),
            gate: gate.into(),
            leg: Leg::Departing {
                destination: destination.into(),
            },
        }
    }

    pub fn arriving(
        number: impl Into<FlightNumber>,
        airline: impl Into<String>,
        gate: impl Into<String>,
        origin: impl Into<String>,
    ) -> Flight {
        Flight {
            number: number.into(),
            airline: airline.into(),
            gate: gate.into(),
            leg: Leg::Arriving {
                origin: origin.into(),
            },
        }
    }

    pub fn stalled(
        number: impl Into<FlightNumber>,
        airline: impl Into<String>,
        gate: impl Into<String>,
        reason: impl Into<String>,
        location: impl Into<String>,
    ) -> Flight {
        Flight {
            number: number.into(),
            airline: airline.into(),
            gate: gate.into(),
            leg: Leg::Stalled {
                reason: reason.into(),
                location: location.into(),
            },
        }
    }

    pub fn kind(&self) -> FlightKind {
        match self.leg {
            Leg::Departing { .. } => FlightKind::Departing,
            Leg::Arriving { .. } => FlightKind::Arriving,
            Leg::Stalled { .. } => FlightKind::Stalled,
        }
    }

    pub fn describe(&self) -> FlightStatus {
        let details = match &self.leg {
            Leg::Departing { destination } => vec![("Destination", destination.clone())],
            Leg::Arriving { origin } => vec![("Origin", origin.clone())],
            Leg::Stalled { reason, location } => {
                vec![("Reason", reason.clone()), ("Location", location.clone())]
            }
        };
        FlightStatus {
            kind: self.kind(),
            number: self.number.clone(),
            airline: self.airline.clone(),
            gate: self.gate.clone(),
            details,
        }
    }
}

/// Snapshot of a flight for the caller to render.
///
/// `details` holds the variant fields as labelled pairs, in the order the
/// desk has always shown them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStatus {
    pub kind: FlightKind,
    pub number: FlightNumber,
    pub airline: String,
    pub gate: String,
    pub details: Vec<(&'static str, String)>,
}

#[cfg(test)]
impl FlightStatus {
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} | Flight: {:<8} | Airline: {:<10} | Gate: {:<5}",
            self.kind.label(),
            self.number,
            self.airline,
            self.gate
        )?;
        for (label, value) in &self.details {
            write!(f, " | {label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_leg() {
        assert_eq!(FlightKind::Departing, Flight::departing("AA100", "Acme", "G1", "Paris").kind());
        assert_eq!(FlightKind::Arriving, Flight::arriving("BA200", "Brit", "G2", "London").kind());
        assert_eq!(
            FlightKind::Stalled,
            Flight::stalled("CC300", "Cargo", "G3", "Weather", "Taxiway").kind()
        );
    }

    #[test]
    fn test_describe_stalled_keeps_field_order() {
        let status = Flight::stalled("CC300", "Cargo", "G3", "Weather", "Taxiway").describe();

        assert_eq!(FlightKind::Stalled, status.kind);
        assert_eq!("CC300", status.number.as_ref());
        assert_eq!("Cargo", status.airline);
        assert_eq!("G3", status.gate);
        assert_eq!(
            vec![("Reason", "Weather".to_string()), ("Location", "Taxiway".to_string())],
            status.details
        );
        assert_eq!(Some("Taxiway"), status.detail("Location"));
        assert_eq!(None, status.detail("Origin"));
    }

    #[test]
    fn test_status_line_matches_desk_format() {
        let line = Flight::departing("AA100", "Acme", "G1", "Paris").describe().to_string();
        assert_eq!(
            "Departure  | Flight: AA100    | Airline: Acme       | Gate: G1    | Destination: Paris",
            line
        );

        let line = Flight::stalled("CC300", "Cargo", "G3", "Weather", "Taxiway")
            .describe()
            .to_string();
        assert!(line.ends_with("| Reason: Weather | Location: Taxiway"));
    }

    #[test]
    fn test_kind_parses_short_and_long_names() {
        assert_eq!(Ok(FlightKind::Departing), "d".parse::<FlightKind>());
        assert_eq!(Ok(FlightKind::Arriving), "Arriving".parse::<FlightKind>());
        assert_eq!(Ok(FlightKind::Stalled), "s".parse::<FlightKind>());
        assert!("x".parse::<FlightKind>().is_err());
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let status = Flight::arriving("", "", "", "").describe();
        assert_eq!("", status.number.as_ref());
        assert_eq!(Some(""), status.detail("Origin"));
    }
}
