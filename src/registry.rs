use crate::dispatcher::DispatcherProfile;
use crate::flight::FlightKind::{Arriving, Departing, Stalled};
use crate::flight::{Flight, FlightStatus};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Tabled)]
pub struct Summary {
    #[tabled(rename = "Departing")]
    pub departing: usize,
    #[tabled(rename = "Arriving")]
    pub arriving: usize,
    #[tabled(rename = "Stalled")]
    pub stalled: usize,
    #[tabled(rename = "Total")]
    pub total: usize,
}

/// Flights on the board, in the order they were registered.
///
/// Flight numbers are not required to be unique. Lookups and removals act
/// on the earliest registered match.
pub struct FlightRegistry {
    dispatcher: DispatcherProfile,
    flights: Vec<Flight>,
}

impl FlightRegistry {
    pub fn new(dispatcher: DispatcherProfile) -> FlightRegistry {
        FlightRegistry {
            dispatcher,
            flights: Vec::new(),
        }
    }

    /// Appends the flight and returns the position it was stored at.
    pub fn add_flight(&mut self, flight: Flight) -> usize {
        let position = self.flights.len();
        tracing::debug!(number = %flight.number, kind = %flight.kind(), position, "flight added");
        self.flights.push(flight);
        position
    }

    pub fn list_all(&self) -> Vec<FlightStatus> {
        self.flights().map(Flight::describe).collect()
    }

    pub fn find_by_number(&self, number: &str) -> Option<FlightStatus> {
        self.position(number).map(|i| self.flights[i].describe())
    }

    /// Removes the first flight with `number` and hands it back.
    pub fn remove_by_number(&mut self, number: &str) -> Option<Flight> {
        match self.position(number) {
            Some(i) => {
                let flight = self.flights.remove(i);
                tracing::debug!(number, position = i, "flight removed");
                Some(flight)
            }
            None => {
                tracing::debug!(number, "no flight to remove");
                None
            }
        }
    }

    pub fn summary(&self) -> Summary {
        let mut summary = self
            .flights
            .iter()
            .fold(Summary::default(), |mut acc, f| {
                match f.kind() {
                    Departing => acc.departing += 1,
                    Arriving => acc.arriving += 1,
                    Stalled => acc.stalled += 1,
                }
                acc
            });
        summary.total = summary.departing + summary.arriving + summary.stalled;
        summary
    }

    pub fn dispatcher(&self) -> &DispatcherProfile {
        &self.dispatcher
    }

    pub fn contains(&self, number: &str) -> bool {
        self.position(number).is_some()
    }

    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.flights.iter().position(|f| *f.number == *number)
    }
}
