use crate::dispatcher::DispatcherProfile;
use crate::flight::{FlightKind, FlightStatus};
use crate::registry::Summary;
use colored::Colorize;
use std::borrow::Cow;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

impl Tabled for FlightStatus {
    const LENGTH: usize = 5;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        let kind = match self.kind {
            FlightKind::Departing => self.kind.label().blue(),
            FlightKind::Arriving => self.kind.label().green(),
            FlightKind::Stalled => self.kind.label().red(),
        };
        let details = self
            .details
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(" | ");
        vec![
            Cow::Owned(kind.to_string()),
            Cow::Borrowed(self.number.as_ref()),
            Cow::Borrowed(self.airline.as_str()),
            Cow::Borrowed(self.gate.as_str()),
            Cow::Owned(details),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        ["Type", "Flight", "Airline", "Gate", "Details"]
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

pub fn flights_table(flights: &[FlightStatus]) -> String {
    let mut table = Table::new(flights);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn summary_table(summary: &Summary) -> String {
    let mut table = Table::new([summary]);
    table.with(Style::rounded());
    table.to_string()
}

pub fn dispatcher_block(profile: &DispatcherProfile) -> String {
    format!("\n--- Dispatcher Details ---\n{profile}")
}

pub fn success(message: &str) -> String {
    message.green().to_string()
}

pub fn not_found(message: &str) -> String {
    message.red().to_string()
}

pub fn notice(message: &str) -> String {
    message.yellow().to_string()
}
