use crate::dispatcher::DispatcherProfile;
use crate::flight::{Flight, FlightKind, FlightStatus};
use crate::registry::FlightRegistry;
use crate::render;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::process::{Command as Process, Stdio};

pub type Console = Editor<CompleteHelper, DefaultHistory>;

const PAGE_ROWS: usize = 20;

const MENU: &str = "
--- Menu ---
1. Add Departing Flight    (depart)
2. Add Arriving Flight     (arrive)
3. Add Stalled Flight      (stall)
4. Show All Flights        (ls [d|a|s])
5. Search Flight           (search [number])
6. Remove Flight           (remove [number])
7. Show Summary            (summary)
8. Show Dispatcher Info    (dispatcher)
9. Exit                    (exit)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddDeparting,
    AddArriving,
    AddStalled,
    List(Option<FlightKind>),
    Search(Option<String>),
    Remove(Option<String>),
    Summary,
    Dispatcher,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Unknown(String::new());
        }
        // Flight numbers may contain spaces, so the argument is the rest of the line.
        let (head, arg) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest.trim().to_string())),
            None => (line, None),
        };
        match head {
            "1" | "depart" => Command::AddDeparting,
            "2" | "arrive" => Command::AddArriving,
            "3" | "stall" => Command::AddStalled,
            "4" | "ls" => match arg.as_deref().map(str::parse::<FlightKind>) {
                None => Command::List(None),
                Some(Ok(kind)) => Command::List(Some(kind)),
                Some(Err(_)) => Command::Unknown(line.to_string()),
            },
            "5" | "search" => Command::Search(arg),
            "6" | "remove" | "rm" => Command::Remove(arg),
            "7" | "summary" => Command::Summary,
            "8" | "dispatcher" => Command::Dispatcher,
            "help" | "?" | "menu" => Command::Help,
            "9" | "exit" | "quit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What `ls` has to show for the current board and filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    NoFlights,
    NoMatch,
    Flights(Vec<FlightStatus>),
}

pub fn listing(registry: &FlightRegistry, filter: Option<FlightKind>) -> Listing {
    if registry.is_empty() {
        return Listing::NoFlights;
    }
    let flights: Vec<FlightStatus> = registry
        .list_all()
        .into_iter()
        .filter(|f| filter.is_none_or(|kind| f.kind == kind))
        .collect();
    if flights.is_empty() {
        Listing::NoMatch
    } else {
        Listing::Flights(flights)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
    New,
    /// Stored behind an earlier flight with the same number.
    Duplicate,
}

/// Stores the flight, reporting whether its number was already taken.
pub fn register(registry: &mut FlightRegistry, flight: Flight) -> Added {
    let added = if registry.contains(&flight.number) {
        tracing::warn!(number = %flight.number, "flight number already on the board");
        Added::Duplicate
    } else {
        Added::New
    };
    registry.add_flight(flight);
    added
}

/// How the command loop carries on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancelled,
    Exit,
}

/// Ctrl-C inside a command only abandons that command.
pub fn flow(result: rustyline::Result<bool>) -> rustyline::Result<Flow> {
    match result {
        Ok(true) => Ok(Flow::Continue),
        Ok(false) | Err(ReadlineError::Eof) => Ok(Flow::Exit),
        Err(ReadlineError::Interrupted) => Ok(Flow::Cancelled),
        Err(err) => Err(err),
    }
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{cmd} "),
            })
            .collect();

        Ok((0, candidates))
    }
}

pub fn console() -> rustyline::Result<Console> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "depart", "arrive", "stall", "ls", "search", "remove", "summary", "dispatcher", "help", "exit",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));
    Ok(rl)
}

fn prompt(rl: &mut Console, label: &str) -> rustyline::Result<String> {
    rl.readline(&format!("{label}: "))
}

fn number_or_prompt(rl: &mut Console, arg: Option<String>, label: &str) -> rustyline::Result<String> {
    match arg {
        Some(number) => Ok(number),
        None => prompt(rl, label),
    }
}

/// Asks for each profile field in turn. Age is asked again until it parses.
pub fn prompt_dispatcher(rl: &mut Console) -> rustyline::Result<DispatcherProfile> {
    let name = prompt(rl, "Enter Dispatcher Name")?;
    let employee_id = prompt(rl, "Enter Dispatcher ID")?;
    let shift = prompt(rl, "Enter Shift (Morning/Evening/Night)")?;
    let age = loop {
        let raw = prompt(rl, "Enter Age")?;
        match raw.trim().parse::<u32>() {
            Ok(age) => break age,
            Err(e) => {
                tracing::debug!(input = %raw, error = %e, "rejected age");
                println!("{}", render::notice("Age must be a whole, non-negative number."));
            }
        }
    };
    let contact = prompt(rl, "Enter Contact")?;
    let email = prompt(rl, "Enter Email")?;

    Ok(DispatcherProfile {
        name,
        employee_id,
        shift,
        age,
        contact,
        email,
    })
}

fn prompt_flight(rl: &mut Console, kind: FlightKind) -> rustyline::Result<Flight> {
    let number = prompt(rl, "Flight Number")?;
    let airline = prompt(rl, "Airline")?;
    let gate = prompt(rl, "Gate")?;
    let flight = match kind {
        FlightKind::Departing => Flight::departing(number, airline, gate, prompt(rl, "Destination")?),
        FlightKind::Arriving => Flight::arriving(number, airline, gate, prompt(rl, "Origin")?),
        FlightKind::Stalled => {
            let reason = prompt(rl, "Reason")?;
            let location = prompt(rl, "Location")?;
            Flight::stalled(number, airline, gate, reason, location)
        }
    };
    Ok(flight)
}

fn paginate(content: String) {
    let spawned = Process::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        .or_else(|_| Process::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match spawned {
        Ok(pager) => pager,
        Err(e) => {
            tracing::debug!(error = %e, "no pager available");
            println!("{content}");
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {e}");
            }
        }
    }

    let _ = pager.wait();
}

fn show_flights(flights: &[FlightStatus]) {
    let table = render::flights_table(flights);
    if flights.len() > PAGE_ROWS {
        paginate(table);
    } else {
        println!("{table}");
    }
}

fn add(rl: &mut Console, registry: &mut FlightRegistry, kind: FlightKind) -> rustyline::Result<()> {
    let flight = prompt_flight(rl, kind)?;
    let number = flight.number.clone();
    if register(registry, flight) == Added::Duplicate {
        println!(
            "{}",
            render::notice(&format!(
                "Flight {number} is already on the board; search and remove act on the earliest entry."
            ))
        );
    }
    println!("{}", render::success("Flight added successfully."));
    Ok(())
}

/// Runs one command against the registry. Returns `false` once the
/// operator asks to leave.
pub fn execute(rl: &mut Console, registry: &mut FlightRegistry, command: Command) -> rustyline::Result<bool> {
    match command {
        Command::AddDeparting => add(rl, registry, FlightKind::Departing)?,
        Command::AddArriving => add(rl, registry, FlightKind::Arriving)?,
        Command::AddStalled => add(rl, registry, FlightKind::Stalled)?,
        Command::List(filter) => match listing(registry, filter) {
            Listing::NoFlights => println!("{}", render::notice("No flights available.")),
            Listing::NoMatch => println!("{}", render::notice("No matching flights found.")),
            Listing::Flights(flights) => {
                println!("\n--- All Flights ---");
                show_flights(&flights);
            }
        },
        Command::Search(arg) => {
            let number = number_or_prompt(rl, arg, "Enter Flight Number")?;
            match registry.find_by_number(&number) {
                Some(status) => {
                    println!("\nFlight Found:");
                    println!("{status}");
                }
                None => println!("{}", render::not_found("Flight not found.")),
            }
        }
        Command::Remove(arg) => {
            let number = number_or_prompt(rl, arg, "Enter Flight Number to remove")?;
            match registry.remove_by_number(&number) {
                Some(_) => println!("{}", render::success("Flight removed successfully.")),
                None => println!("{}", render::not_found("Flight not found.")),
            }
        }
        Command::Summary => {
            println!("\n--- Flight Summary ---");
            println!("{}", render::summary_table(&registry.summary()));
        }
        Command::Dispatcher => println!("{}", render::dispatcher_block(registry.dispatcher())),
        Command::Help => print!("{MENU}"),
        Command::Exit => {
            println!("Exiting System... Goodbye!");
            return Ok(false);
        }
        Command::Unknown(input) => println!("Invalid choice: {input}"),
    }
    Ok(true)
}

pub fn run(rl: &mut Console, registry: &mut FlightRegistry) -> rustyline::Result<()> {
    print!("{MENU}");
    loop {
        let line = match rl.readline("Enter choice: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        rl.add_history_entry(trimmed)?;

        let command = Command::parse(trimmed);
        tracing::debug!(?command, "command");
        match flow(execute(rl, registry, command))? {
            Flow::Continue => {}
            Flow::Cancelled => println!("{}", render::notice("Cancelled.")),
            Flow::Exit => break,
        }
    }
    Ok(())
}
