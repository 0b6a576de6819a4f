//! `stay` CLI — room availability checks from the command line.
//!
//! Reservations are read as a JSON array of
//! `{"room_id", "check_in", "check_out", "status"}` records, from a file (`-i`)
//! or stdin. Results are printed as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Validate requested dates
//! stay validate --check-in 2025-06-10 --check-out 2025-06-15 --today 2025-06-01
//!
//! # Can room 101 take this stay?
//! stay check --room 101 --check-in 2025-06-15 --check-out 2025-06-18 -i reservations.json
//!
//! # Which rooms can take it?
//! stay rooms --check-in 2025-06-15 --check-out 2025-06-18 -i reservations.json
//!
//! # Free ranges in June, with a two-day turnover
//! stay --maintenance-days 2 vacancies --room 101 --from 2025-06-01 --to 2025-07-01 -i reservations.json
//!
//! # First day a four-night stay fits
//! stay earliest --room 101 --from 2025-06-01 --nights 4 -i reservations.json
//!
//! # Suggested check-in after a check-out
//! stay next --checkout 2025-06-15
//! ```
//!
//! Set `RUST_LOG=debug` to see each decision on stderr.

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Read};
use stay_engine::{
    earliest_available_check_in, find_first_vacancy, find_vacancies, next_available_check_in,
    validate_raw_booking_dates, BookingRequest, Clock, DateOnly, DenialReason, FixedClock,
    IntervalStore, Reservation, ReservationCoordinator, RoomId, SchedulingPolicy,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stay",
    version,
    about = "Room availability checks with post-checkout maintenance windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Days blocked for turnover after every check-out (overrides --policy)
    #[arg(long, global = true)]
    maintenance_days: Option<u32>,

    /// JSON scheduling policy file, e.g. {"maintenance_days": 2}
    #[arg(long, global = true)]
    policy: Option<String>,

    /// The current day; defaults to today in --timezone
    #[arg(long, global = true)]
    today: Option<DateOnly>,

    /// IANA time zone of the hotel, used to determine today when --today is not given
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate requested check-in/check-out dates
    Validate {
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    /// Decide whether a room can take a stay
    Check {
        #[arg(long)]
        room: String,
        #[arg(long)]
        check_in: DateOnly,
        #[arg(long)]
        check_out: DateOnly,
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List every room that can take a stay
    Rooms {
        #[arg(long)]
        check_in: DateOnly,
        #[arg(long)]
        check_out: DateOnly,
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Free date ranges for a room
    Vacancies {
        #[arg(long)]
        room: String,
        #[arg(long)]
        from: DateOnly,
        #[arg(long)]
        to: DateOnly,
        /// Only report the first range of at least this many nights
        #[arg(long)]
        min_nights: Option<u32>,
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Earliest check-in on or after --from that fits a stay of --nights
    Earliest {
        #[arg(long)]
        room: String,
        #[arg(long)]
        from: DateOnly,
        #[arg(long)]
        nights: u32,
        /// Reservations JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Suggested check-in after a check-out (checkout + maintenance + 1 day)
    Next {
        #[arg(long)]
        checkout: DateOnly,
    },
}

/// Today, either pinned by `--today` or read from the wall clock in the hotel's zone.
enum HotelClock {
    Fixed(FixedClock),
    Zoned(Tz),
}

impl Clock for HotelClock {
    fn today(&self) -> DateOnly {
        match self {
            HotelClock::Fixed(clock) => clock.today(),
            HotelClock::Zoned(tz) => DateOnly::from_datetime(&Utc::now().with_timezone(tz)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let policy = load_policy(cli.policy.as_deref(), cli.maintenance_days)?;
    let clock = build_clock(cli.today, &cli.timezone)?;
    let maintenance = policy.maintenance_days;

    match cli.command {
        Commands::Validate {
            check_in,
            check_out,
        } => {
            let today = clock.today();
            let output = match validate_raw_booking_dates(&check_in, &check_out, today) {
                Ok(_) => json!({ "valid": true }),
                Err(err) => json!({
                    "valid": false,
                    "reason": DenialReason::from(&err),
                    "message": err.to_string(),
                }),
            };
            print_json(&output)?;
        }
        Commands::Check {
            room,
            check_in,
            check_out,
            input,
        } => {
            let store = load_store(input.as_deref())?;
            let room_id = RoomId::from(room);
            if !store.contains_room(&room_id) {
                tracing::warn!(room = %room_id, "no reservations on file for room");
            }
            let coordinator = ReservationCoordinator::new(store, clock, policy);
            let decision = coordinator.request(&BookingRequest {
                room_id,
                check_in,
                check_out,
            });
            print_json(&decision)?;
        }
        Commands::Rooms {
            check_in,
            check_out,
            input,
        } => {
            let store = load_store(input.as_deref())?;
            let rooms: Vec<RoomId> = store.rooms().cloned().collect();
            let coordinator = ReservationCoordinator::new(store, clock, policy);
            let decisions = coordinator.decide_for_rooms(&rooms, check_in, check_out);
            let available: Vec<&RoomId> = decisions
                .iter()
                .filter(|decision| decision.is_allowed())
                .map(|decision| &decision.room_id)
                .collect();
            print_json(&json!({ "available": available, "decisions": decisions }))?;
        }
        Commands::Vacancies {
            room,
            from,
            to,
            min_nights,
            input,
        } => {
            let store = load_store(input.as_deref())?;
            let existing = store.intervals(&RoomId::from(room));
            match min_nights {
                Some(min_nights) => {
                    let first = find_first_vacancy(existing, from, to, min_nights, maintenance)
                        .context("Failed to search vacancies")?;
                    print_json(&first)?;
                }
                None => {
                    let vacancies = find_vacancies(existing, from, to, maintenance)
                        .context("Failed to search vacancies")?;
                    print_json(&vacancies)?;
                }
            }
        }
        Commands::Earliest {
            room,
            from,
            nights,
            input,
        } => {
            let store = load_store(input.as_deref())?;
            let room_id = RoomId::from(room);
            let existing = store.intervals(&room_id);
            let check_in = earliest_available_check_in(existing, from, nights, maintenance)
                .context("Failed to search for a check-in date")?;
            print_json(&json!({
                "room_id": room_id,
                "check_in": check_in,
                "check_out": check_in.add_days(nights.max(1)),
            }))?;
        }
        Commands::Next { checkout } => {
            println!("{}", next_available_check_in(checkout, maintenance));
        }
    }

    Ok(())
}

/// Policy from `--policy` (or defaults), with `--maintenance-days` taking precedence.
fn load_policy(path: Option<&str>, maintenance_days: Option<u32>) -> Result<SchedulingPolicy> {
    let mut policy = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read policy file: {}", path))?;
            SchedulingPolicy::from_json(&raw)
                .with_context(|| format!("Failed to parse policy file: {}", path))?
        }
        None => SchedulingPolicy::default(),
    };
    if let Some(days) = maintenance_days {
        policy = SchedulingPolicy::with_maintenance_days(days);
    }
    Ok(policy)
}

/// A pinned `--today` wins; the time zone is only read when the wall clock is.
fn build_clock(today: Option<DateOnly>, timezone: &str) -> Result<HotelClock> {
    if let Some(today) = today {
        return Ok(HotelClock::Fixed(FixedClock(today)));
    }
    let tz: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown time zone: '{}'", timezone))?;
    Ok(HotelClock::Zoned(tz))
}

fn load_store(path: Option<&str>) -> Result<IntervalStore> {
    let raw = read_input(path)?;
    let reservations: Vec<Reservation> =
        serde_json::from_str(&raw).context("Failed to parse reservations JSON")?;
    tracing::debug!(count = reservations.len(), "loaded reservations");
    Ok(IntervalStore::from_reservations(&reservations))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}
