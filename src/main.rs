use std::error::Error;
use std::io::{self, BufRead};
use std::process;

use clap::{Arg, ArgMatches, Command};
use csv::ReaderBuilder;

use disksched::console;
use disksched::scheduler::Comparison;
use disksched::{Request, SimTime, Workload, WorkloadError};

/// Reads a headerless CSV workload of `cylinder, arrival` records.
pub fn read_workload_file(
    file_path: &String,
    start_position: f64,
) -> Result<Workload, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_path(file_path)?;
    let mut requests = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let line = index + 1;
        if record.len() < 2 {
            return Err(Box::new(WorkloadError::MalformedRecord { line }));
        }

        let cylinder: f64 = record[0]
            .trim()
            .parse()
            .map_err(|_| WorkloadError::MalformedRecord { line })?;
        let arrival: SimTime = record[1]
            .trim()
            .parse()
            .map_err(|_| WorkloadError::MalformedRecord { line })?;

        requests.push(Request::new(cylinder, arrival));
    }

    if requests.is_empty() {
        return Err(Box::new(WorkloadError::EmptyWorkload));
    }

    Ok(Workload::new(start_position, requests))
}

pub fn build_cli_command() -> Command {
    Command::new("Disk Scheduling Simulator")
        .version("0.1.0")
        .about("Compares the Elevator and FCFS disk scheduling policies over one workload")
        .arg(
            Arg::new("workload_file")
                .help("Path to a CSV workload of `cylinder, arrival` records"),
        )
        .arg(
            Arg::new("requests")
                .short('n')
                .long("requests")
                .help("Run once over a random workload of this many requests"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .help("Starting head position for file workloads")
                .default_value("1000"),
        )
}

/// Prints the entered/generated request pairs, then both policies' ordered
/// (cylinder, completion time) pairs. Random and batch runs also report the
/// two averages.
fn report_comparison(workload: &Workload, show_averages: bool) {
    println!("Entrance:");
    for request in workload.iter() {
        console::pair_row(request.cylinder(), request.arrival());
    }

    let comparison = Comparison::run(workload);
    for (name, outcome) in comparison.outcomes() {
        println!("{}:", name);
        for completion in outcome.completions() {
            console::pair_row(completion.cylinder(), completion.finished_at());
        }
    }

    if show_averages {
        println!();
        println!(
            "Elevator's Average: {:.2}    FCFS's Average: {:.2}",
            comparison.elevator().average(),
            comparison.fcfs().average()
        );
        println!();
    }
}

fn compare_manually<R: BufRead>(input: &mut R) -> io::Result<()> {
    console::subtitle("Disk State");
    let start_position: f64 = console::prompt(input, "Current head position:")?;
    let count = console::prompt_count(input, "Count of IO requests:")?;

    console::subtitle("Request's Cylinder & First Time Available");
    let mut requests = Vec::with_capacity(count);
    for i in 1..=count {
        let cylinder: f64 = console::prompt(input, &format!("Request {}'s cylinder:", i))?;
        let arrival: SimTime =
            console::prompt(input, &format!("Request {}'s first time available:", i))?;
        println!("Added: X{}: {}  T{}: {}", i, cylinder, i, arrival);
        requests.push(Request::new(cylinder, arrival));
    }

    report_comparison(&Workload::new(start_position, requests), false);
    Ok(())
}

fn compare_randomly<R: BufRead>(input: &mut R) -> io::Result<()> {
    let count = console::prompt_count(input, "Enter the number of random requests:")?;
    report_comparison(&Workload::random(count), true);
    Ok(())
}

fn run_menu() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        console::banner("Disk Scheduling Simulator");
        console::option("1", "Elevator & FCFS Algorithm [Manual Input]");
        console::option("2", "Elevator & FCFS Algorithm [Random Input]");
        console::option("3", "Quit");

        let choice: u32 = match console::prompt(&mut input, "Select an option:") {
            Ok(value) => value,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(error) => return Err(error),
        };

        match choice {
            1 => compare_manually(&mut input)?,
            2 => compare_randomly(&mut input)?,
            3 => return Ok(()),
            _ => console::report_error("Invalid input, possible options: 1, 2, 3"),
        }
    }
}

fn main() {
    // disksched [workload.csv] [-n <count>] [-s <start>]
    // No arguments: interactive menu.
    let matches: ArgMatches = build_cli_command().get_matches();

    let start_position = match matches.get_one::<String>("start").unwrap().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid starting head position");
            process::exit(2);
        }
    };

    if let Some(file_path) = matches.get_one::<String>("workload_file") {
        let workload = match read_workload_file(file_path, start_position) {
            Ok(workload) => workload,
            Err(e) => {
                eprintln!("Error reading workload file: {}", e);
                process::exit(1);
            }
        };
        report_comparison(&workload, true);
        return;
    }

    if let Some(count) = matches.get_one::<String>("requests") {
        match count.parse::<usize>() {
            Ok(count) if count > 0 => report_comparison(&Workload::random(count), true),
            _ => {
                eprintln!("Invalid request count: at least one request is required");
                process::exit(2);
            }
        }
        return;
    }

    if let Err(e) = run_menu() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_workload_file_valid() {
        let workload_content = "\
            1200.0, 0\n\
            4800.5, 12.5";
        let file_path = "test_workload_valid.csv";

        std::fs::write(file_path, workload_content).expect("Unable to write test file");

        let workload =
            read_workload_file(&file_path.to_string(), 1000.0).expect("Failed to read workload");

        assert_eq!(workload.len(), 2);
        assert_eq!(workload.start_position(), 1000.0);
        assert_eq!(workload.requests()[0].cylinder(), 1200.0);
        assert_eq!(workload.requests()[0].arrival(), 0.0);
        assert_eq!(workload.requests()[1].cylinder(), 4800.5);
        assert_eq!(workload.requests()[1].arrival(), 12.5);

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_read_workload_file_invalid_format() {
        let workload_content = "Invalid, Data";
        let file_path = "test_workload_invalid.csv";

        std::fs::write(file_path, workload_content).expect("Unable to write test file");

        let result = read_workload_file(&file_path.to_string(), 1000.0);
        assert!(result.is_err());

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_read_workload_file_empty() {
        let file_path = "test_workload_empty.csv";

        std::fs::write(file_path, "").expect("Unable to write test file");

        let result = read_workload_file(&file_path.to_string(), 1000.0);
        assert!(result.is_err());

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_command_line_arguments() {
        let matches = build_cli_command().try_get_matches_from(vec![
            "disksched",
            "workload.csv",
            "-n",
            "12",
            "-s",
            "2500",
        ]);

        assert!(matches.is_ok());
        let matches = matches.unwrap();

        assert_eq!(
            matches.get_one::<String>("workload_file").unwrap(),
            "workload.csv"
        );
        assert_eq!(matches.get_one::<String>("requests").unwrap(), "12");
        assert_eq!(matches.get_one::<String>("start").unwrap(), "2500");
    }
}
