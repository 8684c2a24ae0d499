use std::cell::RefCell;
use std::process::exit;

use clap::{App, Arg};
use regex::Regex;
use serde::Serialize;

use schedsim::input::read_process_file;
use schedsim::{
    priority_dynamic, round_robin_with_arrival, sjf_dynamic, Algorithm, Process, Summary,
};

#[derive(Debug, Default)]
struct Flags {
    v_option: bool,
}

thread_local!(static TFLAGS: RefCell<Flags> = RefCell::new(Flags::default()));

// prints per-process trace lines
macro_rules! v_trace {
    ($($arg:tt)*) => {
        TFLAGS.with(|tflags| {
            let tflags = tflags.borrow();
            if tflags.v_option {
                println!("{}", format_args!($($arg)*));
            }
        });
    };
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: String,
    processes: &'a [Process],
    summary: Summary,
}

fn main() {
    let matches = App::new("schedsim")
        .version("0.1.0")
        .about("Offline CPU scheduling simulator")
        .arg(
            Arg::with_name("schedspec")
                .short('s')
                .long("sched")
                .takes_value(true)
                .default_value("F")
                .validator(valid_schedspec)
                .help("Scheduler specification (F, J, S, P, or R<quantum>)"),
        )
        .arg(
            Arg::with_name("dynamic")
                .long("dynamic")
                .takes_value(false)
                .help("Use the arrival-aware variant of SJF/Priority instead of the static global sort"),
        )
        .arg(
            Arg::with_name("enforce-arrival")
                .long("enforce-arrival")
                .takes_value(false)
                .help("Make Round Robin admit processes only once they have arrived"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("Emit the annotated batch and summary as JSON"),
        )
        .arg(
            Arg::with_name("v_flag")
                .short('v')
                .takes_value(false)
                .help("Trace the parsed batch before scheduling"),
        )
        .arg(
            Arg::with_name("inputfile")
                .help("Process batch input file (name arrival burst [priority] per line)")
                .required(true)
                .index(1),
        )
        .get_matches();

    TFLAGS.with(|tflags| {
        tflags.borrow_mut().v_option = matches.is_present("v_flag");
    });

    let spec = matches.value_of("schedspec").unwrap();
    let algorithm = parse_schedspec(spec);
    let mut processes = read_process_file(matches.value_of("inputfile").unwrap());

    for (i, p) in processes.iter().enumerate() {
        v_trace!("{:4}: {} arrival={} burst={} prio={}", i, p.name, p.arrival, p.burst, p.priority);
    }

    let result = match algorithm {
        Algorithm::Sjf if matches.is_present("dynamic") => sjf_dynamic(&mut processes),
        Algorithm::Priority if matches.is_present("dynamic") => priority_dynamic(&mut processes),
        Algorithm::RoundRobin { quantum } if matches.is_present("enforce-arrival") => {
            round_robin_with_arrival(&mut processes, quantum)
        }
        alg => alg.run(&mut processes),
    };
    if let Err(e) = result {
        eprintln!("schedsim: {}", e);
        exit(1);
    }

    let summary = Summary::from_batch(&processes);
    if matches.is_present("json") {
        let report = Report {
            algorithm: algorithm.to_string(),
            processes: &processes,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report).expect("serialize report"));
    } else {
        print_summary(&algorithm, &processes, &summary);
    }
}

fn valid_schedspec(value: &str) -> Result<(), String> {
    let re = Regex::new(r"^([FJSP]|R\d+)$").unwrap();
    if !re.is_match(value) {
        Err(format!(
            "Invalid scheduler specification: {}. Must be one of F, J, S, P or R<quantum>",
            value
        ))
    } else {
        Ok(())
    }
}

fn parse_schedspec(spec: &str) -> Algorithm {
    match spec.chars().next() {
        Some('F') => Algorithm::Fcfs,
        Some('J') => Algorithm::Sjf,
        Some('S') => Algorithm::Srtf,
        Some('P') => Algorithm::Priority,
        Some('R') => Algorithm::RoundRobin {
            // Digits guaranteed by the validator.
            quantum: spec[1..].parse().expect("quantum digits"),
        },
        _ => unreachable!("validator admits only F, J, S, P, R<quantum>"),
    }
}

fn print_summary(algorithm: &Algorithm, processes: &[Process], summary: &Summary) {
    println!("{}", algorithm);
    println!(
        "{:<10} {:>7} {:>6} {:>5} {:>6} {:>11} {:>8}",
        "name", "arrival", "burst", "prio", "compl", "turnaround", "waiting"
    );
    for p in processes {
        println!(
            "{:<10} {:>7} {:>6} {:>5} {:>6} {:>11} {:>8}",
            p.name,
            p.arrival,
            p.burst,
            p.priority,
            p.completion.unwrap_or(0),
            p.turnaround.unwrap_or(0),
            p.waiting.unwrap_or(0)
        );
    }
    println!(
        "SUM: {} {:.4} {:.2} {:.2} {}",
        summary.total_time,
        summary.cpu_utilization,
        summary.avg_turnaround,
        summary.avg_waiting,
        summary.max_waiting
    );
}
