//! Process batch input files.
//!
//! One process per line: `name arrival burst [priority]`, whitespace
//! separated. Lines starting with `#` are comments and are skipped. The
//! inputs are expected to be well formed; this is CLI glue, so malformed
//! lines abort with a message naming the offender.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::process::Process;

pub fn read_process_file(filename: &str) -> Vec<Process> {
    let file = File::open(filename).unwrap_or_else(|e| panic!("Failed to open {}: {}", filename, e));
    let reader = BufReader::new(file);

    let mut processes = Vec::new();
    for line in reader.lines() {
        let line = line.expect("Failed to read line");
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        processes.push(parse_line(line));
    }
    processes
}

fn parse_line(line: &str) -> Process {
    let mut parts = line.split_whitespace();
    let name = parts
        .next()
        .unwrap_or_else(|| panic!("Missing process name in line: {}", line));
    let arrival: usize = parts
        .next()
        .unwrap_or_else(|| panic!("Missing arrival time in line: {}", line))
        .parse()
        .unwrap_or_else(|e| panic!("Bad arrival time in line {:?}: {}", line, e));
    let burst: usize = parts
        .next()
        .unwrap_or_else(|| panic!("Missing burst time in line: {}", line))
        .parse()
        .unwrap_or_else(|e| panic!("Bad burst time in line {:?}: {}", line, e));
    let priority: i32 = match parts.next() {
        Some(s) => s
            .parse()
            .unwrap_or_else(|e| panic!("Bad priority in line {:?}: {}", line, e)),
        None => 0,
    };
    Process::with_priority(name, arrival, burst, priority)
}
