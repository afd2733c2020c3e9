use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod binary_search;

/// Errors raised while reading and validating problem input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Entry point of a problem solution: consumes the whole input from the
/// scanner and writes one answer line per test case.
pub type SolveFn = fn(&mut Scanner, &mut Writer) -> Result<(), InputError>;

/// Fast input reader for competitive programming
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn next_line(&mut self) -> Result<String, InputError> {
        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(|e| InputError::MalformedInput(format!("read failed: {}", e)))?;
        if read == 0 {
            return Err(InputError::MalformedInput(
                "unexpected end of input".to_string(),
            ));
        }
        Ok(input.trim().to_string())
    }

    /// Parse the next line as a single value.
    pub fn parse<T>(&mut self) -> Result<T, InputError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.next_line()?;
        line.parse()
            .map_err(|e| InputError::MalformedInput(format!("{:?}: {}", line, e)))
    }

    /// Parse the next line as whitespace-separated values.
    pub fn parse_vec<T>(&mut self) -> Result<Vec<T>, InputError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.next_line()?;
        line.split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|e| InputError::MalformedInput(format!("{:?}: {}", token, e)))
            })
            .collect()
    }
}

/// Fast output writer for competitive programming (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        write!(self.0, "{}", value).expect("Failed write");
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// A named group of problem solutions, runnable by name from the CLI.
pub struct TaskGroup {
    name: &'static str,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, problem: &'static str, solve: SolveFn) -> Self {
        self.tasks.push((problem, solve));
        self
    }

    pub fn get(&self, problem: &str) -> Option<SolveFn> {
        self.tasks
            .iter()
            .find(|(name, _)| *name == problem)
            .map(|(_, solve)| *solve)
    }

    /// Run a problem against stdin, writing answer lines to stdout.
    pub fn run(&self, problem: &str) -> Result<(), InputError> {
        let Some(solve) = self.get(problem) else {
            eprintln!("Unknown problem {}/{}. Available:", self.name, problem);
            for (name, _) in &self.tasks {
                eprintln!("  {}", name);
            }
            std::process::exit(2);
        };

        let mut scanner = Scanner::new(std::io::stdin().lock());
        let mut writer = Writer::new();

        let start = Instant::now();
        solve(&mut scanner, &mut writer)?;
        debug!("{}/{} solved in {:?}", self.name, problem, start.elapsed());

        std::io::stdout()
            .write_all(writer.as_bytes())
            .expect("Failed write");
        Ok(())
    }
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(category: &str, problem_name: &str) -> Vec<usize> {
        let test_dir = PathBuf::from("data").join(category).join(problem_name);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if file_name.ends_with(".in") {
                        if let Some(num_str) = file_name.strip_suffix(".in") {
                            if let Ok(num) = num_str.parse::<usize>() {
                                test_numbers.push(num);
                            }
                        }
                    }
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case<F>(
        category: &str,
        problem_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String, std::time::Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let test_dir = PathBuf::from("data").join(category).join(problem_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        // Read input and expected output
        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        // Run the solution and time it
        let input_reader = Cursor::new(input);
        let mut scanner = Scanner::new(input_reader);
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| format!("Solver failed: {}", e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all test cases for a problem
    pub fn verify_all_tests<F>(category: &str, problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let test_cases = discover_tests(category, problem_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            category,
            problem_name
        );

        let mut total_duration = std::time::Duration::ZERO;

        for test_num in test_cases {
            let result = run_test_case(category, problem_name, test_num, &solve_fn);
            match result {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    assert_eq!(
                        actual, expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num, secs, expected, actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }

        let total_secs = total_duration.as_secs_f64();
        println!("Total time: {:.2}s", total_secs);
    }

    /// Run all test cases and print results (for CLI usage)
    pub fn run_all_tests<F>(category: &str, problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let test_cases = discover_tests(category, problem_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", category, problem_name);
            return;
        }

        println!(
            "Running {} test cases for {}/{}...",
            test_cases.len(),
            category,
            problem_name
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = std::time::Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, problem_name, *test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        let total_secs = total_duration.as_secs_f64();
        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_secs);
        if failed > 0 {
            std::process::exit(1);
        }
    }
}
