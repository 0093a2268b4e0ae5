use crate::{
    cli::{Command, InformationArgs, IssueArgs, TableArgs},
    fileio::load_table,
    input,
};
use anyhow::Result;
use shared::{
    abstract_trait::DynCardService, domain::requests::IssueRequest, model::PrefixTable,
};
use std::{
    io::{BufRead, Write},
    process::ExitCode,
};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::from(1),
        }
    }
}

/// Runs one command, writing results to `out` and diagnostics to `err`.
pub struct CommandHandler<O, E> {
    service: DynCardService,
    out: O,
    err: E,
}

impl<O: Write, E: Write> CommandHandler<O, E> {
    pub fn new(service: DynCardService, out: O, err: E) -> Self {
        Self { service, out, err }
    }

    pub fn run<R: BufRead>(&mut self, command: Command, stdin: R) -> Result<Outcome> {
        match command {
            Command::Validate {
                stdin: use_stdin,
                numbers,
            } => self.validate(use_stdin, &numbers, stdin),
            Command::Generate { pick, pattern } => self.generate(&pattern, pick),
            Command::Information(args) => self.information(args, stdin),
            Command::Issue(args) => self.issue(args),
        }
    }

    fn validate<R: BufRead>(
        &mut self,
        use_stdin: bool,
        numbers: &[String],
        stdin: R,
    ) -> Result<Outcome> {
        let Some(numbers) = self.collect_numbers(use_stdin, numbers, stdin)? else {
            return Ok(Outcome::Failure);
        };

        let mut outcome = Outcome::Success;
        for validation in self.service.validate(&numbers) {
            if validation.is_valid() {
                writeln!(self.out, "OK")?;
            } else {
                writeln!(self.err, "INCORRECT")?;
                outcome = Outcome::Failure;
            }
        }

        Ok(outcome)
    }

    fn generate(&mut self, pattern: &str, pick: bool) -> Result<Outcome> {
        match self.service.generate(pattern, pick) {
            Ok(numbers) => {
                for number in numbers {
                    writeln!(self.out, "{number}")?;
                }
                Ok(Outcome::Success)
            }
            Err(e) => {
                writeln!(self.err, "{e}")?;
                Ok(Outcome::Failure)
            }
        }
    }

    fn information<R: BufRead>(&mut self, args: InformationArgs, stdin: R) -> Result<Outcome> {
        let Some((brands, issuers)) = self.load_tables(&args.tables)? else {
            return Ok(Outcome::Failure);
        };

        let Some(numbers) = self.collect_numbers(args.stdin, &args.numbers, stdin)? else {
            return Ok(Outcome::Failure);
        };

        for number in numbers.iter().filter(|n| !n.is_empty()) {
            let info = self
                .service
                .information(number, Some(&brands), Some(&issuers));

            if args.json {
                writeln!(self.out, "{}", serde_json::to_string(&info)?)?;
            } else {
                writeln!(self.out, "{}", info.number)?;
                writeln!(
                    self.out,
                    "Correct: {}",
                    if info.valid { "yes" } else { "no" }
                )?;
                writeln!(self.out, "Card Brand: {}", info.brand)?;
                writeln!(self.out, "Card Issuer: {}", info.issuer)?;
            }
        }

        Ok(Outcome::Success)
    }

    fn issue(&mut self, args: IssueArgs) -> Result<Outcome> {
        let Some((brands, issuers)) = self.load_tables(&args.tables)? else {
            return Ok(Outcome::Failure);
        };

        let req = IssueRequest::new(args.brand, args.issuer);
        match self.service.issue(&req, &brands, &issuers) {
            Ok(number) => {
                writeln!(self.out, "{number}")?;
                Ok(Outcome::Success)
            }
            Err(e) => {
                writeln!(self.err, "{e}")?;
                Ok(Outcome::Failure)
            }
        }
    }

    /// `None` once the problem has been reported on `err`.
    fn collect_numbers<R: BufRead>(
        &mut self,
        use_stdin: bool,
        args: &[String],
        stdin: R,
    ) -> Result<Option<Vec<String>>> {
        let numbers = if use_stdin {
            match input::from_reader(stdin) {
                Ok(numbers) => numbers,
                Err(e) => {
                    error!("💥 {e:#}");
                    writeln!(self.err, "{e:#}")?;
                    return Ok(None);
                }
            }
        } else {
            input::from_args(args)
        };

        if numbers.is_empty() {
            writeln!(self.err, "No numbers provided")?;
            return Ok(None);
        }

        Ok(Some(numbers))
    }

    fn load_tables(&mut self, tables: &TableArgs) -> Result<Option<(PrefixTable, PrefixTable)>> {
        let brands = match load_table(&tables.brands) {
            Ok(table) => table,
            Err(e) => {
                error!("💥 Error loading brands: {e:#}");
                writeln!(self.err, "Error loading brands: {e:#}")?;
                return Ok(None);
            }
        };

        let issuers = match load_table(&tables.issuers) {
            Ok(table) => table,
            Err(e) => {
                error!("💥 Error loading issuers: {e:#}");
                writeln!(self.err, "Error loading issuers: {e:#}")?;
                return Ok(None);
            }
        };

        Ok(Some((brands, issuers)))
    }
}
