use std::fmt;

use solana_sdk::pubkey::Pubkey;

use crate::client::CounterProgram;
use crate::error::ClientError;

/// Reference scenario: the sequence the client runs when no steps are
/// configured.
pub const DEFAULT_STEPS: &str = "increment,decrement,update:42,reset";

/// One mutating call against the counter account. Only `update` carries an
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    Update(u64),
    Reset,
}

impl Operation {
    pub fn parse(token: &str) -> Result<Self, ClientError> {
        let invalid = || ClientError::InvalidStep {
            token: token.to_string(),
        };
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (token.trim(), None),
        };
        match (name, arg) {
            ("increment", None) => Ok(Operation::Increment),
            ("decrement", None) => Ok(Operation::Decrement),
            ("reset", None) => Ok(Operation::Reset),
            ("update", Some(arg)) => arg.parse().map(Operation::Update).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
            Operation::Update(_) => "update",
            Operation::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Parses a comma-separated step list, e.g. `increment,update:42`.
pub fn parse_steps(list: &str) -> Result<Vec<Operation>, ClientError> {
    list.split(',').map(Operation::parse).collect()
}

/// Runs the configured steps strictly in order against the provisioned
/// counter account, printing the observed value after the initialization
/// check and after every call. Each call is awaited to completion before its
/// read-back fetch is issued, so step N's fetch observes step N's effect.
/// The first failure aborts the remaining steps.
///
/// Returns the observed values, starting with the pre-sequence value.
pub async fn run_sequence<P: CounterProgram>(
    program: &P,
    counter: &Pubkey,
    steps: &[Operation],
) -> Result<Vec<u64>, ClientError> {
    let mut observed = Vec::with_capacity(steps.len() + 1);

    let count = program.fetch_count(counter).await?;
    println!("Counter after initialization: {count}");
    observed.push(count);

    for step in steps {
        program.apply(counter, *step).await?;
        let count = program.fetch_count(counter).await?;
        println!("Counter after {step}: {count}");
        observed.push(count);
    }

    Ok(observed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_steps_parse_to_the_reference_sequence() {
        let steps = parse_steps(DEFAULT_STEPS).unwrap();
        assert_eq!(
            steps,
            vec![
                Operation::Increment,
                Operation::Decrement,
                Operation::Update(42),
                Operation::Reset,
            ]
        );
    }

    #[test]
    fn tokens_tolerate_surrounding_whitespace() {
        let steps = parse_steps(" increment, update : 7 ,reset").unwrap();
        assert_eq!(
            steps,
            vec![
                Operation::Increment,
                Operation::Update(7),
                Operation::Reset,
            ]
        );
    }

    #[test]
    fn unknown_or_malformed_tokens_are_rejected() {
        for list in ["frobnicate", "update", "update:abc", "increment:1", ""] {
            let err = parse_steps(list).unwrap_err();
            assert!(matches!(err, ClientError::InvalidStep { .. }), "{list:?}");
        }
    }

    #[test]
    fn operations_display_as_program_method_names() {
        assert_eq!(Operation::Increment.to_string(), "increment");
        assert_eq!(Operation::Decrement.to_string(), "decrement");
        assert_eq!(Operation::Update(42).to_string(), "update");
        assert_eq!(Operation::Reset.to_string(), "reset");
    }
}
