//! Ordered, fail-fast step sequences

use crate::error::{Error, Result};

type Action<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

/// A named unit of work in a configuration sequence
pub struct Step<'a> {
    name: &'static str,
    action: Action<'a>,
}

impl<'a> Step<'a> {
    pub fn new(name: &'static str, action: impl FnOnce() -> Result<()> + 'a) -> Self {
        Self {
            name,
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Run steps in order, stopping at the first failure.
///
/// The failing step's name is attached to the returned error; steps after it
/// never run.
pub fn run_steps(steps: Vec<Step<'_>>) -> Result<()> {
    let total = steps.len();

    for (idx, step) in steps.into_iter().enumerate() {
        let name = step.name();
        println!("\n[{}/{}] {}...", idx + 1, total, name);
        tracing::debug!(step = name, "starting");

        if let Err(e) = (step.action)() {
            tracing::debug!(step = name, error = %e, "step failed");
            return Err(Error::step(name, e));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn runs_all_steps_in_order() {
        let log = RefCell::new(Vec::new());
        let steps = vec![
            Step::new("first", || {
                log.borrow_mut().push("first");
                Ok(())
            }),
            Step::new("second", || {
                log.borrow_mut().push("second");
                Ok(())
            }),
        ];

        run_steps(steps).unwrap();
        assert_eq!(*log.borrow(), ["first", "second"]);
    }

    #[test]
    fn stops_at_first_failure_and_names_it() {
        let log = RefCell::new(Vec::new());
        let steps = vec![
            Step::new("refresh", || {
                log.borrow_mut().push("refresh");
                Err(Error::ExitStatus {
                    program: "sudo".into(),
                    code: Some(100),
                })
            }),
            Step::new("install", || {
                log.borrow_mut().push("install");
                Ok(())
            }),
        ];

        let err = run_steps(steps).unwrap_err();

        assert_eq!(*log.borrow(), ["refresh"]);
        match err {
            Error::Step { step, source } => {
                assert_eq!(step, "refresh");
                assert!(matches!(*source, Error::ExitStatus { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failed_step_is_quiet_at_default_level() {
        let log = crate::testing::default_level_log(|| {
            let steps = vec![Step::new("refresh", || {
                Err(Error::ExitStatus {
                    program: "sudo".into(),
                    code: Some(100),
                })
            })];
            assert!(run_steps(steps).is_err());
        });
        assert!(log.is_empty(), "unexpected log output: {log}");
    }

    #[test]
    fn empty_sequence_succeeds() {
        assert!(run_steps(Vec::new()).is_ok());
    }

    #[test]
    fn step_exposes_name() {
        assert_eq!(Step::new("write policy", || Ok(())).name(), "write policy");
    }
}
