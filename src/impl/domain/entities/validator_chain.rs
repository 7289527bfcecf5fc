use fractic_server_error::ServerError;

use crate::errors::{ValidatorAlreadyInChain, ValidatorChainFull, ValidatorNotInChain};

pub const MAX_VALIDATORS: usize = 3;

/// Ordered list of the users approving expenses of a category. Approval
/// itself happens server-side; this only edits the order sent back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatorChain {
    validators: Vec<String>,
}

// --

impl ValidatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validators(&self) -> &[String] {
        &self.validators
    }

    pub fn add(&mut self, user_id: impl Into<String>) -> Result<(), ServerError> {
        let user_id = user_id.into();
        if self.validators.contains(&user_id) {
            return Err(ValidatorAlreadyInChain::new(&user_id));
        }
        if self.validators.len() >= MAX_VALIDATORS {
            return Err(ValidatorChainFull::new(MAX_VALIDATORS));
        }
        self.validators.push(user_id);
        Ok(())
    }

    pub fn remove(&mut self, user_id: &str) -> Result<(), ServerError> {
        let i = self.position(user_id)?;
        self.validators.remove(i);
        Ok(())
    }

    /// Moves the validator one step earlier in the chain. No-op when already
    /// first.
    pub fn move_up(&mut self, user_id: &str) -> Result<(), ServerError> {
        let i = self.position(user_id)?;
        if i > 0 {
            self.validators.swap(i, i - 1);
        }
        Ok(())
    }

    /// Moves the validator one step later in the chain. No-op when already
    /// last.
    pub fn move_down(&mut self, user_id: &str) -> Result<(), ServerError> {
        let i = self.position(user_id)?;
        if i + 1 < self.validators.len() {
            self.validators.swap(i, i + 1);
        }
        Ok(())
    }

    fn position(&self, user_id: &str) -> Result<usize, ServerError> {
        self.validators
            .iter()
            .position(|v| v == user_id)
            .ok_or_else(|| ValidatorNotInChain::new(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ValidatorChain {
        let mut c = ValidatorChain::new();
        c.add("u1").unwrap();
        c.add("u2").unwrap();
        c.add("u3").unwrap();
        c
    }

    #[test]
    fn rejects_fourth_validator_and_duplicates() {
        let mut c = chain();
        assert!(c.add("u4").is_err());
        c.remove("u3").unwrap();
        assert!(c.add("u1").is_err());
        c.add("u4").unwrap();
        assert_eq!(c.validators(), ["u1", "u2", "u4"]);
    }

    #[test]
    fn reorders_within_bounds() {
        let mut c = chain();
        c.move_up("u3").unwrap();
        assert_eq!(c.validators(), ["u1", "u3", "u2"]);
        c.move_up("u1").unwrap();
        assert_eq!(c.validators(), ["u1", "u3", "u2"]);
        c.move_down("u1").unwrap();
        assert_eq!(c.validators(), ["u3", "u1", "u2"]);
        c.move_down("u2").unwrap();
        assert_eq!(c.validators(), ["u3", "u1", "u2"]);
    }

    #[test]
    fn unknown_validator_is_an_error() {
        let mut c = chain();
        assert!(c.remove("u9").is_err());
        assert!(c.move_up("u9").is_err());
    }
}
