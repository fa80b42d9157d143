//! Coin balance

use super::error::EngineError;

/// Owner of the virtual-currency balance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
    /// Sum of every credit since the ledger was opened
    total_earned: u64,
}

impl Ledger {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            total_earned: 0,
        }
    }

    /// Ledger with a pre-existing lifetime earnings figure
    pub fn with_earnings(balance: u64, total_earned: u64) -> Self {
        Self {
            balance,
            total_earned,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn total_earned(&self) -> u64 {
        self.total_earned
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        amount <= self.balance
    }

    /// Add coins to the balance
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.total_earned = self.total_earned.saturating_add(amount);
    }

    /// Remove coins from the balance.
    ///
    /// Leaves the balance untouched and reports the shortfall when `amount`
    /// exceeds it.
    pub fn debit(&mut self, amount: u64) -> Result<(), EngineError> {
        if amount > self.balance {
            return Err(EngineError::InsufficientFunds {
                needed: amount,
                balance: self.balance,
                shortfall: amount - self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_and_debit() {
        let mut ledger = Ledger::new(100);
        ledger.credit(50);
        assert_eq!(ledger.balance(), 150);
        assert_eq!(ledger.total_earned(), 50);

        ledger.debit(150).unwrap();
        assert_eq!(ledger.balance(), 0);
        // Spending does not reduce lifetime earnings
        assert_eq!(ledger.total_earned(), 50);
    }

    #[test]
    fn test_debit_over_balance_reports_shortfall() {
        for (balance, amount) in [(0, 1), (50, 500), (99, 100), (12_500, 40_000)] {
            let mut ledger = Ledger::new(balance);
            let err = ledger.debit(amount).unwrap_err();
            assert_eq!(err.shortfall(), Some(amount - balance));
            assert_eq!(ledger.balance(), balance);
        }
    }

    #[test]
    fn test_debit_exact_balance() {
        let mut ledger = Ledger::new(100);
        assert!(ledger.can_afford(100));
        ledger.debit(100).unwrap();
        assert_eq!(ledger.balance(), 0);
        assert!(!ledger.can_afford(1));
    }
}
