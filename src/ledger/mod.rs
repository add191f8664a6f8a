mod error;

pub(crate) use error::{IndexError, LedgerError, ValidationError};

use rust_decimal::Decimal;

use crate::models::Entry;
use crate::money::{is_numeric, parse_amount, saturating_sum};

/// Yes/no gate asked before destructive operations.
pub(crate) trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A pre-answered gate.
impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

pub(crate) const RESET_PROMPT: &str = "Reset all data?";

/// Categories and amounts kept as two parallel sequences of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LedgerStore {
    categories: Vec<String>,
    amounts: Vec<Decimal>,
}

impl LedgerStore {
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        let (categories, amounts) = entries
            .into_iter()
            .map(|e| (e.category, e.amount))
            .unzip();
        Self {
            categories,
            amounts,
        }
    }

    /// Validate and append one entry.
    pub(crate) fn add(&mut self, category: &str, amount_text: &str) -> Result<(), ValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let text = amount_text.trim();
        let amount = match parse_amount(text) {
            Some(amount) => amount,
            None if is_numeric(text) => {
                return Err(ValidationError::AmountOutOfRange(text.to_string()))
            }
            None => return Err(ValidationError::InvalidAmount(text.to_string())),
        };
        // the running total must stay representable
        if self.total().checked_add(amount).is_none() {
            return Err(ValidationError::AmountOutOfRange(text.to_string()));
        }

        self.categories.push(category.to_string());
        self.amounts.push(amount);
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<Entry, IndexError> {
        if index >= self.len() {
            return Err(IndexError {
                index,
                len: self.len(),
            });
        }
        let category = self.categories.remove(index);
        let amount = self.amounts.remove(index);
        Ok(Entry { category, amount })
    }

    /// Clears everything if the gate says yes. Returns whether it did.
    pub(crate) fn reset(&mut self, gate: &mut impl Confirm) -> bool {
        if !gate.confirm(RESET_PROMPT) {
            return false;
        }
        self.categories.clear();
        self.amounts.clear();
        true
    }

    /// Saturates at the [`Decimal`] bounds; a removal can leave a ledger whose
    /// left-to-right sum no longer fits.
    pub(crate) fn total(&self) -> Decimal {
        saturating_sum(&self.amounts)
    }

    pub(crate) fn len(&self) -> usize {
        self.categories.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<Entry> {
        Some(Entry {
            category: self.categories.get(index)?.clone(),
            amount: *self.amounts.get(index)?,
        })
    }

    pub(crate) fn categories(&self) -> &[String] {
        &self.categories
    }

    pub(crate) fn amounts(&self) -> &[Decimal] {
        &self.amounts
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.categories
            .iter()
            .zip(&self.amounts)
            .map(|(c, a)| Entry::new(c.clone(), *a))
    }
}
