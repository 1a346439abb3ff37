use std::fmt;

use time::OffsetDateTime;

/// Discriminator carried by every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Book,
}

impl TransactionType {
    /// Wire tag for this transaction type
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Book => "BOOK",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named amount stamped with its creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub name: String,
    pub amount: f64,
    /// Set once, when the transaction is constructed
    pub created_at: OffsetDateTime,
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(name: impl Into<String>, amount: f64, kind: TransactionType) -> Self {
        Self {
            name: name.into(),
            amount,
            created_at: OffsetDateTime::now_utc(),
            kind,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Transaction(name={:?})>", self.name)
    }
}

/// A transaction whose kind is always [`TransactionType::Book`].
#[derive(Debug, Clone, PartialEq)]
pub struct Book(Transaction);

impl Book {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self(Transaction::new(name, amount, TransactionType::Book))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn amount(&self) -> f64 {
        self.0.amount
    }

    pub fn transaction(&self) -> &Transaction {
        &self.0
    }

    pub fn into_transaction(self) -> Transaction {
        self.0
    }
}

impl AsRef<Transaction> for Book {
    fn as_ref(&self) -> &Transaction {
        &self.0
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Book(name={:?})>", self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_is_tagged_as_book() {
        let book = Book::new("Dune", 3.0);
        assert_eq!(book.transaction().kind, TransactionType::Book);
        assert_eq!(book.transaction().kind.to_string(), "BOOK");
        assert_eq!(book.name(), "Dune");
        assert_eq!(book.amount(), 3.0);
    }

    #[test]
    fn created_at_is_stamped_on_construction() {
        let before = OffsetDateTime::now_utc();
        let tx = Transaction::new("Dune", 3.0, TransactionType::Book);
        let after = OffsetDateTime::now_utc();

        assert!(tx.created_at >= before && tx.created_at <= after);
    }

    #[test]
    fn display_names_the_record() {
        let book = Book::new("Lord of the Rings", 12.0);
        assert_eq!(book.to_string(), "<Book(name=\"Lord of the Rings\")>");
        assert_eq!(
            book.into_transaction().to_string(),
            "<Transaction(name=\"Lord of the Rings\")>"
        );
    }
}
