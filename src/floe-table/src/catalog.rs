//! In-memory transaction catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use common_error::{FloeError, FloeResult};

use crate::handle::{TableHandle, TransactionId};
use crate::metadata::{MetadataProvider, TableMetadata};
use crate::spec::PartitionSpec;

/// Catalog of table metadata visible to open transactions.
///
/// Each transaction sees its own metadata map, so an in-flight spec change
/// in one transaction never leaks into the plans of another.
#[derive(Debug, Default)]
pub struct TransactionCatalog {
    transactions: RwLock<HashMap<TransactionId, HashMap<String, TableMetadata>>>,
}

impl TransactionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transaction with no visible tables.
    pub fn begin(&self, transaction: TransactionId) {
        let mut transactions = lock_write(&self.transactions);
        transactions.entry(transaction).or_default();
        debug!("opened {transaction}");
    }

    /// Register table metadata under a transaction.
    ///
    /// The transaction is opened implicitly if it was not begun before.
    pub fn register(
        &self,
        transaction: TransactionId,
        qualified_name: impl Into<String>,
        metadata: TableMetadata,
    ) {
        let qualified_name = qualified_name.into();
        let mut transactions = lock_write(&self.transactions);
        transactions
            .entry(transaction)
            .or_default()
            .insert(qualified_name, metadata);
    }

    /// Close a transaction and drop its metadata.
    pub fn finish(&self, transaction: TransactionId) {
        let mut transactions = lock_write(&self.transactions);
        transactions.remove(&transaction);
        debug!("finished {transaction}");
    }

    /// Fetch table metadata visible to a transaction.
    pub fn metadata(
        &self,
        transaction: TransactionId,
        qualified_name: &str,
    ) -> FloeResult<TableMetadata> {
        let transactions = lock_read(&self.transactions);
        let tables = transactions
            .get(&transaction)
            .ok_or_else(|| FloeError::transaction_not_found(transaction.to_string()))?;
        tables
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| FloeError::table_not_found(qualified_name))
    }
}

impl MetadataProvider for TransactionCatalog {
    fn partition_specs(&self, handle: &TableHandle) -> FloeResult<Vec<PartitionSpec>> {
        let metadata = self.metadata(handle.transaction, &handle.qualified_name())?;
        if metadata.specs.is_empty() {
            return Err(FloeError::metadata(format!(
                "table {} has no partition specs",
                handle.qualified_name()
            )));
        }
        Ok(metadata.specs)
    }
}

fn lock_read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock_write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_core::{ColumnHandle, DataType};

    fn sample_handle(transaction: TransactionId) -> TableHandle {
        TableHandle::new(
            "analytics",
            "events",
            transaction,
            vec![ColumnHandle::new(1, "region", DataType::String)],
        )
    }

    #[test]
    fn test_register_and_fetch() {
        let catalog = TransactionCatalog::new();
        let txn = TransactionId(1);
        catalog.register(
            txn,
            "analytics.events",
            TableMetadata::new(PartitionSpec::unpartitioned(0)),
        );

        let specs = catalog.partition_specs(&sample_handle(txn)).unwrap();
        assert_eq!(specs.len(), 1);
    }

    #[test]
    fn test_unknown_transaction() {
        let catalog = TransactionCatalog::new();
        let err = catalog
            .partition_specs(&sample_handle(TransactionId(42)))
            .unwrap_err();
        assert!(matches!(err, FloeError::TransactionNotFound(_)));
    }

    #[test]
    fn test_unknown_table() {
        let catalog = TransactionCatalog::new();
        let txn = TransactionId(2);
        catalog.begin(txn);
        let err = catalog.partition_specs(&sample_handle(txn)).unwrap_err();
        assert!(matches!(err, FloeError::TableNotFound(_)));
    }

    #[test]
    fn test_transactions_are_isolated() {
        let catalog = TransactionCatalog::new();
        let writer = TransactionId(3);
        let reader = TransactionId(4);
        catalog.register(
            writer,
            "analytics.events",
            TableMetadata::new(PartitionSpec::unpartitioned(0)),
        );
        catalog.begin(reader);

        assert!(catalog.partition_specs(&sample_handle(writer)).is_ok());
        assert!(catalog.partition_specs(&sample_handle(reader)).is_err());
    }

    #[test]
    fn test_finish_drops_metadata() {
        let catalog = TransactionCatalog::new();
        let txn = TransactionId(5);
        catalog.register(
            txn,
            "analytics.events",
            TableMetadata::new(PartitionSpec::unpartitioned(0)),
        );
        catalog.finish(txn);
        assert!(catalog.partition_specs(&sample_handle(txn)).is_err());
    }
}
