use chrono::{DateTime, Utc};
use entity::prelude::{TransactionStatus, TransactionType, Wallet, WalletTransaction};
use tokio::sync::RwLockWriteGuard;

use crate::server::data::{table::next_id, MemoryDb};

/// Write access to the wallet balance and its transaction history at once.
pub struct WalletLedger<'a> {
    pub wallet: RwLockWriteGuard<'a, Wallet>,
    pub transactions: RwLockWriteGuard<'a, Vec<WalletTransaction>>,
}

impl WalletLedger<'_> {
    /// Record a completed transaction and return a copy of it
    pub fn record(
        &mut self,
        kind: TransactionType,
        amount: f64,
        description: String,
        campaign_name: String,
        now: DateTime<Utc>,
    ) -> WalletTransaction {
        let transaction = WalletTransaction {
            id: next_id(&self.transactions),
            kind,
            amount,
            description,
            campaign_name,
            status: TransactionStatus::Completed,
            timestamp: now,
        };
        self.transactions.push(transaction.clone());

        transaction
    }
}

pub struct WalletRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> WalletRepository<'a> {
    /// Creates a new instance of [`WalletRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get_wallet(&self) -> Wallet {
        self.db.wallet.read().await.clone()
    }

    /// Transaction history, newest first
    pub async fn get_transactions(&self) -> Vec<WalletTransaction> {
        let mut transactions = self.db.transactions.all().await;
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

        transactions
    }

    /// Lock the balance and the history for a change touching both
    pub async fn ledger(&self) -> WalletLedger<'a> {
        let db: &'a MemoryDb = self.db;

        let wallet = db.wallet.write().await;
        let transactions = db.transactions.write().await;

        WalletLedger {
            wallet,
            transactions,
        }
    }
}
