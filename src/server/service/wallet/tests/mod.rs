mod deposit;
mod earning;
mod payout;

use entity::prelude::TransactionType;
use influencehub_test_utils::prelude::*;

use super::*;

/// A wallet with `available` dollars and two historic transactions
fn funded_wallet(available: f64) -> TestBuilder {
    TestBuilder::new()
        .with_wallet(factory::wallet(available))
        .with_transaction(factory::transaction(1, TransactionType::Earning, 80.0))
        .with_transaction(factory::transaction(2, TransactionType::Bonus, 20.0))
}
