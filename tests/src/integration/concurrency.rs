//! # Concurrency Tests
//!
//! Several threads drive one `LedgerService` at once. Whatever the
//! interleaving, readers must only ever see whole transactions.

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::thread;
    use utxo_ledger::domain::invariants::{
        invariant_no_double_spend, invariant_sequential_history, invariant_unique_ids,
        invariant_value_conservation,
    };
    use utxo_ledger::{Address, Amount, LedgerApi, LedgerService, Transaction};

    const WRITERS: usize = 4;
    const ROUNDS: usize = 50;

    /// Try to pay 1 from the richest output of `from`.
    fn pay_one(service: &LedgerService, from: Address, to: Address) -> Option<Transaction> {
        let utxo = service
            .unspent(from)
            .into_iter()
            .max_by_key(|u| u.value())?;
        service.select(&utxo);
        service.choose_recipient(to);
        service.set_amount("1");
        let result = service.submit();
        if result.is_err() {
            service.reset();
        }
        result.ok()
    }

    #[test]
    fn test_parallel_writers_and_readers() {
        let service = Arc::new(LedgerService::with_defaults().unwrap());
        let applied = Arc::new(Mutex::new(Vec::new()));

        thread::scope(|scope| {
            for i in 0..WRITERS {
                let service = Arc::clone(&service);
                let applied = Arc::clone(&applied);
                let (from, to) = if i % 2 == 0 {
                    (Address::Alice, Address::Bob)
                } else {
                    (Address::Bob, Address::Alice)
                };
                scope.spawn(move || {
                    for _ in 0..ROUNDS {
                        if let Some(tx) = pay_one(&service, from, to) {
                            applied.lock().push(tx);
                        }
                    }
                });
            }

            // Reader: totals and history must always agree with each other
            let service = Arc::clone(&service);
            scope.spawn(move || {
                for _ in 0..ROUNDS * WRITERS {
                    service.read(|ledger| {
                        assert_eq!(ledger.store().total_value(), Amount::from_coins(30).unwrap());
                        assert!(invariant_no_double_spend(ledger.store(), ledger.history()));
                    });
                }
            });
        });

        let applied = applied.lock();
        let history = service.history();

        // Every success reported to a caller is in history exactly once
        assert_eq!(history.len(), applied.len());
        for tx in applied.iter() {
            assert!(history.contains(tx));
            assert!(invariant_value_conservation(tx));
        }

        service.read(|ledger| {
            assert!(invariant_unique_ids(ledger.store(), ledger.history()));
            assert!(invariant_sequential_history(ledger.history()));
        });
        let total = service.balance(Address::Alice).units() + service.balance(Address::Bob).units();
        assert_eq!(total, Amount::from_coins(30).unwrap().units());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_blocking_tasks_share_service() {
        let service = Arc::new(LedgerService::with_defaults().unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::task::spawn_blocking(move || {
                    let (from, to) = if i % 2 == 0 {
                        (Address::Alice, Address::Bob)
                    } else {
                        (Address::Bob, Address::Alice)
                    };
                    pay_one(&service, from, to).is_some()
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(service.history().len(), successes);
        service.read(|ledger| {
            assert_eq!(ledger.store().total_value(), ledger.genesis_total());
        });
    }
}
