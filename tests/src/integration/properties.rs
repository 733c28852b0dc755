//! # Property Tests
//!
//! Random sequences of submits, valid and invalid, against the default seed.
//! After every step the ledger must still conserve value, never reuse an id,
//! never resurrect a spent output, and leave no trace of a rejected submit.

#[cfg(test)]
mod tests {
    use super::super::default_ledger;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use utxo_ledger::domain::invariants::{
        invariant_no_double_spend, invariant_sequential_history, invariant_total_preserved,
        invariant_unique_ids, invariant_value_conservation,
    };
    use utxo_ledger::{validate, Address, Amount, Ledger, SelectionSession, UtxoId};

    /// One attempted payment.
    #[derive(Debug, Clone)]
    struct Step {
        from_alice: bool,
        /// Bit i selects the sender's i-th unspent output
        mask: u8,
        amount: AmountInput,
        /// Build the selection from the ledger as it was one step earlier
        stale: bool,
    }

    #[derive(Debug, Clone)]
    enum AmountInput {
        Units(u64),
        Text(String),
    }

    impl AmountInput {
        fn text(&self) -> String {
            match self {
                AmountInput::Units(units) => Amount::from_units(*units).to_string(),
                AmountInput::Text(text) => text.clone(),
            }
        }
    }

    fn amount_input() -> impl Strategy<Value = AmountInput> {
        prop_oneof![
            4 => (0u64..3_100_000_000).prop_map(AmountInput::Units),
            1 => prop_oneof![
                Just(String::new()),
                Just("-1".to_string()),
                Just("1e3".to_string()),
                Just("0.000000001".to_string()),
                "[0-9]{0,3}(\\.[0-9]{0,9})?",
            ]
            .prop_map(AmountInput::Text),
        ]
    }

    fn step() -> impl Strategy<Value = Step> {
        (any::<bool>(), any::<u8>(), amount_input(), prop::bool::weighted(0.2)).prop_map(
            |(from_alice, mask, amount, stale)| Step {
                from_alice,
                mask,
                amount,
                stale,
            },
        )
    }

    fn session_for(ledger: &Ledger, step: &Step) -> SelectionSession {
        let (from, to) = if step.from_alice {
            (Address::Alice, Address::Bob)
        } else {
            (Address::Bob, Address::Alice)
        };

        let mut session = SelectionSession::new();
        for (i, utxo) in ledger.unspent(from).iter().enumerate().take(8) {
            if step.mask & (1 << i) != 0 {
                session.select(utxo);
            }
        }
        session.choose_recipient(to);
        session.set_amount(step.amount.text());
        session
    }

    fn assert_invariants(ledger: &Ledger) -> Result<(), TestCaseError> {
        let store = ledger.store();
        let history = ledger.history();
        prop_assert!(invariant_unique_ids(store, history));
        prop_assert!(invariant_no_double_spend(store, history));
        prop_assert!(invariant_sequential_history(history));
        prop_assert!(invariant_total_preserved(store, ledger.genesis_total()));
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_random_payments_keep_invariants(steps in prop::collection::vec(step(), 1..25)) {
            let mut ledger = default_ledger();
            let mut previous = ledger.clone();
            let mut consumed: HashSet<UtxoId> = HashSet::new();
            let mut highest = ledger.store().iter().map(|u| u.id()).max();

            for step in &steps {
                let source = if step.stale { &previous } else { &ledger };
                let mut session = session_for(source, step);
                let session_before = session.clone();
                let before = ledger.clone();

                match ledger.submit(&mut session) {
                    Ok(tx) => {
                        // Value conservation
                        prop_assert!(invariant_value_conservation(&tx));
                        prop_assert_eq!(tx.input_total(), tx.output_total());

                        // Fresh ids, increasing in creation order
                        let [sent, change] = &tx.outputs;
                        prop_assert!(highest.map_or(true, |h| sent.id() > h));
                        prop_assert!(change.id() > sent.id());
                        highest = Some(change.id());

                        for input in &tx.inputs {
                            prop_assert!(consumed.insert(input.id()));
                        }
                        prop_assert!(session.is_idle());
                        previous = before;
                    }
                    Err(_) => {
                        // Atomicity: nothing moved
                        prop_assert_eq!(ledger.store(), before.store());
                        prop_assert_eq!(ledger.history(), before.history());
                        prop_assert_eq!(session, session_before);
                    }
                }

                // No double spend: consumed ids never come back
                for address in Address::ALL {
                    for utxo in ledger.unspent(address) {
                        prop_assert!(!consumed.contains(&utxo.id()));
                    }
                }
                assert_invariants(&ledger)?;
            }
        }

        #[test]
        fn prop_validation_is_idempotent(
            total in 0u64..5_000_000_000,
            text in "[-+]?[0-9]{0,4}(\\.[0-9]{0,10})?",
        ) {
            let total = Amount::from_units(total);
            prop_assert_eq!(validate(total, &text), validate(total, &text));
        }

        #[test]
        fn prop_accepted_amount_leaves_minimum_change(
            total in 0u64..5_000_000_000,
            units in 0u64..5_000_000_000,
        ) {
            let total = Amount::from_units(total);
            let text = Amount::from_units(units).to_string();

            if let Ok(amount) = validate(total, &text) {
                prop_assert_eq!(amount, Amount::from_units(units));
                prop_assert!(!amount.is_zero());
                prop_assert!(total.units() - amount.units() >= 100_000);
            }
        }
    }
}
