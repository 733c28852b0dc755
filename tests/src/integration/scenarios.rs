//! # Worked Scenarios
//!
//! The canonical walk-throughs over the default seed
//! (Alice = [10, 5, 3], Bob = [8, 4]), one test each.

#[cfg(test)]
mod tests {
    use super::super::{coins, default_ledger, live, prepared, values};
    use utxo_ledger::{
        Address, Amount, LedgerError, SelectOutcome, SelectionSession, SessionPhase, UtxoId,
        ValidationError,
    };

    // =========================================================================
    // SCENARIO 1: Successful payment with change
    // =========================================================================

    #[test]
    fn test_scenario_1_payment_with_change() {
        let mut ledger = default_ledger();
        let mut session = prepared(&ledger, &[1, 2], Address::Bob, "6");

        let tx = ledger.submit(&mut session).unwrap();

        assert_eq!(tx.recipient_output().owner(), Address::Bob);
        assert_eq!(tx.recipient_output().value(), coins(6));
        assert_eq!(tx.change_output().owner(), Address::Alice);
        assert_eq!(tx.change_output().value(), coins(9));

        assert_eq!(values(ledger.unspent(Address::Alice)), vec![coins(3), coins(9)]);
        assert_eq!(
            values(ledger.unspent(Address::Bob)),
            vec![coins(8), coins(4), coins(6)]
        );
        assert_eq!(ledger.history().len(), 1);
        assert!(session.is_idle());
    }

    // =========================================================================
    // SCENARIO 2: Amount equal to the selected total
    // =========================================================================

    #[test]
    fn test_scenario_2_amount_equal_to_total() {
        let mut ledger = default_ledger();
        let mut session = prepared(&ledger, &[1, 2], Address::Bob, "15");
        let alice_before = ledger.unspent(Address::Alice).to_vec();
        let bob_before = ledger.unspent(Address::Bob).to_vec();

        let result = ledger.submit(&mut session);

        assert_eq!(
            result,
            Err(LedgerError::Validation(ValidationError::InsufficientFunds {
                amount: coins(15),
                available: coins(15),
            }))
        );
        assert_eq!(ledger.unspent(Address::Alice), alice_before.as_slice());
        assert_eq!(ledger.unspent(Address::Bob), bob_before.as_slice());
        assert!(ledger.history().is_empty());
        assert_eq!(session.phase(), SessionPhase::ReadyToSend);
    }

    // =========================================================================
    // SCENARIO 3: Change below the minimum
    // =========================================================================

    #[test]
    fn test_scenario_3_change_below_minimum() {
        let mut ledger = default_ledger();
        let mut session = prepared(&ledger, &[1, 2], Address::Bob, "14.9995");

        let result = ledger.submit(&mut session);

        assert_eq!(
            result,
            Err(LedgerError::Validation(ValidationError::BelowMinimumChange {
                change: Amount::from_units(50_000),
                minimum: Amount::from_units(100_000),
            }))
        );
        assert!(ledger.history().is_empty());
        assert_eq!(ledger.balance(Address::Alice), coins(18));
    }

    // =========================================================================
    // SCENARIO 4: Cross-address click is ignored
    // =========================================================================

    #[test]
    fn test_scenario_4_other_address_ignored() {
        let ledger = default_ledger();
        let mut session = SelectionSession::new();

        assert_eq!(session.select(&live(&ledger, 1)), SelectOutcome::Selected);
        let before = session.clone();

        assert_eq!(session.select(&live(&ledger, 4)), SelectOutcome::Ignored);

        assert_eq!(session, before);
        assert_eq!(session.sender(), Some(Address::Alice));
        assert_eq!(session.input_ids(), vec![UtxoId(1)]);
        assert!(!session.is_selectable(&live(&ledger, 4)));
    }

    // =========================================================================
    // SCENARIO 5: Second session over an already spent input
    // =========================================================================

    #[test]
    fn test_scenario_5_overlapping_sessions() {
        let mut ledger = default_ledger();
        let mut first = prepared(&ledger, &[1, 2], Address::Bob, "6");
        let mut second = prepared(&ledger, &[2, 3], Address::Bob, "1");

        ledger.submit(&mut first).unwrap();
        let store_before = ledger.store().clone();
        let second_before = second.clone();

        let result = ledger.submit(&mut second);

        assert_eq!(
            result,
            Err(LedgerError::StaleSelection {
                utxo_id: UtxoId(2)
            })
        );
        assert_eq!(ledger.store(), &store_before);
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(second, second_before);

        // Recovering: rebuild the selection from what is live now
        second.reset();
        second.select(&live(&ledger, 3));
        second.choose_recipient(Address::Bob);
        second.set_amount("1");
        assert!(ledger.submit(&mut second).is_ok());
    }

    // =========================================================================
    // SCENARIO 6: Deselecting the only input
    // =========================================================================

    #[test]
    fn test_scenario_6_deselect_last_input() {
        let ledger = default_ledger();
        let utxo = live(&ledger, 5);
        let mut session = SelectionSession::new();

        session.select(&utxo);
        session.choose_recipient(Address::Alice);
        session.set_amount("2");
        assert_eq!(session.phase(), SessionPhase::ReadyToSend);

        assert_eq!(session.select(&utxo), SelectOutcome::Cleared);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.recipient(), None);
        assert_eq!(session.amount_text(), "");
        assert_eq!(session, SelectionSession::new());
    }

    // =========================================================================
    // Follow-up flows
    // =========================================================================

    #[test]
    fn test_change_output_can_be_spent_again() {
        let mut ledger = default_ledger();
        let mut session = prepared(&ledger, &[1, 2], Address::Bob, "6");
        let tx = ledger.submit(&mut session).unwrap();

        // Alice spends the fresh change (id 7) back to Bob
        let change_id = tx.change_output().id().0;
        let mut session = prepared(&ledger, &[change_id], Address::Bob, "8.999");
        let tx = ledger.submit(&mut session).unwrap();

        assert_eq!(tx.change_output().value(), Amount::from_units(100_000));
        assert_eq!(ledger.balance(Address::Alice), Amount::from_units(300_100_000));
        assert_eq!(ledger.store().total_value(), coins(30));
    }

    #[test]
    fn test_history_lines() {
        let mut ledger = default_ledger();
        let mut session = prepared(&ledger, &[1, 2], Address::Bob, "6");
        ledger.submit(&mut session).unwrap();

        let tx = ledger.history().last().unwrap();
        assert_eq!(
            tx.to_string(),
            "Transaction #1: Address 1 (Alice) → Address 2 (Bob)"
        );
        assert_eq!(tx.recipient_output().to_string(), "UTXO #6 (6 BTC)");
        assert_eq!(tx.change_output().to_string(), "UTXO #7 (9 BTC)");
    }
}
