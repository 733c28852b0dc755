//! Scripted driver standing in for the visual front end.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use utxo_ledger::{
    Address, BroadcastObserver, Ledger, LedgerApi, LedgerEvent, LedgerService, SelectOutcome,
    UtxoId,
};

use crate::cooldown::Cooldown;
use crate::script::ScriptCommand;

/// Outcome counts of one script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Transactions applied
    pub applied: usize,
    /// Submits rejected by validation or reconciliation
    pub rejected: usize,
    /// Selection commands the session ignored
    pub ignored: usize,
    /// Select commands naming an output that is not live
    pub unknown_utxos: Vec<UtxoId>,
}

/// The ledger service plus presentation-side state.
pub struct LedgerRuntime {
    service: Arc<LedgerService>,
    events: Arc<BroadcastObserver>,
    cooldown: Cooldown,
}

impl LedgerRuntime {
    pub fn new(ledger: Ledger, cooldown: Duration) -> Self {
        let events = Arc::new(BroadcastObserver::default());
        let service = Arc::new(LedgerService::new(ledger).with_observer(events.clone()));
        Self {
            service,
            events,
            cooldown: Cooldown::new(cooldown),
        }
    }

    pub fn service(&self) -> Arc<LedgerService> {
        Arc::clone(&self.service)
    }

    /// Completion events for transactions applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Execute `script` in order.
    ///
    /// Session commands wait out the cooldown left by the previous successful
    /// submit; balance queries run immediately.
    pub async fn run(&mut self, script: &[ScriptCommand]) -> RunReport {
        let mut report = RunReport::default();

        for command in script {
            if command.is_session_command() && self.cooldown.is_active() {
                debug!(remaining_ms = self.cooldown.remaining().as_millis() as u64, "Waiting for cooldown");
                self.cooldown.wait().await;
            }
            self.execute(command, &mut report);
        }

        info!(
            applied = report.applied,
            rejected = report.rejected,
            ignored = report.ignored,
            unknown = report.unknown_utxos.len(),
            "Script finished"
        );
        report
    }

    fn execute(&mut self, command: &ScriptCommand, report: &mut RunReport) {
        match command {
            ScriptCommand::Select { utxo } => match self.service.find_unspent(*utxo) {
                Some(found) => {
                    if self.service.select(&found) == SelectOutcome::Ignored {
                        report.ignored += 1;
                    }
                }
                None => {
                    warn!(utxo_id = %utxo, "No unspent output with this id");
                    report.unknown_utxos.push(*utxo);
                }
            },
            ScriptCommand::ChooseRecipient { address } => {
                if !self.service.choose_recipient(*address) {
                    report.ignored += 1;
                }
            }
            ScriptCommand::SetAmount { amount } => {
                if !self.service.set_amount(amount) {
                    debug!(amount = %amount, "Amount ignored without a selection");
                    report.ignored += 1;
                }
            }
            ScriptCommand::Submit => match self.service.submit() {
                Ok(_) => {
                    report.applied += 1;
                    self.cooldown.engage();
                }
                Err(_) => report.rejected += 1,
            },
            ScriptCommand::Reset => self.service.reset(),
            ScriptCommand::Balances => self.log_balances(),
        }
    }

    pub fn log_balances(&self) {
        for address in Address::ALL {
            let unspent = self.service.unspent(address);
            let outputs: Vec<String> = unspent.iter().map(ToString::to_string).collect();
            info!(
                address = %address,
                balance = %self.service.balance(address),
                outputs = %outputs.join(", "),
                "Balance"
            );
        }
    }

    pub fn log_history(&self) {
        let history = self.service.history();
        if history.is_empty() {
            info!("No transactions yet");
        }
        for tx in history {
            let inputs: Vec<String> = tx.inputs.iter().map(ToString::to_string).collect();
            let outputs: Vec<String> = tx.outputs.iter().map(ToString::to_string).collect();
            info!(
                inputs = %inputs.join(", "),
                outputs = %outputs.join(", "),
                "{tx}"
            );
        }
    }
}

/// Log every completion event until the channel closes.
pub fn spawn_event_logger(mut events: broadcast::Receiver<LedgerEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(LedgerEvent::TransactionCompleted { transaction, flow }) => {
                    info!(
                        tx_id = %transaction.id,
                        total = %flow.total,
                        amount = %flow.amount,
                        change = %flow.change,
                        "Transfer complete: {} → {}",
                        transaction.from,
                        transaction.to
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event logger fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
