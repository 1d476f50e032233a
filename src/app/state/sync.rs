use crate::store::{RemoteOp, RemoteRequest};
use std::collections::BTreeMap;

/// Outbox für Remote-Requests und Buchhaltung über laufende Tickets.
///
/// Use-Cases reihen Operationen nur ein; der Host leert die Outbox einmal pro
/// Frame in den `RemoteWorker`. Completions werden über ihr Ticket abgehakt.
#[derive(Debug, Default)]
pub struct SyncQueue {
    outbox: Vec<RemoteRequest>,
    in_flight: BTreeMap<u64, &'static str>,
    next_ticket: u64,
    failed_requests: u64,
}

impl SyncQueue {
    /// Erstellt eine leere Outbox.
    pub fn new() -> Self {
        Self {
            next_ticket: 1,
            ..Self::default()
        }
    }

    /// Reiht eine Operation ein und liefert ihr Ticket.
    pub fn enqueue(&mut self, op: RemoteOp) -> u64 {
        let ticket = self.next_ticket.max(1);
        self.next_ticket = ticket + 1;
        log::debug!("Remote-Request #{} eingereiht: {}", ticket, op.label());
        self.in_flight.insert(ticket, op.label());
        self.outbox.push(RemoteRequest { ticket, op });
        ticket
    }

    /// Entnimmt alle noch nicht abgeschickten Requests.
    pub fn take_outbox(&mut self) -> Vec<RemoteRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Noch nicht abgeschickte Requests.
    pub fn outbox(&self) -> &[RemoteRequest] {
        &self.outbox
    }

    /// Hakt ein Ticket ab. Unbekannte Tickets werden nur geloggt.
    pub fn complete(&mut self, ticket: u64, success: bool) {
        if self.in_flight.remove(&ticket).is_none() {
            log::warn!("Completion für unbekanntes Ticket #{}", ticket);
        }
        if !success {
            self.failed_requests += 1;
        }
    }

    /// Anzahl eingereihter oder laufender Requests.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Anzahl fehlgeschlagener Requests seit Start.
    pub fn failed_requests(&self) -> u64 {
        self.failed_requests
    }
}
