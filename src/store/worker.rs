//! Hintergrund-Thread für Remote-Requests.
//!
//! Der UI-Thread übergibt Requests per Channel und holt Completions einmal pro
//! Frame nicht-blockierend ab. Requests werden in Übergabereihenfolge
//! ausgeführt; Abbruch oder Timeout gibt es nur über den Store selbst.

use super::{execute, MarkerStore, RemoteCompletion, RemoteRequest};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Callback, der nach jeder Completion aufgerufen wird (z.B. Repaint anfordern).
pub type Waker = Box<dyn Fn() + Send + 'static>;

/// Führt Remote-Requests in einem eigenen Thread aus.
pub struct RemoteWorker {
    requests: Option<mpsc::Sender<RemoteRequest>>,
    completions: mpsc::Receiver<RemoteCompletion>,
    handle: Option<JoinHandle<()>>,
    backend_name: &'static str,
}

impl RemoteWorker {
    /// Startet den Worker-Thread für den angegebenen Store.
    pub fn spawn(store: Arc<dyn MarkerStore>, waker: Option<Waker>) -> anyhow::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<RemoteRequest>();
        let (completion_tx, completion_rx) = mpsc::channel::<RemoteCompletion>();
        let backend_name = store.backend_name();

        let handle = std::thread::Builder::new()
            .name("remote-store".to_string())
            .spawn(move || {
                for request in request_rx {
                    let ticket = request.ticket;
                    let completion = execute(store.as_ref(), request);
                    if completion_tx.send(completion).is_err() {
                        log::debug!("Completion für Ticket {} verworfen (UI beendet)", ticket);
                        break;
                    }
                    if let Some(waker) = waker.as_ref() {
                        waker();
                    }
                }
                log::debug!("Remote-Worker beendet");
            })?;

        log::info!("Remote-Worker gestartet (Backend: {})", backend_name);

        Ok(Self {
            requests: Some(request_tx),
            completions: completion_rx,
            handle: Some(handle),
            backend_name,
        })
    }

    /// Kurzname des Store-Backends.
    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    /// Übergibt Requests an den Worker. Gibt die Anzahl übergebener Requests zurück.
    pub fn submit_all(&self, requests: impl IntoIterator<Item = RemoteRequest>) -> usize {
        let Some(sender) = self.requests.as_ref() else {
            log::error!("Remote-Worker bereits beendet, Requests verworfen");
            return 0;
        };

        let mut submitted = 0;
        for request in requests {
            let ticket = request.ticket;
            if sender.send(request).is_err() {
                log::error!("Remote-Worker nicht erreichbar, Ticket {} verworfen", ticket);
                break;
            }
            submitted += 1;
        }
        submitted
    }

    /// Holt alle bereits vorliegenden Completions ab, ohne zu blockieren.
    pub fn drain(&self) -> Vec<RemoteCompletion> {
        self.completions.try_iter().collect()
    }

    /// Wartet höchstens `timeout` auf die nächste Completion.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RemoteCompletion> {
        self.completions.recv_timeout(timeout).ok()
    }

    /// Schließt den Request-Channel und wartet auf das Thread-Ende.
    pub fn shutdown(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Remote-Worker-Thread ist in Panik beendet worden");
            }
        }
    }
}

impl Drop for RemoteWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
