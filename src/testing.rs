//! Host-side fakes for the DOM, HTTP, timer, and storage capabilities.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use tokio::sync::oneshot;

use crate::dom::{ElementHandle, FormHandle, Notifier};
use crate::error::{StorageError, TransportError};
use crate::net::http::{HttpClient, HttpRequest, HttpResponse};
use crate::net::types::RegistrationForm;
use crate::util::scheduler::Scheduler;
use crate::util::storage::KeyValueStore;

// =============================================================
// DOM
// =============================================================

#[derive(Debug, Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    text: RefCell<String>,
    disabled: Cell<bool>,
    disabled_history: RefCell<Vec<bool>>,
    styles: RefCell<BTreeMap<String, String>>,
}

impl FakeElement {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_classes(classes: &[&str]) -> Rc<Self> {
        let el = Self::default();
        el.classes.borrow_mut().extend(classes.iter().map(|c| (*c).to_owned()));
        Rc::new(el)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn class_name(&self) -> String {
        self.classes().join(" ")
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn disabled_history(&self) -> Vec<bool> {
        self.disabled_history.borrow().clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

impl ElementHandle for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class_name(&self, class_name: &str) {
        *self.classes.borrow_mut() = class_name.split_whitespace().map(str::to_owned).collect();
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.disabled_history.borrow_mut().push(disabled);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles.borrow_mut().insert(property.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    values: RefCell<RegistrationForm>,
    resets: Cell<usize>,
}

impl FakeForm {
    pub fn filled(values: RegistrationForm) -> Rc<Self> {
        Rc::new(Self { values: RefCell::new(values), resets: Cell::new(0) })
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

impl FormHandle for FakeForm {
    fn values(&self) -> RegistrationForm {
        self.values.borrow().clone()
    }

    fn reset(&self) {
        *self.values.borrow_mut() = RegistrationForm::default();
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

// =============================================================
// HTTP
// =============================================================

type Probe = Box<dyn Fn(&HttpRequest)>;

/// Replays queued outcomes in order and records every request.
#[derive(Default)]
pub struct ScriptedHttp {
    outcomes: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    probe: RefCell<Option<Probe>>,
}

impl ScriptedHttp {
    pub fn responding(status: u16, body: &str) -> Rc<Self> {
        let http = Self::default();
        http.push_response(status, body);
        Rc::new(http)
    }

    pub fn failing(message: &str) -> Rc<Self> {
        let http = Self::default();
        http.outcomes.borrow_mut().push_back(Err(TransportError(message.to_owned())));
        Rc::new(http)
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.outcomes.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    /// Run `probe` at the moment a request is sent, before it resolves.
    pub fn set_probe(&self, probe: impl Fn(&HttpRequest) + 'static) {
        *self.probe.borrow_mut() = Some(Box::new(probe));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ScriptedHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(probe) = self.probe.borrow().as_ref() {
            probe(&request);
        }
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}

/// Holds each request open until the test releases it.
pub struct GatedHttp {
    gate: RefCell<Option<oneshot::Receiver<Result<HttpResponse, TransportError>>>>,
    sent: Cell<usize>,
}

impl GatedHttp {
    pub fn new() -> (Rc<Self>, oneshot::Sender<Result<HttpResponse, TransportError>>) {
        let (tx, rx) = oneshot::channel();
        (Rc::new(Self { gate: RefCell::new(Some(rx)), sent: Cell::new(0) }), tx)
    }

    pub fn sent(&self) -> usize {
        self.sent.get()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for GatedHttp {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.set(self.sent.get() + 1);
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(TransportError("gate dropped".to_owned()))),
            None => Err(TransportError("gate already used".to_owned())),
        }
    }
}

// =============================================================
// Timers
// =============================================================

struct PendingTask {
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual clock: tasks run only when the test advances time past them.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    pending: RefCell<Vec<PendingTask>>,
    delays: RefCell<Vec<u32>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Every delay ever scheduled, in order.
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    /// Advance the clock and run every task that has come due, in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| t.due_ms)
                    .map(|(i, _)| i);
                idx.map(|i| pending.remove(i))
            };
            let Some(next) = next else { break };
            self.now_ms.set(next.due_ms);
            (next.task)();
        }
        self.now_ms.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.delays.borrow_mut().push(delay_ms);
        let due_ms = self.now_ms.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push(PendingTask { due_ms, task });
    }
}

// =============================================================
// Storage
// =============================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn unavailable() -> Self {
        Self { values: RefCell::default(), unavailable: true }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.insert(key, value);
        Ok(())
    }
}

// =============================================================
// Logging
// =============================================================

/// Process-wide logger that keeps every formatted record for inspection.
pub struct CaptureLogger {
    records: std::sync::Mutex<Vec<String>>,
}

static CAPTURE: CaptureLogger = CaptureLogger { records: std::sync::Mutex::new(Vec::new()) };

impl CaptureLogger {
    /// Install the capture logger (once per test binary) and return it.
    pub fn install() -> &'static Self {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
        &CAPTURE
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}
