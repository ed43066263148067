use crate::config::UiConfig;
use crate::counter::{select_count, CounterIntent, CounterReducer, FEATURE_KEY};
use crate::store::{FeatureHandle, Store, StoreError, Subscription};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use parking_lot::Mutex;
use std::sync::Arc;

/// Display adapter for the counter slice.
///
/// Mirrors the selected count through a store subscription and turns key
/// presses into dispatched intents. It never writes the count itself.
pub struct App {
    should_quit: bool,
    title: String,
    counter: FeatureHandle<CounterReducer>,
    count: Arc<Mutex<i64>>,
    _subscription: Subscription,
}

impl App {
    pub fn new(store: &Store, config: &UiConfig) -> Result<Self, StoreError> {
        let counter = store.feature::<CounterReducer>(FEATURE_KEY)?;
        let count = Arc::new(Mutex::new(0));
        let mirror = Arc::clone(&count);
        let subscription = counter.subscribe(select_count, move |value: &i64| {
            *mirror.lock() = *value;
        });

        Ok(Self {
            should_quit: false,
            title: config.title.clone(),
            counter,
            count,
            _subscription: subscription,
        })
    }

    pub fn count(&self) -> i64 {
        *self.count.lock()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn increment(&self) {
        self.counter.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.counter.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&self) {
        self.counter.dispatch(CounterIntent::Reset);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Windows reports releases too
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit()
            }
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
                self.increment()
            }
            KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => self.decrement(),
            KeyCode::Char('r') | KeyCode::Char('0') => self.reset(),
            _ => {}
        }
    }
}
