//! Shared test utilities used across randgraph crates.

pub mod tracing {
    //! A `tracing` layer that keeps every event and closed span in memory so
    //! tests can assert on the diagnostics a code path produced.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Field map captured from an event or span, keyed by field name.
    pub type Fields = BTreeMap<String, String>;

    /// A captured event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Module path target of the event.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: Fields,
    }

    impl EventRecord {
        /// Returns the event's `message` field, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    /// A span captured when it closed.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Name from the span metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: Fields,
    }

    #[derive(Default)]
    struct Store {
        events: Vec<EventRecord>,
        spans: Vec<SpanRecord>,
    }

    /// In-memory recording layer. Clones share the same store.
    ///
    /// # Examples
    /// ```
    /// use randgraph_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(answer = 42, "hello");
    /// });
    /// assert_eq!(layer.events()[0].message(), Some("hello"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        store: Arc<Mutex<Store>>,
    }

    impl RecordingLayer {
        fn lock(&self) -> MutexGuard<'_, Store> {
            self.store.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Snapshot of recorded events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Snapshot of closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Events emitted at exactly `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.lock()
                .events
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }

        /// First closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.lock()
                .spans
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }
    }

    struct PendingSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = Fields::new();
            attrs.record(&mut FieldCollector(&mut fields));
            span.extensions_mut().insert(PendingSpan(SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields,
            }));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(pending) = span.extensions_mut().get_mut::<PendingSpan>() {
                values.record(&mut FieldCollector(&mut pending.0.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
                self.lock().spans.push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldCollector(&mut fields));
            let metadata = event.metadata();
            self.lock().events.push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut Fields);

    impl Visit for FieldCollector<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }
    }
}

pub mod ci;
