//! A `tracing` layer that ships structured events to Quickwit.
//!
//! Events carrying a configured marker field (e.g. `task = "http_request"`)
//! are serialized field-by-field and routed to the Quickwit index mapped to
//! that marker value. Delivery is fire-and-forget: events go over a bounded
//! channel to a background task that batches them and posts NDJSON to the
//! ingest API. If the channel is full or Quickwit is down, events are
//! dropped rather than blocking the caller.

use crate::logging::consts::{DEFAULT_LOG_BATCH_SIZE, INGEST_CHANNEL_CAPACITY};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task;
use tracing::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

pub struct QuickwitLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOG_BATCH_SIZE,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn route(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn build(self) -> QuickwitLayer {
        let (sender, receiver) = mpsc::channel(INGEST_CHANNEL_CAPACITY);
        spawn_shipper(self.quickwit_url, receiver, self.batch_size);
        QuickwitLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLayer {
    sender: mpsc::Sender<RoutedLogLine>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLayer {
    pub fn builder(quickwit_url: Url) -> QuickwitLayerBuilder {
        QuickwitLayerBuilder::new(quickwit_url)
    }

    fn index_for_event(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = MarkerFieldVisitor {
            marker_field: &self.marker_field,
            marker_value: None,
        };
        event.record(&mut visitor);
        let marker_value = visitor.marker_value?;
        self.marker_to_index.get(&marker_value).cloned()
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        if let Some(index_id) = self.index_for_event(event) {
            let mut visitor = FieldCollector {
                fields: Map::new(),
            };
            event.record(&mut visitor);
            // Dropping the line on a full channel is deliberate.
            let _ = self.sender.try_send(RoutedLogLine {
                index_id,
                fields: visitor.fields,
            });
        }
    }
}

struct RoutedLogLine {
    index_id: String,
    fields: Map<String, Value>,
}

fn spawn_shipper(quickwit_url: Url, mut receiver: mpsc::Receiver<RoutedLogLine>, batch_size: usize) {
    let http_client = Client::new();
    task::spawn(async move {
        let mut buffers: HashMap<String, Vec<Map<String, Value>>> = HashMap::new();
        while let Some(line) = receiver.recv().await {
            let buffer = buffers.entry(line.index_id.clone()).or_default();
            buffer.push(line.fields);
            if buffer.len() >= batch_size {
                let batch = std::mem::take(buffer);
                ingest(&http_client, &quickwit_url, &line.index_id, batch).await;
            }
        }
        for (index_id, batch) in buffers {
            if !batch.is_empty() {
                ingest(&http_client, &quickwit_url, &index_id, batch).await;
            }
        }
    });
}

async fn ingest(
    http_client: &Client,
    quickwit_url: &Url,
    index_id: &str,
    batch: Vec<Map<String, Value>>,
) {
    let mut ndjson_body = Vec::new();
    for fields in &batch {
        match serde_json::to_vec(fields) {
            Ok(line) => {
                ndjson_body.extend_from_slice(&line);
                ndjson_body.push(b'\n');
            }
            Err(_) => continue,
        }
    }
    let _response = http_client
        .post(format!("{quickwit_url}api/v1/{index_id}/ingest"))
        .body(ndjson_body)
        .send()
        .await;
}

struct MarkerFieldVisitor<'a> {
    marker_field: &'a str,
    marker_value: Option<String>,
}

impl Visit for MarkerFieldVisitor<'_> {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker_value = Some(value.to_string());
        }
    }
}

struct FieldCollector {
    fields: Map<String, Value>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        // Quickwit's number type is u64.
        self.fields
            .insert(field.name().to_string(), (value as u64).into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}
