//! # Console Bridge
//!
//! Lets an operator talk to the node from a terminal:
//! - each non-empty stdin line is published on `planet`
//! - each `distanceToEarth` message is printed as `distanceToEarth: <value>`
//!
//! Lines are forwarded verbatim apart from the line terminator, so the
//! service sees exactly what was typed.

use std::io::BufRead;
use std::sync::Arc;

use shared_bus::{BusMessage, EventPublisher, InMemoryEventBus, Subscription, Topic};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Lines buffered between the stdin thread and the publisher task.
const LINE_BUFFER: usize = 16;

/// Strip the line terminator and drop empty lines.
pub fn planet_from_line(line: &str) -> Option<&str> {
    let name = line.strip_suffix('\n').unwrap_or(line);
    let name = name.strip_suffix('\r').unwrap_or(name);
    (!name.is_empty()).then_some(name)
}

/// Render one output message the way the bridge prints it.
pub fn format_distance(value: i32) -> String {
    format!("{}: {value}", Topic::DistanceToEarth)
}

/// Spawn the stdin → `planet` half of the bridge.
///
/// Reading happens on a plain OS thread so that a pending read never holds
/// up runtime shutdown.
pub fn spawn_stdin_bridge(
    bus: Arc<InMemoryEventBus>,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let (line_tx, line_rx) = mpsc::channel(LINE_BUFFER);

    std::thread::spawn(move || read_lines(std::io::stdin().lock(), &line_tx));

    tokio::spawn(forward_lines(bus, line_rx, shutdown))
}

/// Blocking read loop feeding `line_tx` until EOF, a read error, or the
/// receiving side goes away.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the loop,
/// so one bad line cannot shut off console input.
fn read_lines<R: BufRead>(mut reader: R, line_tx: &mpsc::Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "stdin read failed, console input stopped");
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        if line_tx.blocking_send(line).is_err() {
            break;
        }
    }
}

/// Publish every usable line from `lines` on the `planet` topic.
pub async fn forward_lines(
    bus: Arc<InMemoryEventBus>,
    mut lines: mpsc::Receiver<String>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("stdin closed, console input stopped");
                    break;
                };
                if let Some(planet) = planet_from_line(&line) {
                    debug!(planet = ?planet, "Forwarding console input");
                    bus.publish(BusMessage::Planet(planet.to_string())).await;
                }
            }
        }
    }
}

/// Spawn the `distanceToEarth` → stdout half of the bridge.
pub fn spawn_stdout_bridge(
    bus: &InMemoryEventBus,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let subscription = bus.subscribe(Topic::DistanceToEarth);
    tokio::spawn(echo_distances(subscription, shutdown))
}

async fn echo_distances(mut subscription: Subscription, mut shutdown: watch::Receiver<bool>) {
    loop {
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            message = subscription.recv() => match message {
                Some(BusMessage::DistanceToEarth(value)) => println!("{}", format_distance(value)),
                Some(_) => {}
                None => break,
            },
        }
    }
}
