//! # Node Runtime Lifecycle
//!
//! Starts a full `NodeRuntime` (console bridge off) and talks to it over
//! its bus.

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::timeout;

    use node_runtime::container::ConsoleConfig;
    use node_runtime::{NodeConfig, NodeRuntime};
    use shared_bus::{BusMessage, EventPublisher, Topic};

    fn headless() -> NodeConfig {
        NodeConfig {
            console: ConsoleConfig { enabled: false },
            ..NodeConfig::default()
        }
    }

    #[tokio::test]
    async fn test_node_serves_until_shutdown() {
        let mut runtime = NodeRuntime::new(headless());
        runtime.start();

        let bus = runtime.bus();
        let mut out = bus.subscribe(Topic::DistanceToEarth);

        for planet in ["Jupiter", "Pluto", "Saturn"] {
            bus.publish(BusMessage::Planet(planet.to_string())).await;
        }

        for expected in [628_400_000, 1_277_400_000] {
            let received = timeout(Duration::from_secs(1), out.recv())
                .await
                .expect("timeout")
                .expect("message");
            assert_eq!(received, BusMessage::DistanceToEarth(expected));
        }

        let snapshot = runtime.shutdown().await;
        assert_eq!(snapshot.requests_handled, 3);
        assert_eq!(snapshot.unknown_planets, 1);
        assert_eq!(snapshot.overflows, 0);
    }

    #[tokio::test]
    async fn test_requests_after_shutdown_go_unanswered() {
        let mut runtime = NodeRuntime::new(headless());
        runtime.start();
        let bus = runtime.bus();
        let mut out = bus.subscribe(Topic::DistanceToEarth);

        let snapshot = runtime.shutdown().await;
        assert_eq!(snapshot.requests_handled, 0);

        // The service's subscription is gone with the adapter
        assert_eq!(bus.subscription_count(Topic::Planet), 0);
        assert_eq!(bus.publish(BusMessage::Planet("Mars".to_string())).await, 0);
        assert_eq!(out.try_recv(), Ok(None));
    }

    #[tokio::test]
    async fn test_fresh_node_has_fresh_counters() {
        for _ in 0..2 {
            let mut runtime = NodeRuntime::new(headless());
            runtime.start();
            let bus = runtime.bus();
            let mut out = bus.subscribe(Topic::DistanceToEarth);

            bus.publish(BusMessage::Planet("Uranus".to_string())).await;
            let received = timeout(Duration::from_secs(1), out.recv())
                .await
                .expect("timeout");
            assert_eq!(received, Some(BusMessage::DistanceToEarth(-1_573_567_296)));

            let snapshot = runtime.shutdown().await;
            assert_eq!(snapshot.requests_handled, 1);
            assert_eq!(snapshot.overflows, 1);
        }
    }
}
