//! # Integration Test Flows
//!
//! Drives `PlanetDistanceService` through the shared bus the same way the
//! node does: names published on `planet`, answers read from
//! `distanceToEarth`.
//!
//! ## Flows Tested:
//!
//! 1. **Known planets**: one response each, exact or truncated
//! 2. **Unknown names**: no response, later requests unaffected
//! 3. **Queue depth**: a backlog beyond capacity drops the oldest requests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::watch;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    use shared_bus::{BusMessage, EventPublisher, InMemoryEventBus, Subscription, Topic};

    use planet_distance::{
        BusDistancePublisher, DistanceError, Metrics, PlanetDistanceApi,
        PlanetDistanceBusAdapter, PlanetDistanceService,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type BusService = PlanetDistanceService<BusDistancePublisher>;

    struct Harness {
        bus: Arc<InMemoryEventBus>,
        out: Subscription,
        metrics: Arc<Metrics>,
        shutdown_tx: watch::Sender<bool>,
        task: Option<JoinHandle<()>>,
        adapter: Option<PlanetDistanceBusAdapter<BusService>>,
    }

    impl Harness {
        /// Wire the service to a fresh bus without starting the loop
        fn new(capacity: usize) -> Self {
            let bus = Arc::new(InMemoryEventBus::with_capacity(capacity));
            let out = bus.subscribe(Topic::DistanceToEarth);
            let metrics = Arc::new(Metrics::new());
            let publisher = Arc::new(BusDistancePublisher::new(bus.clone()));
            let service = Arc::new(PlanetDistanceService::with_metrics(
                publisher,
                metrics.clone(),
            ));
            let adapter = PlanetDistanceBusAdapter::new(&bus, service);
            let (shutdown_tx, _) = watch::channel(false);

            Self {
                bus,
                out,
                metrics,
                shutdown_tx,
                task: None,
                adapter: Some(adapter),
            }
        }

        fn start(&mut self) {
            let adapter = self.adapter.take().expect("already started");
            self.task = Some(tokio::spawn(adapter.run(self.shutdown_tx.subscribe())));
        }

        async fn request(&self, planet: &str) {
            self.bus.publish(BusMessage::Planet(planet.to_string())).await;
        }

        async fn next_distance(&mut self) -> i32 {
            match timeout(Duration::from_secs(1), self.out.recv()).await {
                Ok(Some(BusMessage::DistanceToEarth(value))) => value,
                other => panic!("expected a distance, got {other:?}"),
            }
        }

        /// Stop the loop and return whatever is still queued on the output
        async fn stop(mut self) -> Vec<i32> {
            self.shutdown_tx.send(true).expect("adapter alive");
            if let Some(task) = self.task.take() {
                timeout(Duration::from_secs(1), task)
                    .await
                    .expect("timeout")
                    .expect("join");
            }
            let mut rest = Vec::new();
            while let Ok(Some(BusMessage::DistanceToEarth(value))) = self.out.try_recv() {
                rest.push(value);
            }
            rest
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: PLANET → DISTANCE
    // =============================================================================

    #[tokio::test]
    async fn test_every_planet_round_trip() {
        let mut harness = Harness::new(10);
        harness.start();

        let expected = [
            ("Mercury", 91_600_000),
            ("Venus", 41_400_000),
            ("Earth", 0),
            ("Mars", 78_300_000),
            ("Jupiter", 628_400_000),
            ("Saturn", 1_277_400_000),
            ("Uranus", 2_721_400_000_i64 as i32),
            ("Neptune", 4_347_400_000_i64 as i32),
        ];

        for (planet, value) in expected {
            harness.request(planet).await;
            assert_eq!(harness.next_distance().await, value, "{planet}");
        }

        let metrics = harness.metrics.clone();
        assert!(harness.stop().await.is_empty());

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.responses_published, 8);
        assert_eq!(snapshot.overflows, 2);
    }

    #[tokio::test]
    async fn test_overflow_values_are_truncated_not_clamped() {
        let mut harness = Harness::new(10);
        harness.start();

        harness.request("Uranus").await;
        harness.request("Neptune").await;

        assert_eq!(harness.next_distance().await, -1_573_567_296);
        assert_eq!(harness.next_distance().await, 52_432_704);
        assert!(harness.stop().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_names_are_silently_dropped() {
        let mut harness = Harness::new(10);
        harness.start();

        for name in ["Pluto", "", "earth", "Sun", "Mars "] {
            harness.request(name).await;
        }
        harness.request("Mars").await;

        // The only answer is for the sentinel
        assert_eq!(harness.next_distance().await, 78_300_000);
        assert_eq!(harness.metrics.snapshot().unknown_planets, 5);
        assert!(harness.stop().await.is_empty());
    }

    #[tokio::test]
    async fn test_interleaved_requests_are_independent() {
        let mut harness = Harness::new(10);
        harness.start();

        for name in ["Neptune", "Pluto", "Venus", "Uranus", "venus", "Venus"] {
            harness.request(name).await;
        }

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(harness.next_distance().await);
        }
        assert_eq!(seen, vec![52_432_704, 41_400_000, -1_573_567_296, 41_400_000]);
        assert!(harness.stop().await.is_empty());
    }

    #[tokio::test]
    async fn test_backlog_beyond_queue_depth_drops_oldest() {
        let mut harness = Harness::new(10);

        // Queue up before the loop runs: 2 Venus then 10 Mars
        for _ in 0..2 {
            harness.request("Venus").await;
        }
        for _ in 0..10 {
            harness.request("Mars").await;
        }
        harness.start();

        for _ in 0..10 {
            assert_eq!(harness.next_distance().await, 78_300_000);
        }
        assert_eq!(harness.metrics.snapshot().requests_handled, 10);
        assert!(harness.stop().await.is_empty());
    }

    // =============================================================================
    // PROPERTY TESTS: NAMES OUTSIDE THE TABLE
    // =============================================================================

    mod properties {
        use super::*;
        use planet_distance::ports::DistancePublisher;
        use planet_distance::DistanceTable;
        use proptest::prelude::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        #[derive(Default)]
        struct CountingPublisher {
            count: AtomicUsize,
        }

        #[async_trait::async_trait]
        impl DistancePublisher for CountingPublisher {
            async fn publish_distance(&self, _value: i32) -> usize {
                self.count.fetch_add(1, Ordering::Relaxed);
                0
            }
        }

        proptest! {
            #[test]
            fn prop_unknown_names_never_publish(name in ".*") {
                prop_assume!(!DistanceTable::new().contains(&name));

                let publisher = Arc::new(CountingPublisher::default());
                let service = PlanetDistanceService::new(publisher.clone());
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .build()
                    .expect("runtime");

                let outcome = runtime.block_on(service.handle(&name));

                prop_assert_eq!(outcome.published_value(), None);
                prop_assert_eq!(publisher.count.load(Ordering::Relaxed), 0);
                prop_assert_eq!(service.resolve(&name), Err(DistanceError::UnknownPlanet(name.clone())));
            }

            #[test]
            fn prop_case_changes_do_not_match(index in 0usize..8) {
                let (planet, _) = planet_distance::domain::MIN_DISTANCES_KM[index];
                let service = PlanetDistanceService::new(Arc::new(CountingPublisher::default()));

                prop_assert!(service.resolve(&planet.to_lowercase()).is_err());
                prop_assert!(service.resolve(&planet.to_uppercase()).is_err());
                prop_assert!(service.resolve(planet).is_ok());
            }
        }
    }
}
