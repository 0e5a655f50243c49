//! Coordinator core
//!
//! Consumes the event queue one event at a time, in arrival order. Each event
//! is handled to completion, writes included, before the next is taken, so
//! the registries need no locking: this loop is their only reader and writer.

use log::{debug, info, warn};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::{ClientRecord, ClientRegistry, Connection};
use crate::config::ServerConfig;
use crate::coordinator::{Event, EventKind};
use crate::middleware::logging::peer;
use crate::middleware::{BanRegistry, RateLimiter, Verdict};
use crate::protocol::commands::command_literals;
use crate::protocol::responses;
use crate::protocol::{Command, Frame};

pub struct Coordinator<C> {
    clients: ClientRegistry<C>,
    bans: BanRegistry,
    limiter: RateLimiter,
    greeting: String,
    safe_mode: bool,
    /// Clients whose last write failed, torn down once the current event is done.
    failed: Vec<SocketAddr>,
}

impl<C: Connection> Coordinator<C> {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            clients: ClientRegistry::new(),
            bans: BanRegistry::new(config.ban_duration()),
            limiter: RateLimiter::new(config.min_message_interval(), config.max_strikes),
            greeting: responses::commands_available(&command_literals()),
            safe_mode: config.safe_mode,
            failed: Vec::new(),
        }
    }

    pub fn clients(&self) -> &ClientRegistry<C> {
        &self.clients
    }

    pub fn bans(&self) -> &BanRegistry {
        &self.bans
    }

    /// Process events until every sender is gone. The server keeps a sender
    /// for its whole lifetime, so in practice this never returns.
    pub async fn run(mut self, mut events: mpsc::Receiver<Event<C>>) {
        info!("Coordinator started");

        while let Some(event) = events.recv().await {
            self.handle_event(event, Instant::now()).await;
        }

        warn!("Event queue closed, coordinator stopping");
    }

    /// Apply one event as if it arrived at `now`.
    pub async fn handle_event(&mut self, event: Event<C>, now: Instant) {
        let Event { addr, kind } = event;

        match kind {
            EventKind::Connected {
                connection,
                identity,
            } => self.on_connect(addr, connection, identity, now).await,
            EventKind::Disconnected => {
                if self.clients.contains(&addr) {
                    self.teardown(addr, None).await;
                } else {
                    debug!("Disconnect from unregistered {}", self.peer(addr));
                }
            }
            EventKind::Frame(frame) => self.on_frame(addr, frame, now).await,
        }

        self.drop_failed().await;
    }

    async fn on_connect(&mut self, addr: SocketAddr, mut connection: C, identity: String, now: Instant) {
        if let Some(remaining) = self.bans.remaining(addr.ip(), now) {
            info!(
                "Rejected connection from banned host {} ({}s left)",
                self.peer(addr),
                whole_seconds(remaining)
            );
            let notice = responses::banned(whole_seconds(remaining));
            if let Err(e) = connection.send(notice.as_bytes()).await {
                debug!("Failed to send ban notice to {}: {}", self.peer(addr), e);
            }
            connection.close().await;
            return;
        }

        let record = ClientRecord::new(connection, addr, identity, now);
        if let Err(rejected) = self.clients.insert(record) {
            warn!("Duplicate connect from {}, closing new connection", self.peer(addr));
            rejected.into_connection().close().await;
            return;
        }

        info!(
            "Client {} connected ({} online)",
            self.peer(addr),
            self.clients.len()
        );

        let greeting = self.greeting.clone();
        self.send_to(addr, &greeting).await;
    }

    async fn on_frame(&mut self, addr: SocketAddr, frame: Frame, now: Instant) {
        if !self.clients.contains(&addr) {
            debug!("Ignoring frame from unregistered {}", self.peer(addr));
            return;
        }

        // Another connection from the same host got banned after this one joined
        if let Some(remaining) = self.bans.remaining(addr.ip(), now) {
            info!("Disconnecting {}: host is banned", self.peer(addr));
            let notice = responses::banned(whole_seconds(remaining));
            self.teardown(addr, Some(notice.as_str())).await;
            return;
        }

        match frame {
            Frame::Message(body) => self.on_message(addr, &body, now).await,
            Frame::Command(Command::Quit) => {
                info!("Client {} requested to quit", self.peer(addr));
                self.teardown(addr, None).await;
            }
            Frame::Command(Command::SetName(name)) => self.on_set_name(addr, name).await,
            Frame::Command(Command::ListUsers) => self.on_list_users(addr).await,
            Frame::Unrecognized(raw) => {
                warn!("Invalid message from {}: {:?}", self.peer(addr), raw);
                self.teardown(addr, Some(responses::INVALID_MESSAGE)).await;
            }
        }
    }

    async fn on_message(&mut self, addr: SocketAddr, body: &str, now: Instant) {
        let Some(record) = self.clients.get_mut(&addr) else {
            return;
        };

        match self.limiter.check(record, now) {
            Verdict::Accepted => {
                debug!("Message received from {}: {:?}", self.peer(addr), body);
                self.broadcast(addr, body).await;
            }
            Verdict::Rejected { strikes } => {
                info!("Rate limited {} (strike {})", self.peer(addr), strikes);
                self.send_to(addr, &responses::rate_limited(strikes)).await;
            }
            Verdict::Banned { strikes } => {
                warn!(
                    "Client {} exceeded max strikes ({}), banning host",
                    self.peer(addr),
                    strikes
                );
                self.send_to(addr, &responses::rate_limited(strikes)).await;
                self.bans.ban(addr.ip(), now);
                self.teardown(addr, Some(responses::MAX_STRIKES_REACHED)).await;
            }
        }
    }

    async fn on_set_name(&mut self, addr: SocketAddr, name: String) {
        if name.is_empty() {
            self.send_to(addr, responses::SET_NAME_USAGE).await;
            return;
        }

        let reply = responses::name_set(&name);
        if let Some(record) = self.clients.get_mut(&addr) {
            info!("Client {} set username to {}", peer(addr, self.safe_mode), name);
            record.set_display_name(name);
        }
        self.send_to(addr, &reply).await;
    }

    async fn on_list_users(&mut self, addr: SocketAddr) {
        debug!("Client {} requested users", self.peer(addr));

        let mut identities: Vec<&str> = self.clients.others(addr).map(|r| r.identity()).collect();
        identities.sort_unstable();
        let reply = responses::users(&identities);

        self.send_to(addr, &reply).await;
    }

    /// Remove a client, optionally telling it why first, close its connection
    /// and announce the departure to everyone left.
    async fn teardown(&mut self, addr: SocketAddr, notice: Option<&str>) {
        let Some(mut record) = self.clients.remove(&addr) else {
            return;
        };

        if let Some(notice) = notice {
            if let Err(e) = record.connection_mut().send(notice.as_bytes()).await {
                debug!("Failed to send notice to {}: {}", self.peer(addr), e);
            }
        }
        record.connection_mut().close().await;

        info!(
            "Client {} disconnected ({} online)",
            self.peer(addr),
            self.clients.len()
        );

        let announcement = responses::client_disconnected(record.display_name());
        self.broadcast(addr, &announcement).await;
    }

    async fn drop_failed(&mut self) {
        while let Some(addr) = self.failed.pop() {
            self.teardown(addr, None).await;
        }
    }

    async fn send_to(&mut self, addr: SocketAddr, message: &str) {
        let Some(record) = self.clients.get_mut(&addr) else {
            return;
        };

        if let Err(e) = record.connection_mut().send(message.as_bytes()).await {
            warn!("Failed to write to {}: {}", peer(addr, self.safe_mode), e);
            self.failed.push(addr);
        }
    }

    /// Write `message` to every registered client except `from`.
    async fn broadcast(&mut self, from: SocketAddr, message: &str) {
        for record in self.clients.others_mut(from) {
            if let Err(e) = record.connection_mut().send(message.as_bytes()).await {
                warn!(
                    "Failed to write to {}: {}",
                    peer(record.remote_addr(), self.safe_mode),
                    e
                );
                self.failed.push(record.remote_addr());
            }
        }
    }

    fn peer(&self, addr: SocketAddr) -> String {
        peer(addr, self.safe_mode)
    }
}

/// Seconds left, rounded up so an active ban never reads as 0.
fn whole_seconds(remaining: Duration) -> u64 {
    remaining
        .as_secs()
        .saturating_add(u64::from(remaining.subsec_nanos() > 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::classify;
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Shared view into a [`MockConnection`] that outlives the handle.
    #[derive(Clone, Default)]
    struct Outbox {
        inbox: Arc<Mutex<Vec<String>>>,
        closed: Arc<AtomicBool>,
        broken: Arc<AtomicBool>,
    }

    impl Outbox {
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.inbox.lock().unwrap())
        }

        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }

        fn break_writes(&self) {
            self.broken.store(true, Ordering::SeqCst);
        }
    }

    struct MockConnection {
        outbox: Outbox,
    }

    impl Connection for MockConnection {
        async fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
            if self.outbox.is_closed() || self.outbox.broken.load(Ordering::SeqCst) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            self.outbox
                .inbox
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(bytes).into_owned());
            Ok(())
        }

        async fn close(&mut self) {
            self.outbox.closed.store(true, Ordering::SeqCst);
        }
    }

    const GREETING: &str = "Commands available: [/quit /users /username]\n";

    fn config() -> ServerConfig {
        ServerConfig {
            min_message_interval_ms: 2000,
            max_strikes: 5,
            ban_duration_secs: 30,
            ..ServerConfig::default()
        }
    }

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    async fn connect(
        coordinator: &mut Coordinator<MockConnection>,
        peer: &str,
        now: Instant,
    ) -> Outbox {
        let outbox = Outbox::default();
        let connection = MockConnection {
            outbox: outbox.clone(),
        };
        coordinator
            .handle_event(
                Event::connected(addr(peer), connection, format!("hash({peer})")),
                now,
            )
            .await;
        outbox
    }

    /// Connect and discard the greeting.
    async fn join(coordinator: &mut Coordinator<MockConnection>, peer: &str, now: Instant) -> Outbox {
        let outbox = connect(coordinator, peer, now).await;
        assert_eq!(outbox.take(), vec![GREETING.to_string()]);
        outbox
    }

    async fn send(coordinator: &mut Coordinator<MockConnection>, peer: &str, text: &str, now: Instant) {
        let frame = classify(text).expect("test frames are never blank");
        coordinator.handle_event(Event::frame(addr(peer), frame), now).await;
    }

    #[tokio::test]
    async fn connect_registers_and_greets_only_the_newcomer() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;

        let b = connect(&mut coordinator, "10.0.0.2:2000", start).await;

        assert_eq!(b.take(), vec![GREETING.to_string()]);
        assert!(a.take().is_empty());
        assert_eq!(coordinator.clients().len(), 2);
        let record = coordinator.clients().get(&addr("10.0.0.2:2000")).unwrap();
        assert_eq!(record.display_name(), "");
        assert_eq!(record.identity(), "hash(10.0.0.2:2000)");
        assert_eq!(record.strike_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_address_keeps_single_record() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let first = join(&mut coordinator, "10.0.0.1:1000", start).await;

        let second = connect(&mut coordinator, "10.0.0.1:1000", start).await;

        assert!(second.is_closed());
        assert!(second.take().is_empty());
        assert!(!first.is_closed());
        assert_eq!(coordinator.clients().len(), 1);
    }

    #[tokio::test]
    async fn message_inside_cooldown_is_rejected_with_strike() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "hello\n", at(start, 500)).await;
        send(&mut coordinator, "10.0.0.1:1000", "hello\n", at(start, 600)).await;

        assert_eq!(
            a.take(),
            vec![
                "You are sending messages too fast. Strike Count : 1\n".to_string(),
                "You are sending messages too fast. Strike Count : 2\n".to_string(),
            ]
        );
        assert!(b.take().is_empty());
        let record = coordinator.clients().get(&addr("10.0.0.1:1000")).unwrap();
        assert_eq!(record.strike_count(), 2);
    }

    #[tokio::test]
    async fn accepted_message_reaches_everyone_but_sender() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;
        let c = join(&mut coordinator, "10.0.0.3:3000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "too soon\n", at(start, 100)).await;
        a.take();
        send(&mut coordinator, "10.0.0.1:1000", "hello all\n", at(start, 2500)).await;

        assert!(a.take().is_empty());
        assert_eq!(b.take(), vec!["hello all\n".to_string()]);
        assert_eq!(c.take(), vec!["hello all\n".to_string()]);

        let record = coordinator.clients().get(&addr("10.0.0.1:1000")).unwrap();
        assert_eq!(record.strike_count(), 0);
        assert_eq!(record.last_message_at(), at(start, 2500));
    }

    #[tokio::test]
    async fn exceeding_max_strikes_bans_host_until_expiry() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;
        b.take();

        for i in 0..6 {
            send(&mut coordinator, "10.0.0.1:1000", "spam\n", at(start, 100 + i)).await;
        }

        let received = a.take();
        assert_eq!(received.len(), 7);
        assert_eq!(
            received[5],
            "You are sending messages too fast. Strike Count : 6\n"
        );
        assert_eq!(received[6], responses::MAX_STRIKES_REACHED);
        assert!(a.is_closed());
        assert!(!coordinator.clients().contains(&addr("10.0.0.1:1000")));
        assert_eq!(coordinator.bans().len(), 1);
        assert!(coordinator.bans().contains(&addr("10.0.0.1:1000").ip()));
        assert_eq!(b.take(), vec!["Client  Disconnected\n".to_string()]);

        // Same host, new port, ten seconds into the ban
        let retry = connect(&mut coordinator, "10.0.0.1:1001", at(start, 10_105)).await;
        assert_eq!(retry.take(), vec!["You are banned for 20 seconds\n".to_string()]);
        assert!(retry.is_closed());
        assert!(!coordinator.clients().contains(&addr("10.0.0.1:1001")));

        // After expiry the stale ban is dropped and the host gets in
        let back = connect(&mut coordinator, "10.0.0.1:1002", at(start, 31_000)).await;
        assert_eq!(back.take(), vec![GREETING.to_string()]);
        assert!(coordinator.clients().contains(&addr("10.0.0.1:1002")));
        assert!(coordinator.bans().is_empty());
    }

    #[tokio::test]
    async fn very_long_ban_still_rejects_reconnect() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&ServerConfig {
            max_strikes: 0,
            ban_duration_secs: u64::MAX,
            ..config()
        });
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "spam\n", at(start, 100)).await;
        assert!(a.is_closed());
        assert_eq!(coordinator.bans().len(), 1);

        let retry = connect(&mut coordinator, "10.0.0.1:1001", at(start, 200)).await;
        assert_eq!(
            retry.take(),
            vec![format!("You are banned for {} seconds\n", u64::MAX)]
        );
        assert!(retry.is_closed());

        let other = connect(&mut coordinator, "10.0.0.2:2000", at(start, 300)).await;
        assert_eq!(other.take(), vec![GREETING.to_string()]);
    }

    #[tokio::test]
    async fn banned_host_other_connections_are_dropped_on_next_event() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let sibling = join(&mut coordinator, "10.0.0.1:1001", start).await;

        for i in 0..6 {
            send(&mut coordinator, "10.0.0.1:1000", "spam\n", at(start, i)).await;
        }
        assert!(a.is_closed());
        sibling.take();

        send(&mut coordinator, "10.0.0.1:1001", "/users\n", at(start, 1000)).await;

        assert_eq!(sibling.take(), vec!["You are banned for 30 seconds\n".to_string()]);
        assert!(sibling.is_closed());
        assert!(coordinator.clients().is_empty());
    }

    #[tokio::test]
    async fn set_name_is_acknowledged_to_sender_only() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "/username  Alice \n", start).await;

        assert_eq!(a.take(), vec!["Username set to Alice\n".to_string()]);
        assert!(b.take().is_empty());
        let record = coordinator.clients().get(&addr("10.0.0.1:1000")).unwrap();
        assert_eq!(record.display_name(), "Alice");

        send(&mut coordinator, "10.0.0.1:1000", "hi Bob\n", at(start, 3000)).await;
        assert!(a.take().is_empty());
        assert_eq!(b.take(), vec!["hi Bob\n".to_string()]);
    }

    #[tokio::test]
    async fn set_name_without_argument_gets_usage() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        send(&mut coordinator, "10.0.0.1:1000", "/username Ann\n", start).await;
        a.take();

        send(&mut coordinator, "10.0.0.1:1000", "/username\n", start).await;

        assert_eq!(a.take(), vec![responses::SET_NAME_USAGE.to_string()]);
        let record = coordinator.clients().get(&addr("10.0.0.1:1000")).unwrap();
        assert_eq!(record.display_name(), "Ann");
    }

    #[tokio::test]
    async fn quit_announces_departure_by_display_name() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;
        send(&mut coordinator, "10.0.0.1:1000", "/username Alice\n", start).await;
        a.take();

        send(&mut coordinator, "10.0.0.1:1000", "/quit\n", start).await;

        assert!(a.is_closed());
        assert!(a.take().is_empty());
        assert_eq!(b.take(), vec!["Client Alice Disconnected\n".to_string()]);
        assert_eq!(coordinator.clients().len(), 1);

        // The listener's late disconnect for the same address changes nothing
        coordinator
            .handle_event(Event::disconnected(addr("10.0.0.1:1000")), start)
            .await;
        assert!(b.take().is_empty());
    }

    #[tokio::test]
    async fn transport_disconnect_behaves_like_quit() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;

        coordinator
            .handle_event(Event::disconnected(addr("10.0.0.1:1000")), start)
            .await;

        assert!(a.is_closed());
        assert_eq!(b.take(), vec!["Client  Disconnected\n".to_string()]);
        assert!(!coordinator.clients().contains(&addr("10.0.0.1:1000")));
    }

    #[tokio::test]
    async fn list_users_shows_other_identities_only() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        join(&mut coordinator, "10.0.0.2:2000", start).await;
        join(&mut coordinator, "10.0.0.3:3000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "/users\n", start).await;
        send(&mut coordinator, "10.0.0.1:1000", "/users\n", start).await;

        let replies = a.take();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], replies[1]);
        assert_eq!(
            replies[0],
            "Users: [hash(10.0.0.2:2000) hash(10.0.0.3:3000)]\n"
        );
        assert!(!replies[0].contains("hash(10.0.0.1:1000)"));
    }

    #[tokio::test]
    async fn unrecognized_frame_kicks_after_notice() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;

        send(&mut coordinator, "10.0.0.1:1000", "/test\n", start).await;

        assert_eq!(a.take(), vec![responses::INVALID_MESSAGE.to_string()]);
        assert!(a.is_closed());
        assert!(!coordinator.clients().contains(&addr("10.0.0.1:1000")));
        assert_eq!(b.take(), vec!["Client  Disconnected\n".to_string()]);
        assert!(coordinator.bans().is_empty());
    }

    #[tokio::test]
    async fn failed_write_tears_down_the_receiver() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;
        let b = join(&mut coordinator, "10.0.0.2:2000", start).await;
        let c = join(&mut coordinator, "10.0.0.3:3000", start).await;
        send(&mut coordinator, "10.0.0.2:2000", "/username bob\n", start).await;
        b.take();
        b.break_writes();

        send(&mut coordinator, "10.0.0.1:1000", "hello\n", at(start, 5000)).await;

        assert!(b.is_closed());
        assert!(!coordinator.clients().contains(&addr("10.0.0.2:2000")));
        assert_eq!(a.take(), vec!["Client bob Disconnected\n".to_string()]);
        let mut seen = c.take();
        seen.sort();
        assert_eq!(
            seen,
            vec!["Client bob Disconnected\n".to_string(), "hello\n".to_string()]
        );
    }

    #[tokio::test]
    async fn frames_from_unknown_addresses_are_ignored() {
        let start = Instant::now();
        let mut coordinator = Coordinator::new(&config());
        let a = join(&mut coordinator, "10.0.0.1:1000", start).await;

        send(&mut coordinator, "10.0.0.9:9000", "hello\n", at(start, 5000)).await;
        send(&mut coordinator, "10.0.0.9:9000", "/bogus\n", at(start, 5000)).await;
        coordinator
            .handle_event(Event::disconnected(addr("10.0.0.9:9000")), start)
            .await;

        assert!(a.take().is_empty());
        assert_eq!(coordinator.clients().len(), 1);
    }

    #[tokio::test]
    async fn run_applies_events_in_queue_order() {
        let (tx, rx) = mpsc::channel(16);
        let coordinator = Coordinator::new(&ServerConfig {
            min_message_interval_ms: 0,
            ..config()
        });

        let a = Outbox::default();
        let b = Outbox::default();
        tx.send(Event::connected(
            addr("10.0.0.1:1000"),
            MockConnection { outbox: a.clone() },
            "ha".into(),
        ))
        .await
        .unwrap();
        tx.send(Event::connected(
            addr("10.0.0.2:2000"),
            MockConnection { outbox: b.clone() },
            "hb".into(),
        ))
        .await
        .unwrap();
        for body in ["one\n", "two\n", "three\n"] {
            tx.send(Event::frame(addr("10.0.0.1:1000"), Frame::Message(body.into())))
                .await
                .unwrap();
        }
        tx.send(Event::frame(addr("10.0.0.1:1000"), Frame::Command(Command::Quit)))
            .await
            .unwrap();
        drop(tx);

        coordinator.run(rx).await;

        assert_eq!(a.take(), vec![GREETING.to_string()]);
        assert_eq!(
            b.take(),
            vec![
                GREETING.to_string(),
                "one\n".to_string(),
                "two\n".to_string(),
                "three\n".to_string(),
                "Client  Disconnected\n".to_string(),
            ]
        );
    }

    #[test]
    fn remaining_seconds_round_up() {
        assert_eq!(whole_seconds(Duration::from_millis(19_001)), 20);
        assert_eq!(whole_seconds(Duration::from_secs(20)), 20);
        assert_eq!(whole_seconds(Duration::from_millis(1)), 1);
    }
}
